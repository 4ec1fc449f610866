//! Backend communication services.
//!
//! # Services
//!
//! - [`api`] - HTTP transport and endpoint paths
//! - [`upload`] - Image validation and `/upload` replies
//! - [`download`] - `/download/{id}` replies and browser file saving
//! - [`history`] - `/history` replies

pub mod api;
pub mod upload;
pub mod download;
pub mod history;

pub use api::*;
pub use upload::*;
pub use download::*;
pub use history::*;
