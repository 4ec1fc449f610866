//! Entry point for the WASM application

pub fn main() {
    ocr_translator::start();
}
