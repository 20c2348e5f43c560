//! Entry point for the WASM application

pub fn main() {
    powizard_frontend::start();
}
