//! UniFFI bindgen CLI tool for generating language bindings.
//!
//! Generates the Swift and Kotlin bindings used by the Sabras Kitchen apps
//! from the compiled sabras-recipes library.
//!
//! ## Usage
//!
//! Generate Swift bindings:
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/libsabras_recipes.so --language swift --out-dir ./bindings
//! ```
//!
//! Generate Kotlin bindings:
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/libsabras_recipes.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
