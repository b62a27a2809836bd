//! UniFFI bindgen CLI tool for generating the mobile bindings.
//!
//! Generate Swift bindings for the iOS app:
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/librecipe_book.so --language swift --out-dir ./bindings
//! ```
//!
//! Generate Kotlin bindings for the Android app:
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/librecipe_book.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
