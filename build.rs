fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // The Python extension resolves interpreter symbols at import time on macOS.
    let building_python_module = std::env::var_os("CARGO_FEATURE_PYTHON").is_some();
    let macos = std::env::var("CARGO_CFG_TARGET_OS").is_ok_and(|os| os == "macos");
    if building_python_module && macos {
        for arg in ["-undefined", "dynamic_lookup"] {
            println!("cargo:rustc-cdylib-link-arg={arg}");
        }
    }
}
