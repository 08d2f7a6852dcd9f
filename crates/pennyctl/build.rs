fn main() {
    // PENNY_VERSION from the environment wins over the manifest version
    let version = match std::env::var("PENNY_VERSION") {
        Ok(v) if !v.trim().is_empty() => v,
        _ => env!("CARGO_PKG_VERSION").to_string(),
    };
    println!("cargo:rustc-env=PENNY_VERSION={version}");

    for path in ["build.rs", "Cargo.toml"] {
        println!("cargo:rerun-if-changed={path}");
    }
    println!("cargo:rerun-if-env-changed=PENNY_VERSION");
}
