use std::env;

fn main() {
    let version = env::var("RECYCLE_SCAN_VERSION")
        .unwrap_or_else(|_| env::var("CARGO_PKG_VERSION").unwrap());
    println!("cargo:rerun-if-env-changed=RECYCLE_SCAN_VERSION");
    println!("cargo:rustc-env=RECYCLE_SCAN_VERSION={version}");
}
