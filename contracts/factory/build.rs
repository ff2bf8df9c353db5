//! Builds the auction contract to wasm so the factory's deployment tests can
//! import it. Host builds only; set `AUCTION_WASM_SKIP` to opt out.

use std::{env, path::PathBuf, process::Command};

const AUCTION_PACKAGE: &str = "procurement-auction";
const WASM_TARGET: &str = "wasm32v1-none";

fn main() {
    println!("cargo:rustc-check-cfg=cfg(auction_wasm)");
    println!("cargo:rerun-if-changed=../auction/src");
    println!("cargo:rerun-if-changed=../auction/Cargo.toml");
    println!("cargo:rerun-if-env-changed=AUCTION_WASM_SKIP");

    let target = env::var("TARGET").unwrap_or_default();
    if target.starts_with("wasm32") || env::var_os("AUCTION_WASM_SKIP").is_some() {
        return;
    }

    let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from) else {
        return;
    };
    let workspace = manifest_dir.join("../..");
    // Separate target dir: the outer build holds the lock on the default one.
    let target_dir = workspace.join("target/auction-wasm");
    let cargo = env::var("CARGO").unwrap_or_else(|_| String::from("cargo"));

    let status = Command::new(cargo)
        .current_dir(&workspace)
        .args(["build", "--release", "--target", WASM_TARGET, "-p", AUCTION_PACKAGE])
        .arg("--target-dir")
        .arg(&target_dir)
        .env_remove("CARGO_ENCODED_RUSTFLAGS")
        .env_remove("RUSTFLAGS")
        .status();

    match status {
        Ok(status) if status.success() => println!("cargo:rustc-cfg=auction_wasm"),
        _ => println!(
            "cargo:warning=could not build {AUCTION_PACKAGE} for {WASM_TARGET}; factory deployment tests are skipped"
        ),
    }
}
