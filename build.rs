//! Build script for SoftSell
//!
//! When the `ui` feature is enabled, checks that the Leptos frontend has been
//! built into `ui/dist` (the folder the server embeds).

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(feature = "ui")]
    {
        println!("cargo:rerun-if-changed=ui/dist/");
        println!("cargo:rerun-if-changed=ui/src/");
        println!("cargo:rerun-if-changed=ui/index.html");
        println!("cargo:rerun-if-changed=ui/Cargo.toml");
        check_ui_dist();
    }
}

/// Warn when the embedded UI would be empty
#[cfg(feature = "ui")]
fn check_ui_dist() {
    use std::process::Command;

    let ui_dist = std::path::Path::new("ui/dist");
    if ui_dist.join("index.html").exists() {
        return;
    }

    let trunk_found = Command::new("trunk")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success());

    println!("cargo:warning=");
    println!("cargo:warning=UI assets not found in ui/dist/");
    println!("cargo:warning=Build the frontend before compiling with --features ui:");
    if !trunk_found {
        println!("cargo:warning=    cargo install trunk");
        println!("cargo:warning=    rustup target add wasm32-unknown-unknown");
    }
    println!("cargo:warning=    cd ui && trunk build --release");
    println!("cargo:warning=");

    // rust-embed needs the folder to exist even when empty
    if let Err(e) = std::fs::create_dir_all(ui_dist) {
        println!("cargo:warning=Could not create ui/dist: {}", e);
    }
}
