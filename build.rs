//! Build script for kcal-tools
//!
//! Increments a build number on each recompilation and embeds build metadata.

use std::fs;
use std::path::Path;

fn main() {
    // Rerun only when sources change, not on every cargo invocation
    println!("cargo:rerun-if-changed=src");

    let build_number_path = Path::new("build_number.txt");
    let current: u64 = fs::read_to_string(build_number_path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let build_number = current + 1;
    fs::write(build_number_path, build_number.to_string())
        .expect("Failed to write build number file");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    // Embed for compile-time access and echo into the build log
    println!("cargo:rustc-env=KCAL_TOOLS_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=KCAL_TOOLS_BUILD_TIMESTAMP={}", timestamp);
    println!(
        "cargo:warning=kcal-tools build #{} at {}",
        build_number, timestamp
    );
}
