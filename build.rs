use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.lock");

    // Git hash is not available in Docker builds
    let build_version = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default();
    println!("cargo:rustc-env=BUILD_VERSION={}", build_version);

    // Compiler version stands in for the "language runtime" on the index page
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "rustc (unknown)".to_string());
    println!("cargo:rustc-env=RUSTC_VERSION={}", rustc_version);

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let hyper_version = locked_version(&Path::new(&manifest_dir).join("Cargo.lock"), "hyper")
        .unwrap_or_else(|| "1".to_string());
    println!("cargo:rustc-env=HYPER_VERSION={}", hyper_version);
}

/// Find the version of `package` recorded in a Cargo.lock file.
fn locked_version(lock_path: &Path, package: &str) -> Option<String> {
    let content = fs::read_to_string(lock_path).ok()?;
    let name_line = format!("name = \"{}\"", package);
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        if line.trim() != name_line {
            continue;
        }
        let version = lines.next()?.trim();
        return version
            .strip_prefix("version = \"")
            .and_then(|v| v.strip_suffix('"'))
            .map(|v| v.to_string());
    }

    None
}
