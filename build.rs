use std::env;
use std::process::Command;

/// Short hash of HEAD, or `None` outside a git checkout.
fn git_hash() -> Option<String> {
    let output = match Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            println!("cargo:warning=Could not run git for the build version: {}", e);
            return None;
        }
    };

    if !output.status.success() {
        println!(
            "cargo:warning=git rev-parse failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let release = env::var("PROFILE").as_deref() == Ok("release");

    // Debug builds skip the git lookup unless BBL_VERSION_WITH_HASH is set.
    let with_hash = release || env::var_os("BBL_VERSION_WITH_HASH").is_some();

    let build_version = match with_hash.then(git_hash).flatten() {
        Some(hash) => format!("{} ({})", version, hash),
        None if release => version,
        None => format!("{}-dev", version),
    };

    println!("cargo:rustc-env=BBL_BUILD_VERSION={}", build_version);
    println!("cargo:rerun-if-env-changed=BBL_VERSION_WITH_HASH");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=Cargo.toml");
}
