use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies the workspace config.toml next to the built binary, where
/// `shared::config::load_config` looks first.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .expect("backend crate must live in <workspace>/crates/backend");
    let source = workspace_root.join("config.toml");

    if !source.exists() {
        println!(
            "cargo:warning=config.toml not found at {:?}, the embedded default will be used",
            source
        );
        return;
    }

    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=could not locate target profile directory, config.toml not copied");
        return;
    };

    let dest = target_dir.join("config.toml");
    fs::copy(&source, &dest).unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
}

/// OUT_DIR is `target/<profile>/build/backend-xxx/out`; walk up to `target/<profile>`.
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
