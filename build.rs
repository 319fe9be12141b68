use chrono::Utc;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Placeholder left in a property when its value could not be determined.
fn unresolved(name: &str) -> String {
    format!("@{}@", name.to_uppercase())
}

/// Run git and return trimmed stdout, or None if git failed or printed nothing
fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
}

/// Read "major.minor.patch" from [package.metadata.speedb]
fn metadata_version(cargo_toml: &Option<toml::Table>, key: &str) -> (u32, u32, u32) {
    let raw = cargo_toml
        .as_ref()
        .and_then(|t| t.get("package"))
        .and_then(|p| p.as_table())
        .and_then(|p| p.get("metadata"))
        .and_then(|m| m.as_table())
        .and_then(|m| m.get("speedb"))
        .and_then(|s| s.as_table())
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("0.0.0")
        .to_string();

    let mut parts = raw.split('.').map(|p| p.trim().parse::<u32>().unwrap_or(0));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("build_version.rs");
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let cargo_toml_path = Path::new(&manifest_dir).join("Cargo.toml");

    let cargo_toml = std::fs::read_to_string(&cargo_toml_path)
        .ok()
        .and_then(|content| content.parse::<toml::Table>().ok());

    let speedb = metadata_version(&cargo_toml, "speedb_version");
    let rocksdb = metadata_version(&cargo_toml, "rocksdb_version");

    let git_sha = git(&["rev-parse", "HEAD"])
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| unresolved("git_sha"));
    let git_tag = git(&["describe", "--tags", "--exact-match"])
        .or_else(|| git(&["rev-parse", "--abbrev-ref", "HEAD"]))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| unresolved("git_tag"));

    // A modified tree is dated by the build itself, a clean one by its last commit
    let has_git_changes = git(&["status", "--porcelain"])
        .map(|s| !s.is_empty())
        .unwrap_or(false);
    let build_date = if has_git_changes {
        Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        git(&["log", "-1", "--format=%ci"])
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| unresolved("build_date"))
    };

    let build_tag = env::var("SPDB_BUILD_TAG").unwrap_or_default();
    let use_rtti = env::var("USE_RTTI").unwrap_or_default();
    let portable = env::var("PORTABLE").unwrap_or_default();
    let debug_level = env::var("DEBUG_LEVEL").unwrap_or_else(|_| {
        match env::var("PROFILE").as_deref() {
            Ok("release") => "0".to_string(),
            Ok(_) => "1".to_string(),
            Err(_) => unresolved("debug_level"),
        }
    });

    let build_properties = [
        format!("speedb_build_git_sha:{}", git_sha),
        format!("speedb_build_git_tag:{}", git_tag),
        format!("speedb_build_date:{}", build_date),
        format!("speedb_build_tag:{}", build_tag),
    ];
    let debug_properties = [
        format!("use_rtti:{}", use_rtti),
        format!("debug_level:{}", debug_level),
        format!("portable:{}", portable),
    ];

    let mut f = File::create(&dest_path).unwrap();

    #[allow(clippy::uninlined_format_args)]
    writeln!(
        &mut f,
        r###"pub const SPEEDB_MAJOR: u32 = {};
pub const SPEEDB_MINOR: u32 = {};
pub const SPEEDB_PATCH: u32 = {};
pub const ROCKSDB_MAJOR: u32 = {};
pub const ROCKSDB_MINOR: u32 = {};
pub const ROCKSDB_PATCH: u32 = {};
pub const SPDB_BUILD_TAG: &str = {:?};
pub const RAW_BUILD_PROPERTIES: &[&str] = &{:?};
pub const RAW_DEBUG_PROPERTIES: &[&str] = &{:?};"###,
        speedb.0,
        speedb.1,
        speedb.2,
        rocksdb.0,
        rocksdb.1,
        rocksdb.2,
        build_tag,
        build_properties,
        debug_properties
    )
    .unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=.git/HEAD");
    // A missing path makes cargo rerun this script on every build
    if Path::new(&manifest_dir).join(".git/index").exists() {
        println!("cargo:rerun-if-changed=.git/index");
    }
    for var in ["SPDB_BUILD_TAG", "USE_RTTI", "PORTABLE", "DEBUG_LEVEL"] {
        println!("cargo:rerun-if-env-changed={}", var);
    }
}
