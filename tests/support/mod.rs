use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for listrec with logging env vars cleared
pub fn listrec() -> Command {
    let mut cmd = cargo_bin_cmd!("listrec");
    cmd.env_remove("RUST_LOG")
        .env_remove("LISTREC_LOG")
        .env_remove("LISTREC_CONFIG");
    cmd
}

/// Four listings: A and D clean to the same terms, B is close, C unrelated
pub const BEDROOM_LISTINGS: &str = r#"[
  {"id": "A", "remarks": "3 bedroom house with hardwood floors", "neighbourhood": "Wallingford"},
  {"id": "B", "remarks": "3 bedroom house hardwood flooring", "neighbourhood": "Wallingford"},
  {"id": "C", "remarks": "studio apartment no parking", "neighbourhood": "Capitol Hill"},
  {"id": "D", "remarks": "3 br house hardwood floor", "neighbourhood": "Wallingford"}
]"#;

/// Write `content` to `name` inside `dir` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Temp dir holding `listings.json` with [`BEDROOM_LISTINGS`]
pub fn setup_listings() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "listings.json", BEDROOM_LISTINGS);
    dir
}
