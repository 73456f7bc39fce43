use std::path::PathBuf;

use filecache_harness::harness::HarnessConfig;

pub fn get_test_fixture_path(kind: &str, fixture_name: Option<&str>) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("filecache")
        .join(kind);
    match fixture_name {
        Some(fixture_name) => dir.join(fixture_name),
        None => dir,
    }
}

#[allow(dead_code)]
pub fn fixture_config() -> HarnessConfig {
    HarnessConfig {
        config_dir: get_test_fixture_path("config", None),
        master_file: PathBuf::from("filecache.conf"),
        data_dir: get_test_fixture_path("data", None),
    }
}
