//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialize logging once per test binary
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive("focus_playlist=debug".parse().expect("valid directive"));

        fmt().with_env_filter(filter).with_test_writer().init();
    });
}

/// Write a fake audio file into `dir` and return its path
pub fn write_audio(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}
