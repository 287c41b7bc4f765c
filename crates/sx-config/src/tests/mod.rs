
use std::env;

use tempfile::TempDir;

/// Restores an env var to its previous value on drop
pub struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        let previous = env::var(key).ok();
        // SAFETY: config tests run serially (#[serial]) and never race
        // on the environment.
        unsafe { env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see EnvGuard::set
        unsafe {
            match &self.previous {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Point SKILLSWAP_CONFIG_DIR at a fresh temp directory
pub fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let guard = EnvGuard::set(
        "SKILLSWAP_CONFIG_DIR",
        temp.path().to_str().expect("temp path is not utf-8"),
    );
    (temp, guard)
}
