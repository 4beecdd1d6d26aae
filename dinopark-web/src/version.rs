// Version information module

use std::fs;

/// Version from a `VERSION` file next to the working directory, falling back
/// to the crate version.
pub fn get_version() -> String {
    for candidate in ["VERSION", "../VERSION"] {
        if let Ok(contents) = fs::read_to_string(candidate) {
            let trimmed = contents.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    env!("CARGO_PKG_VERSION").to_string()
}

#[derive(Debug, serde::Serialize)]
pub struct VersionInfo {
    pub version: String,
    pub server_time: String,
}

pub fn get_version_info() -> VersionInfo {
    VersionInfo {
        version: get_version(),
        server_time: chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
    }
}
