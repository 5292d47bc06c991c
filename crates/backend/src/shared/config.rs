use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub uploads: UploadsConfig,
    /// Курсы, которые загружаются в хранилище при старте
    #[serde(default)]
    pub courses: Vec<CourseSeed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadsConfig {
    pub dir: String,
    /// URL prefix the stored files are served under
    pub public_path: String,
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CourseSeed {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub drive_link: Option<String>,
}

fn default_max_size_mb() -> usize {
    512
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[uploads]
dir = "target/uploads"
public_path = "/uploads"
max_size_mb = 512

[[courses]]
id = "1"
title = "Demo course"
drive_link = "https://drive.google.com/drive/folders/demo"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    if config.uploads.max_size_mb == 0 {
        anyhow::bail!("uploads.max_size_mb must be greater than zero");
    }

    // Served through `nest_service`, which rejects the root and relative paths
    let public_path = config.uploads.public_path.trim_end_matches('/').to_string();
    if !public_path.starts_with('/') {
        anyhow::bail!(
            "uploads.public_path must be an absolute URL path, got {:?}",
            config.uploads.public_path
        );
    }
    config.uploads.public_path = public_path;
    Ok(config)
}

/// Get the upload directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_upload_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.uploads.dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    PathBuf::from(&config.uploads.dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.uploads.public_path, "/uploads");
        assert_eq!(config.courses.len(), 1);
        assert_eq!(config.courses[0].id, "1");
    }

    #[test]
    fn test_courses_and_max_size_are_optional() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [uploads]
            dir = "/srv/uploads"
            public_path = "/files"
            "#,
        )
        .unwrap();
        assert!(config.courses.is_empty());
        assert_eq!(config.uploads.max_size_mb, 512);
        assert_eq!(get_upload_dir(&config), PathBuf::from("/srv/uploads"));
    }

    #[test]
    fn test_public_path_is_normalized() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [uploads]
            dir = "uploads"
            public_path = "/media/"
            "#,
        )
        .unwrap();
        assert_eq!(config.uploads.public_path, "/media");

        for bad in ["/", "media"] {
            let toml = format!(
                "[server]\nhost = \"h\"\nport = 1\n[uploads]\ndir = \"u\"\npublic_path = \"{}\"\n",
                bad
            );
            assert!(parse_config(&toml).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_zero_upload_limit_is_rejected() {
        let result = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [uploads]
            dir = "uploads"
            public_path = "/uploads"
            max_size_mb = 0
            "#,
        );
        assert!(result.is_err());
    }
}
