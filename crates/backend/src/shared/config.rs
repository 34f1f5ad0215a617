use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

/// Where the built page (Trunk `dist`) is served from.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub dir: PathBuf,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("../../dist"),
        }
    }
}

impl StaticFilesConfig {
    pub fn index_file(&self) -> PathBuf {
        self.dir.join("index.html")
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: PathBuf,
    /// Used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("../logs"),
            filter: "info,tower_http=warn".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[static_files]
dir = "../../dist"

[logging]
dir = "../logs"
filter = "info,tower_http=warn"
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

impl Config {
    /// Joins relative directories onto `base`; absolute ones are kept.
    pub fn resolve_paths(&mut self, base: &Path) {
        self.static_files.dir = resolve_against(base, &self.static_files.dir);
        self.logging.dir = resolve_against(base, &self.logging.dir);
    }
}

fn resolve_against(base: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Current working directory
/// 3. Embedded default
///
/// Relative directories resolve against the executable directory, falling
/// back to the current directory when it cannot be determined.
///
/// Runs before the tracing subscriber exists, so it reports where the
/// config came from instead of logging it.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    let base = match exe_dir() {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let candidates = [base.join("config.toml"), PathBuf::from("config.toml")];

    for candidate in candidates {
        if candidate.exists() {
            let contents = std::fs::read_to_string(&candidate)?;
            let mut config = parse_config(&contents)?;
            config.resolve_paths(&base);
            return Ok((config, candidate.display().to_string()));
        }
    }

    let mut config = parse_config(DEFAULT_CONFIG)?;
    config.resolve_paths(&base);
    Ok((config, "embedded default".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_files.dir, Path::new("../../dist"));
        assert_eq!(config.logging.dir, Path::new("../logs"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[server]\nport = 8081\n").unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.static_files.dir, Path::new("../../dist"));
        assert_eq!(config.logging.filter, "info,tower_http=warn");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.port, ServerConfig::default().port);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[server]\nport = \"abc\"\n").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        assert_eq!(server.socket_addr().unwrap().to_string(), "127.0.0.1:3000");

        let bad = ServerConfig {
            host: "not a host".to_string(),
            port: 3000,
        };
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_index_file() {
        let static_files = StaticFilesConfig {
            dir: PathBuf::from("public"),
        };
        assert_eq!(static_files.index_file(), Path::new("public").join("index.html"));
    }

    #[test]
    fn test_resolve_paths() {
        let mut config = parse_config(
            "[static_files]\ndir = \"dist\"\n[logging]\ndir = \"/var/log/urbannet\"\n",
        )
        .unwrap();
        config.resolve_paths(Path::new("/opt/urbannet/bin"));
        assert_eq!(config.static_files.dir, Path::new("/opt/urbannet/bin/dist"));
        assert_eq!(
            config.static_files.index_file(),
            Path::new("/opt/urbannet/bin/dist/index.html")
        );
        assert_eq!(config.logging.dir, Path::new("/var/log/urbannet"));
    }

    #[test]
    fn test_load_config_resolves_against_exe_dir() {
        let exe_dir = exe_dir().unwrap();
        let (config, _) = load_config().unwrap();
        assert!(config.static_files.index_file().starts_with(&exe_dir));
        assert!(config.logging.dir.starts_with(&exe_dir));
    }
}
