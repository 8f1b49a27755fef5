use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DATA_DIR_ENV: &str = "MPLUS_TRACKER_DATA_DIR";
pub const API_BASE_ENV: &str = "MPLUS_TRACKER_API_BASE";
pub const TIMEOUT_ENV: &str = "MPLUS_TRACKER_TIMEOUT_SECS";

const DEFAULT_API_BASE: &str = "https://raider.io";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub data_dir: PathBuf,
    pub roster_path: PathBuf,
    pub realms_path: PathBuf,
    pub dungeons_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let data_dir = env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let api_base_url = env::var(API_BASE_ENV)
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let timeout_secs = env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::with_data_dir(data_dir, api_base_url, Duration::from_secs(timeout_secs))
    }

    pub fn with_data_dir(data_dir: PathBuf, api_base_url: String, request_timeout: Duration) -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            api_base_url,
            request_timeout,
            roster_path: data_dir.join("characters.json"),
            realms_path: data_dir.join("realms.json"),
            dungeons_path: data_dir.join("dungeons.json"),
            data_dir,
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_data_dir(
            default_data_dir(),
            DEFAULT_API_BASE.to_string(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}

fn default_data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("."));
        return PathBuf::from(appdata).join("mplus-tracker");
    }

    if let Some(xdg) = env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join("mplus-tracker");
    }
    let home = env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    home.join(".local/share/mplus-tracker")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths_live_in_data_dir() {
        let cfg = Config::with_data_dir(
            PathBuf::from("/tmp/mplus"),
            "http://localhost:9000".to_string(),
            Duration::from_secs(3),
        );
        assert_eq!(cfg.roster_path, PathBuf::from("/tmp/mplus/characters.json"));
        assert_eq!(cfg.realms_path, PathBuf::from("/tmp/mplus/realms.json"));
        assert_eq!(cfg.dungeons_path, PathBuf::from("/tmp/mplus/dungeons.json"));
        assert_eq!(cfg.log_dir(), PathBuf::from("/tmp/mplus/logs"));
        assert_eq!(cfg.tick_rate, Duration::from_millis(250));
    }

    #[test]
    fn default_points_at_raider_io() {
        let cfg = Config::default();
        assert_eq!(cfg.api_base_url, "https://raider.io");
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
        assert!(cfg.data_dir.ends_with("mplus-tracker"));
    }
}
