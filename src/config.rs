use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::navigation::UserProfile;

/// 기본 설정 파일 경로.
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto"면 시스템 로케일을 따른다.
    pub language: String,
    /// 외부 TOML 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// tracing 필터 (RUST_LOG가 우선)
    pub log_level: String,
    /// 설정돼 있으면 대시보드 인사말에 사용한다. TOML 테이블이라 마지막 필드로 둔다.
    pub profile: Option<UserProfile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            log_level: "info".into(),
            profile: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(CONFIG_FILE)
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값으로 새로 만든다.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        tracing::info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

pub fn save_to(cfg: &Config, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_to(self, CONFIG_FILE)
    }

    /// 설정된 프로필 중 이름이 비어 있지 않은 것만 돌려준다.
    pub fn active_profile(&self) -> Option<UserProfile> {
        self.profile
            .clone()
            .filter(|p| !p.name.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_creates_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let cfg = load_from(&path).expect("load");
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "language = \"gu\"\n[profile]\nname = \"Ramesh\"\nlocation = \"Rajkot, Gujarat\"\n",
        )
        .expect("write");
        let cfg = load_from(&path).expect("load");
        assert_eq!(cfg.language, "gu");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.active_profile().map(|p| p.name), Some("Ramesh".to_string()));
    }

    #[test]
    fn saved_config_reloads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let cfg = Config {
            language: "hi".into(),
            language_pack_dir: Some("locales".into()),
            log_level: "debug".into(),
            profile: Some(UserProfile {
                name: "Sita".into(),
                location: String::new(),
            }),
        };
        save_to(&cfg, &path).expect("save");
        assert_eq!(load_from(&path).expect("reload"), cfg);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "language = [").expect("write");
        assert!(matches!(load_from(&path), Err(ConfigError::Serde(_))));
    }
}
