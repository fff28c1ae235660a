use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 높이 표시 단위 선택. `Auto`는 로케일의 미터법 여부를 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Measurement {
    #[default]
    Auto,
    Metric,
    Imperial,
}

impl Measurement {
    /// 로케일 스냅샷에 덮어쓸 미터법 값. `Auto`면 `None`.
    pub fn metric_override(self) -> Option<bool> {
        match self {
            Measurement::Auto => None,
            Measurement::Metric => Some(true),
            Measurement::Imperial => Some(false),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 로케일 태그 또는 `auto`.
    pub language: String,
    /// 내장 문자열을 덮어쓸 언어팩 디렉터리.
    pub language_pack_dir: Option<String>,
    pub measurement: Measurement,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            measurement: Measurement::Auto,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드한다. 파일이 없으면 기본 설정을 쓰고 아무것도 만들지 않는다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
