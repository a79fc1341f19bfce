use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::category::Category;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
/// 기본 저장 문서 파일 이름.
pub const DEFAULT_DATA_FILE: &str = "unit_converter.json";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `auto`, `ko`, `en`
    pub language: String,
    /// 즐겨찾기/기록/빠른 변환을 담는 JSON 문서 경로
    pub data_file: PathBuf,
    /// 카테고리를 지정하지 않았을 때 쓰는 값
    pub default_category: Category,
    /// 언어팩(`ko.toml`, `en.toml`) 디렉터리
    pub locale_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            default_category: Category::Length,
            locale_dir: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정으로 만든다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
