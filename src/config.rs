use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::report::OutputFormat;
use crate::roof::surface::DEFAULT_STORAGE_HEIGHT_MM;

/// 설정 파일 기본 경로
pub const DEFAULT_CONFIG_PATH: &str = "roof.toml";

/// 지붕 입력값 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofInput {
    /// 지붕 면적 [m²]
    pub area_m2: f64,
    /// 연 강수량 [mm/a]
    pub precipitation_mm: f64,
    /// 외부에서 계산한 연 잠재 증발산량 [mm/a]
    pub evapotranspiration_mm: f64,
    /// 저류 높이 [mm]. 유리·금속 피복은 0.6
    pub storage_height_mm: f64,
}

impl Default for RoofInput {
    fn default() -> Self {
        Self {
            area_m2: 100.0,
            precipitation_mm: 505.0,
            evapotranspiration_mm: 450.0,
            storage_height_mm: DEFAULT_STORAGE_HEIGHT_MM,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 로그 레벨(error/warn/info/debug/trace). 없으면 RUST_LOG 또는 info
    pub log_level: Option<String>,
    pub output: OutputFormat,
    pub roof: RoofInput,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            output: OutputFormat::Table,
            roof: RoofInput::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Parse(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나, 없으면 기본 설정을 돌려준다. 파일은 만들지 않는다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        parse(&content)
    } else {
        Ok(Config::default())
    }
}

/// TOML 문자열을 설정으로 해석한다. 빠진 항목은 기본값으로 채운다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
