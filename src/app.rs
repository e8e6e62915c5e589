use std::io::Write;

use crate::cli::{Cli, Command};
use crate::config::{self, Config};
use crate::logging;
use crate::report;
use crate::roof::{Roof, RoofError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 지붕 입력값 오류
    Roof(RoofError),
    /// 보고서 직렬화 오류
    Report(toml::ser::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Roof(e) => write!(f, "입력 오류: {e}"),
            AppError::Report(e) => write!(f, "보고서 출력 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<RoofError> for AppError {
    fn from(value: RoofError) -> Self {
        AppError::Roof(value)
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(value: toml::ser::Error) -> Self {
        AppError::Report(value)
    }
}

/// 설정의 지붕 입력값으로 `Roof`를 만든다.
pub fn roof_from_config(cfg: &Config) -> Result<Roof, RoofError> {
    Roof::with_storage_height(
        cfg.roof.area_m2,
        cfg.roof.precipitation_mm,
        cfg.roof.evapotranspiration_mm,
        cfg.roof.storage_height_mm,
    )
}

/// 설정으로부터 보고서를 계산해 지정 형식의 문자열로 만든다.
pub fn render_report(cfg: &Config) -> Result<String, AppError> {
    let roof = roof_from_config(cfg)?;
    log::info!("{roof}");
    let report = report::steep_roof_report(&roof);
    Ok(report.render(cfg.output)?)
}

/// 명령행 인자를 받아 애플리케이션을 실행한다.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    if cli.command == Some(Command::InitConfig) {
        logging::init_logging(cli.log_level.as_deref());
        Config::default().save(&cli.config)?;
        log::info!("기본 설정 저장: {}", cli.config.display());
        return Ok(());
    }

    let mut cfg = config::load_or_default(&cli.config)?;
    cli.apply_overrides(&mut cfg);
    logging::init_logging(cfg.log_level.as_deref());
    if cli.config.exists() {
        log::info!("설정 파일 로드: {}", cli.config.display());
    } else {
        log::info!("설정 파일 없음({}), 기본값 사용", cli.config.display());
    }
    log::debug!("출력 형식: {:?}", cfg.output);

    let out = render_report(&cfg)?;
    std::io::stdout().lock().write_all(out.as_bytes())?;
    Ok(())
}
