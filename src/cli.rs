use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::report::OutputFormat;
use crate::roof::StorageCovering;

/// DWA-A102 급경사 지붕 물수지 계산기.
#[derive(Debug, Parser)]
#[command(
    name = "roof-balance",
    version,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// 지붕 면적 [m²]
    #[arg(long)]
    pub area: Option<f64>,

    /// 연 강수량 P [mm/a]
    #[arg(long, short = 'p')]
    pub precipitation: Option<f64>,

    /// 연 잠재 증발산량 ETp [mm/a]
    #[arg(long, short = 'e')]
    pub evapotranspiration: Option<f64>,

    /// 저류 높이 Sp [mm]
    #[arg(long, conflicts_with = "covering")]
    pub storage_height: Option<f64>,

    /// 피복재 프리셋 (standard=0.3 mm, glass-metal=0.6 mm)
    #[arg(long, value_enum)]
    pub covering: Option<CoveringArg>,

    /// 출력 형식
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// 로그 레벨 (error/warn/info/debug/trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// 기본 설정 파일을 생성한다.
    InitConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CoveringArg {
    Standard,
    GlassMetal,
}

impl From<CoveringArg> for StorageCovering {
    fn from(value: CoveringArg) -> Self {
        match value {
            CoveringArg::Standard => StorageCovering::Standard,
            CoveringArg::GlassMetal => StorageCovering::GlassOrMetal,
        }
    }
}

impl Cli {
    /// 명령행 값이 있으면 설정 파일 값을 항목별로 덮어쓴다.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(v) = self.area {
            cfg.roof.area_m2 = v;
        }
        if let Some(v) = self.precipitation {
            cfg.roof.precipitation_mm = v;
        }
        if let Some(v) = self.evapotranspiration {
            cfg.roof.evapotranspiration_mm = v;
        }
        if let Some(v) = self.storage_height {
            cfg.roof.storage_height_mm = v;
        }
        if let Some(c) = self.covering {
            cfg.roof.storage_height_mm = StorageCovering::from(c).storage_height_mm();
        }
        if let Some(f) = self.format {
            cfg.output = f;
        }
        if let Some(ref l) = self.log_level {
            cfg.log_level = Some(l.clone());
        }
    }
}
