//! 물수지 결과를 이름/단위/값 행으로 정리한 표와 출력 형식.

use serde::{Deserialize, Serialize};

use crate::roof::{compute_steep_roof, PartitionResult, Roof};

/// 표시용 소수 자릿수
pub const DISPLAY_DECIMALS: i32 = 3;

/// 보고서 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 정렬된 텍스트 표
    #[default]
    Table,
    Csv,
    Toml,
}

/// 보고서의 한 행.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRecord {
    pub name: &'static str,
    pub unit: &'static str,
    pub value: f64,
}

/// 순서가 고정된 13개 행의 물수지 보고서.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub records: Vec<ReportRecord>,
}

/// 소수 셋째 자리로 반올림한다. 정확히 절반인 값은 짝수 쪽으로 보낸다.
pub fn round_display(value: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    (value * scale).round_ties_even() / scale
}

/// 급경사 지붕 물수지를 계산해 보고서로 만든다.
pub fn steep_roof_report(roof: &Roof) -> Report {
    Report::from_partition(roof, &compute_steep_roof(roof))
}

impl Report {
    /// 지붕 입력값과 분배 결과로 보고서를 구성한다. 값은 표시용으로만 반올림된다.
    pub fn from_partition(roof: &Roof, res: &PartitionResult) -> Self {
        let rows: [(&'static str, &'static str, f64); 13] = [
            ("Area", "m2", roof.area_m2()),
            ("P", "mm/a", roof.precipitation_mm()),
            ("ETp", "mm/a", roof.evapotranspiration_mm()),
            ("a", "-", res.runoff_fraction),
            ("g", "-", res.recharge_fraction),
            ("v", "-", res.evapotranspiration_fraction),
            ("RD", "mm/a", res.specific_runoff_mm),
            ("GWN", "mm/a", res.specific_recharge_mm),
            ("ETp", "mm/a", res.specific_evapotranspiration_mm),
            ("Inflow", "m3/a", res.volumetric_inflow_m3),
            ("RD flow", "m3/a", res.volumetric_runoff_m3),
            ("GWN flow", "m3/a", res.volumetric_recharge_m3),
            ("ETP flow", "m3/a", res.volumetric_evapotranspiration_m3),
        ];
        let records = rows
            .into_iter()
            .map(|(name, unit, value)| ReportRecord {
                name,
                unit,
                value: round_display(value),
            })
            .collect();
        Self { records }
    }

    /// 이름이 같은 첫 번째 행을 찾는다. "ETp"는 입력값 행이 먼저 나온다.
    pub fn get(&self, name: &str) -> Option<&ReportRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `Name,Unit,Value` 헤더를 가진 CSV 문자열.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("Name,Unit,Value\n");
        for r in &self.records {
            out.push_str(&format!("{},{},{}\n", r.name, r.unit, r.value));
        }
        out
    }

    /// `[[records]]` 배열 형태의 TOML 문자열.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// 지정한 형식으로 출력 문자열을 만든다.
    pub fn render(&self, format: OutputFormat) -> Result<String, toml::ser::Error> {
        match format {
            OutputFormat::Table => Ok(self.to_string()),
            OutputFormat::Csv => Ok(self.to_csv()),
            OutputFormat::Toml => self.to_toml(),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name_w = self
            .records
            .iter()
            .map(|r| r.name.len())
            .max()
            .unwrap_or(0)
            .max("Name".len());
        let unit_w = self
            .records
            .iter()
            .map(|r| r.unit.len())
            .max()
            .unwrap_or(0)
            .max("Unit".len());
        writeln!(f, "{:<name_w$}  {:<unit_w$}  {:>12}", "Name", "Unit", "Value")?;
        for r in &self.records {
            writeln!(
                f,
                "{:<name_w$}  {:<unit_w$}  {:>12.3}",
                r.name, r.unit, r.value
            )?;
        }
        Ok(())
    }
}
