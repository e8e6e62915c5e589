/// 검증 대상 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    /// 연 강수량 P [mm/a]
    Precipitation,
    /// 연 잠재 증발산량 ETp [mm/a]
    Evapotranspiration,
    /// 지붕 저류 높이 Sp [mm]
    StorageHeight,
}

impl QuantityKind {
    /// 물리량별 허용 구간(닫힌 구간). DWA-A102 B.3.1 식의 적용 범위를 따른다.
    pub const fn bounds(self) -> (f64, f64) {
        match self {
            QuantityKind::Precipitation => (500.0, 1700.0),
            QuantityKind::Evapotranspiration => (450.0, 700.0),
            QuantityKind::StorageHeight => (0.1, 0.6),
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            QuantityKind::Precipitation => "P",
            QuantityKind::Evapotranspiration => "ETp",
            QuantityKind::StorageHeight => "Sp",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            QuantityKind::Precipitation | QuantityKind::Evapotranspiration => "mm/a",
            QuantityKind::StorageHeight => "mm",
        }
    }
}

/// 입력값이 허용 구간을 벗어났을 때의 오류.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeError {
    pub kind: QuantityKind,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} = {} {}는 허용 범위 [{}, {}] {}를 벗어났습니다.",
            self.kind.symbol(),
            self.value,
            self.kind.unit(),
            self.min,
            self.max,
            self.kind.unit()
        )
    }
}

impl std::error::Error for RangeError {}

/// 값이 허용 구간 안에 있으면 그대로 돌려주고, 아니면 `RangeError`를 반환한다.
///
/// NaN이나 무한대는 어떤 구간에도 속하지 않는다.
pub fn valid_range(kind: QuantityKind, value: f64) -> Result<f64, RangeError> {
    let (min, max) = kind.bounds();
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(RangeError {
            kind,
            value,
            min,
            max,
        })
    }
}
