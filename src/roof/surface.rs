use crate::quantity::{valid_range, QuantityKind, RangeError};

/// 일반 급경사 지붕의 기본 저류 높이 [mm]
pub const DEFAULT_STORAGE_HEIGHT_MM: f64 = 0.3;
/// 유리·금속 피복 지붕의 저류 높이 [mm]
pub const GLASS_METAL_STORAGE_HEIGHT_MM: f64 = 0.6;

/// 지붕 피복재에 따른 저류 높이 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StorageCovering {
    /// 일반 피복재 (0.3 mm)
    #[default]
    Standard,
    /// 유리 또는 금속 (0.6 mm)
    GlassOrMetal,
    /// 직접 지정한 저류 높이 [mm]
    Custom(f64),
}

impl StorageCovering {
    pub fn storage_height_mm(self) -> f64 {
        match self {
            StorageCovering::Standard => DEFAULT_STORAGE_HEIGHT_MM,
            StorageCovering::GlassOrMetal => GLASS_METAL_STORAGE_HEIGHT_MM,
            StorageCovering::Custom(sp) => sp,
        }
    }
}

/// 지붕 생성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum RoofError {
    /// P, ETp, Sp 중 하나가 허용 범위를 벗어남
    Range(RangeError),
    /// 면적이 0 이하이거나 유한하지 않음
    InvalidArea(f64),
}

impl std::fmt::Display for RoofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoofError::Range(e) => write!(f, "범위 오류: {e}"),
            RoofError::InvalidArea(a) => write!(f, "면적은 0보다 커야 합니다: {a} m²"),
        }
    }
}

impl std::error::Error for RoofError {}

impl From<RangeError> for RoofError {
    fn from(value: RangeError) -> Self {
        RoofError::Range(value)
    }
}

/// 물수지 계산 대상 지붕. 생성 시 모든 물리량을 검사하므로
/// 존재하는 `Roof`는 항상 유효한 입력만 담는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roof {
    area_m2: f64,
    precipitation_mm: f64,
    evapotranspiration_mm: f64,
    storage_height_mm: f64,
}

impl Roof {
    /// 기본 저류 높이(0.3 mm)로 지붕을 만든다.
    pub fn new(
        area_m2: f64,
        precipitation_mm: f64,
        evapotranspiration_mm: f64,
    ) -> Result<Self, RoofError> {
        Self::with_storage_height(
            area_m2,
            precipitation_mm,
            evapotranspiration_mm,
            DEFAULT_STORAGE_HEIGHT_MM,
        )
    }

    /// 피복재 프리셋으로 저류 높이를 정해 지붕을 만든다.
    pub fn with_covering(
        area_m2: f64,
        precipitation_mm: f64,
        evapotranspiration_mm: f64,
        covering: StorageCovering,
    ) -> Result<Self, RoofError> {
        Self::with_storage_height(
            area_m2,
            precipitation_mm,
            evapotranspiration_mm,
            covering.storage_height_mm(),
        )
    }

    /// 저류 높이를 직접 지정해 지붕을 만든다. 하나라도 범위를 벗어나면 실패한다.
    pub fn with_storage_height(
        area_m2: f64,
        precipitation_mm: f64,
        evapotranspiration_mm: f64,
        storage_height_mm: f64,
    ) -> Result<Self, RoofError> {
        if !(area_m2.is_finite() && area_m2 > 0.0) {
            return Err(RoofError::InvalidArea(area_m2));
        }
        let precipitation_mm = valid_range(QuantityKind::Precipitation, precipitation_mm)?;
        let evapotranspiration_mm =
            valid_range(QuantityKind::Evapotranspiration, evapotranspiration_mm)?;
        let storage_height_mm = valid_range(QuantityKind::StorageHeight, storage_height_mm)?;
        Ok(Self {
            area_m2,
            precipitation_mm,
            evapotranspiration_mm,
            storage_height_mm,
        })
    }

    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    pub fn precipitation_mm(&self) -> f64 {
        self.precipitation_mm
    }

    pub fn evapotranspiration_mm(&self) -> f64 {
        self.evapotranspiration_mm
    }

    pub fn storage_height_mm(&self) -> f64 {
        self.storage_height_mm
    }
}

impl std::fmt::Display for Roof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Roof (area: {} m², P: {} mm/a, ETp: {} mm/a, Sp: {} mm)",
            self.area_m2, self.precipitation_mm, self.evapotranspiration_mm, self.storage_height_mm
        )
    }
}
