use super::coefficients::a_steep_roof;
use super::surface::Roof;

/// mm·m² → m³ 환산 계수
const MM_M2_PER_M3: f64 = 1000.0;

/// 강수량을 유출(a), 지하수 함양(g), 증발산(v)으로 나눈 결과.
///
/// 세 분배계수의 합은 항상 1이다. 값은 반올림하지 않은 전체 정밀도로 보관한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionResult {
    /// 유출계수 a [-]
    pub runoff_fraction: f64,
    /// 지하수 함양 비율 g [-]
    pub recharge_fraction: f64,
    /// 증발산 비율 v [-]
    pub evapotranspiration_fraction: f64,
    /// 유출고 RD [mm/a]
    pub specific_runoff_mm: f64,
    /// 지하수 함양고 GWN [mm/a]
    pub specific_recharge_mm: f64,
    /// 증발산고 ETp [mm/a]
    pub specific_evapotranspiration_mm: f64,
    /// 유입량 [m³/a]
    pub volumetric_inflow_m3: f64,
    /// 유출량 [m³/a]
    pub volumetric_runoff_m3: f64,
    /// 함양량 [m³/a]
    pub volumetric_recharge_m3: f64,
    /// 증발산량 [m³/a]
    pub volumetric_evapotranspiration_m3: f64,
}

impl PartitionResult {
    /// 분배계수 (a, g, v)를 튜플로 돌려준다.
    pub fn fractions(&self) -> (f64, f64, f64) {
        (
            self.runoff_fraction,
            self.recharge_fraction,
            self.evapotranspiration_fraction,
        )
    }
}

/// 급경사 지붕(B.3.1)의 물수지를 계산한다.
///
/// 급경사 지붕은 지하수 함양이 없으므로 g = 0, v = 1 − a − g 이다.
pub fn compute_steep_roof(roof: &Roof) -> PartitionResult {
    let pcp = roof.precipitation_mm();
    let area = roof.area_m2();

    let a = a_steep_roof(pcp, roof.evapotranspiration_mm(), roof.storage_height_mm());
    let g = 0.0;
    let v = 1.0 - a - g;

    let rd = pcp * a;
    let gwn = pcp * g;
    let etp = pcp * v;

    PartitionResult {
        runoff_fraction: a,
        recharge_fraction: g,
        evapotranspiration_fraction: v,
        specific_runoff_mm: rd,
        specific_recharge_mm: gwn,
        specific_evapotranspiration_mm: etp,
        volumetric_inflow_m3: area * pcp / MM_M2_PER_M3,
        volumetric_runoff_m3: area * rd / MM_M2_PER_M3,
        volumetric_recharge_m3: area * gwn / MM_M2_PER_M3,
        volumetric_evapotranspiration_m3: area * etp / MM_M2_PER_M3,
    }
}
