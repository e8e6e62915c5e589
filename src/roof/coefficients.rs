/// B.3.1 상수항
const A0: f64 = 0.9115;
/// 강수량 계수 [a/mm]
const A_P: f64 = 0.000_070_63;
/// 잠재 증발산량 계수 [a/mm]
const A_ETP: f64 = 0.000_333;
/// 저류 높이 계수 [1/mm]
const A_SP: f64 = 0.1155;

/// 급경사 지붕(모든 피복재) 및 금속·유리 평지붕의 장기 유출계수 a를 계산한다.
///
/// DWA-A102 B.3.1: a = 0.9115 + 0.00007063·P − 0.000333·ETp − 0.1155·Sp
///
/// - `precipitation_mm`: 연 강수량 P [mm/a]
/// - `evapotranspiration_mm`: 연 잠재 증발산량 ETp [mm/a]
/// - `storage_height_mm`: 저류 높이 Sp [mm]
///
/// 입력 범위 검사는 호출 측(`Roof` 생성 시점)에서 끝난 것으로 본다.
/// 허용 범위 안에서 결과는 약 0.64~0.87이며 별도로 클램프하지 않는다.
pub fn a_steep_roof(
    precipitation_mm: f64,
    evapotranspiration_mm: f64,
    storage_height_mm: f64,
) -> f64 {
    let a = A0 + A_P * precipitation_mm
        - A_ETP * evapotranspiration_mm
        - A_SP * storage_height_mm;
    log::debug!(
        "B.3.1: P={precipitation_mm} ETp={evapotranspiration_mm} Sp={storage_height_mm} -> a={a:.6}"
    );
    a
}
