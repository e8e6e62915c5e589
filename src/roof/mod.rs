//! 지붕 면적의 연간 물수지(DWA-A102) 계산 모듈 모음.
//! 유출계수 상관식, 지붕 입력값, 급경사 지붕 물수지로 구성한다.

pub mod coefficients;
pub mod steep;
pub mod surface;

pub use coefficients::a_steep_roof;
pub use steep::{compute_steep_roof, PartitionResult};
pub use surface::{Roof, RoofError, StorageCovering};
