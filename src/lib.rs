//! DWA-A102 지붕 물수지 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 쓸 수 있게 한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod quantity;
pub mod report;
pub mod roof;
