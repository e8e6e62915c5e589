use log::LevelFilter;
use std::io::Write;

/// 로그 레벨 문자열을 해석한다. 인자 → RUST_LOG → info 순으로 결정한다.
pub fn resolve_level(level: Option<&str>) -> LevelFilter {
    level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(LevelFilter::Info)
}

/// 레벨 문자열이 주어졌지만 해석할 수 없으면 그 문자열을 돌려준다.
pub fn rejected_level(level: Option<&str>) -> Option<&str> {
    level.filter(|l| l.parse::<LevelFilter>().is_err())
}

/// env_logger를 초기화한다. 이미 초기화된 경우에는 무시한다.
pub fn init_logging(level: Option<&str>) {
    let log_level = resolve_level(level);
    let res = env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .try_init();
    if res.is_ok() {
        log::debug!("로거 초기화 (level: {log_level})");
    }
    if let Some(bad) = rejected_level(level) {
        log::warn!("알 수 없는 로그 레벨 {bad:?}, {log_level} 사용");
    }
}
