use clap::Parser;
use roof_water_balance::{app, cli::Cli};

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 물수지 보고서를 출력한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = app::run(&cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
