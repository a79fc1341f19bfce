use clap::Parser;
use unit_converter::app::{self, Cli};

/// 프로그램의 엔트리 포인트. 로그를 초기화한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    let level = if cli.debug { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = app::run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
