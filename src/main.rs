use clap::Parser;
use imo_cii_calculator::app::{self, AppError, Cli};
use imo_cii_calculator::config;
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    init_tracing(&cfg.log_level);
    let stdout = std::io::stdout();
    app::run(cli, &cfg, &mut stdout.lock())?;
    Ok(())
}

/// `RUST_LOG`가 있으면 그것을, 없으면 설정의 로그 레벨을 쓴다. 로그는 stderr로 보낸다.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
