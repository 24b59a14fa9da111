use clap::Parser;
use markdown_delink_cli::{Cli, run};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG still wins over -v
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    log::debug!("markdown-delink starting up");

    match run(&cli, &mut io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(summary) => {
            log::debug!(
                "processed {} input(s), {} changed",
                summary.inputs,
                summary.changed
            );
            if cli.check && summary.changed > 0 {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("markdown-delink: {e:#}");
            ExitCode::from(2)
        }
    }
}
