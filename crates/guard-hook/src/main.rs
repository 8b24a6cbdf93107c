use clap::Parser;
use guard_hook::{Cli, exit_code_for, logging};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("cfn-guard-hook: failed to initialise logging: {e}");
    }

    let code = match guard_hook::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}
