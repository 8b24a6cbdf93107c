use clap::Parser;

/// Run a pinned cfn-guard over the files pre-commit passes in.
#[derive(Clone, Debug, Parser)]
#[command(name = "cfn-guard-hook", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Files staged for commit.
    pub filenames: Vec<String>,

    /// cfn-guard operation: `validate` or `test`. Only the first value is used.
    #[arg(long, required = true, value_name = "OPERATION")]
    pub operation: Vec<String>,

    /// Rules file or directory for `validate`. Only the first value is used.
    #[arg(long, value_name = "PATH")]
    pub rules: Vec<String>,

    /// Test directory for `test`. Only the first value is used.
    #[arg(long, value_name = "PATH")]
    pub dir: Vec<String>,

    /// Log install and invocation details.
    #[arg(short, long)]
    pub verbose: bool,
}
