use anyhow::Result;
use clap::Parser;

mod cli;
mod pack;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.default_log_level()),
    )
    .init();
    pack::run_packing(&args)
}
