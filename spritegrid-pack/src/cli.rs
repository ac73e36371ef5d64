use std::path::PathBuf;

use clap::{Parser, builder::ValueHint};
use spritegrid::{Config, DEFAULT_OUTPUT};

/// Command-line arguments for spritegrid-pack.
#[derive(Parser, Debug)]
#[command(
    name = "spritegrid-pack",
    about = "Pack images into a PNG sprite sheet and print a JSON table of their positions.",
    author,
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Images to pack (PNG, JPEG, GIF); unreadable files are skipped
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath, required = true)]
    pub inputs: Vec<PathBuf>,

    /// Base name of the .png (and .json) files to write
    #[arg(
        long,
        short = 'o',
        value_hint = ValueHint::FilePath,
        value_name = "BASE",
        default_value = DEFAULT_OUTPUT
    )]
    pub out: PathBuf,

    /// Prefix every table entry name with this
    #[arg(long = "pfx", alias = "prefix", value_name = "PREFIX", default_value = "")]
    pub prefix: String,

    /// Number of leading directory components to drop from table entry names
    #[arg(long = "skip", short = 's', value_name = "N", default_value_t = 0)]
    pub skip: usize,

    /// Also write the table to <BASE>.json
    #[arg(long = "json")]
    pub write_json: bool,

    /// Only log warnings and errors (RUST_LOG overrides)
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl Cli {
    pub fn to_config(&self) -> Config {
        Config {
            output: self.out.clone(),
            prefix: self.prefix.clone(),
            skip: self.skip,
            write_json: self.write_json,
        }
    }

    pub fn default_log_level(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }
}
