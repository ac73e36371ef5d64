use std::path::{Path, PathBuf};

use crate::ident::IdNaming;
use crate::output::with_suffix;

pub const DEFAULT_OUTPUT: &str = "sprite";

/// Settings for one packing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base name of the files to write; `.png` (and `.json`) is appended.
    pub output: PathBuf,
    /// Prepended to every identifier.
    pub prefix: String,
    /// Number of leading path segments dropped from identifiers.
    pub skip: usize,
    /// Also write the mapping next to the sheet as `<output>.json`.
    pub write_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            prefix: String::new(),
            skip: 0,
            write_json: false,
        }
    }
}

impl Config {
    pub fn naming(&self) -> IdNaming {
        IdNaming::new(self.prefix.clone(), self.skip)
    }

    pub fn png_path(&self) -> PathBuf {
        with_suffix(&self.output, "png")
    }

    pub fn json_path(&self) -> Option<PathBuf> {
        self.write_json.then(|| with_suffix(&self.output, "json"))
    }

    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }
}
