//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::consts::{DEFAULT_HELPER, DEFAULT_STRIP_PREFIX, DEFAULT_STRIP_SUFFIX};

#[derive(Parser)]
#[command(name = "uci-testgen")]
#[command(about = "Generate roundtrip test stubs for UCI log fixtures", version)]
pub(crate) struct Cli {
    /// Log files to generate stubs for (defaults to the bundled fixture list)
    #[arg(value_name = "PATH")]
    pub(crate) paths: Vec<String>,

    /// Helper function each generated test calls
    #[arg(long, value_name = "NAME")]
    pub(crate) helper: Option<String>,

    /// Path prefix removed when deriving test names
    #[arg(long, value_name = "PREFIX")]
    pub(crate) strip_prefix: Option<String>,

    /// Path suffix removed when deriving test names
    #[arg(long, value_name = "SUFFIX")]
    pub(crate) strip_suffix: Option<String>,

    /// Write generated source to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub(crate) output: Option<PathBuf>,

    /// Output stub metadata as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Enable debug output (show derivation details)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.helper.is_none() {
            self.helper = config.helper.clone();
        }
        if self.strip_prefix.is_none() {
            self.strip_prefix = config.strip_prefix.clone();
        }
        if self.strip_suffix.is_none() {
            self.strip_suffix = config.strip_suffix.clone();
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        self
    }

    pub(crate) fn helper_name(&self) -> &str {
        self.helper.as_deref().unwrap_or(DEFAULT_HELPER)
    }

    pub(crate) fn prefix(&self) -> &str {
        self.strip_prefix.as_deref().unwrap_or(DEFAULT_STRIP_PREFIX)
    }

    pub(crate) fn suffix(&self) -> &str {
        self.strip_suffix.as_deref().unwrap_or(DEFAULT_STRIP_SUFFIX)
    }
}
