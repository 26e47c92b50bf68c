//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use listrec_core::config::RecommenderConfig;
use listrec_core::error::Result;

/// Load the configuration named by `--config`, or discover one under `root`
pub fn load_config(cli: &Cli, root: &PathBuf) -> Result<RecommenderConfig> {
    match &cli.config {
        Some(path) => {
            let resolved = if path.is_absolute() {
                path.clone()
            } else {
                root.join(path)
            };
            RecommenderConfig::load(&resolved)
        }
        None => RecommenderConfig::discover(root),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn load_config(&self) -> Result<RecommenderConfig> {
        load_config(self.cli, self.root)
    }

    /// Resolve a user-supplied path against the working directory
    pub fn resolve(&self, path: &PathBuf) -> PathBuf {
        if path.is_absolute() {
            path.clone()
        } else {
            self.root.join(path)
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("listrec {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Similar-listing recommendations from free-text remarks.");
        println!();
        println!("Run `listrec --help` for usage information.");
        Ok(())
    }
}
