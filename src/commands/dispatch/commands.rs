//! Command implementations for all listrec commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{clean, config, recommend, stopwords};
use listrec_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Recommend(args) => recommend::execute(ctx, args),
            Commands::Clean(args) => clean::execute(ctx, args),
            Commands::Stopwords(args) => stopwords::execute(ctx, args),
            Commands::Config(args) => config::execute(ctx, args),
        }
    }
}
