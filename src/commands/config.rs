//! `listrec config` command - print (or write) the effective configuration

use crate::cli::{ConfigArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use listrec_core::config::CONFIG_FILE_NAME;
use listrec_core::error::Result;

/// Execute the config command
pub fn execute(ctx: &CommandContext, args: &ConfigArgs) -> Result<()> {
    let config = ctx.load_config()?;

    if args.write {
        let path = ctx.root.join(CONFIG_FILE_NAME);
        config.save(&path)?;
        tracing::debug!(path = %path.display(), "save_config");
    }

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Records => {
            println!("H listrec=1 records=1 mode=config");
            println!("R combine_stopwords={}", config.combine_stopwords);
            println!("R pos_tagged={}", config.pos_tagged);
            println!("R ngram_min={}", config.ngram_min);
            println!("R ngram_max={}", config.ngram_max);
            println!("R dataset.id_field=\"{}\"", config.dataset.id_field);
            println!("R dataset.text_field=\"{}\"", config.dataset.text_field);
            println!("R dataset.group_field=\"{}\"", config.dataset.group_field);
        }
        OutputFormat::Human => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
