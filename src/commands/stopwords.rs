//! `listrec stopwords` command - print the effective stopword set

use crate::cli::{OutputFormat, StopwordsArgs};
use crate::commands::dispatch::CommandContext;
use listrec_core::error::Result;
use listrec_core::stopwords::StopwordSet;

/// Execute the stopwords command
pub fn execute(ctx: &CommandContext, args: &StopwordsArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let combine_extra = config.combine_stopwords && !args.no_extra;
    let stopwords = StopwordSet::new(combine_extra);
    let words = stopwords.sorted();

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "combined": combine_extra,
                "count": words.len(),
                "words": words,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H listrec=1 records=1 mode=stopwords combined={} count={}",
                combine_extra,
                words.len()
            );
            for word in &words {
                println!("R {}", word);
            }
        }
        OutputFormat::Human => {
            for word in &words {
                println!("{}", word);
            }
            if !ctx.cli.quiet && ctx.cli.verbose {
                eprintln!("{} stopwords", words.len());
            }
        }
    }

    Ok(())
}
