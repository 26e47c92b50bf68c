//! `listrec clean` command - show remarks the way the vectorizer sees them

use serde::Serialize;

use crate::cli::output::escape_quotes;
use crate::cli::{CleanArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use listrec_core::dataset::ListingTable;
use listrec_core::error::Result;
use listrec_core::text::{NlpruleTagger, TextCleaner};

#[derive(Debug, Serialize)]
struct CleanedText {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    text: String,
    cleaned: String,
}

/// Execute the clean command
pub fn execute(ctx: &CommandContext, args: &CleanArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let pos_tagged = args.pos_tagged || config.pos_tagged;

    let (ids, texts): (Vec<Option<String>>, Vec<String>) = match &args.data {
        Some(path) => {
            let table = ListingTable::load(&ctx.resolve(path), &config.dataset)?;
            table
                .iter()
                .map(|l| (Some(l.id.clone()), l.text.clone()))
                .unzip()
        }
        None => (vec![None; args.texts.len()], args.texts.clone()),
    };

    let tokenizer = args.tokenizer.as_ref().or(config.tokenizer_path.as_ref());
    let tagger = match tokenizer {
        Some(path) if pos_tagged => Some(NlpruleTagger::load(&ctx.resolve(path))?),
        _ => None,
    };
    let cleaner = match &tagger {
        Some(tagger) => TextCleaner::new().with_tagger(tagger),
        None => TextCleaner::new(),
    };
    let cleaned = cleaner.clean_all(&texts, pos_tagged)?;

    let rows: Vec<CleanedText> = ids
        .into_iter()
        .zip(texts)
        .zip(cleaned)
        .map(|((id, text), cleaned)| CleanedText { id, text, cleaned })
        .collect();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Records => {
            println!(
                "H listrec=1 records=1 mode=clean texts={} pos_tagged={}",
                rows.len(),
                pos_tagged
            );
            for row in &rows {
                match &row.id {
                    Some(id) => println!(
                        "R \"{}\" \"{}\"",
                        escape_quotes(id),
                        escape_quotes(&row.cleaned)
                    ),
                    None => println!("R \"{}\"", escape_quotes(&row.cleaned)),
                }
            }
        }
        OutputFormat::Human => {
            for row in &rows {
                match &row.id {
                    Some(id) => println!("{}: {}", id, row.cleaned),
                    None => println!("{}", row.cleaned),
                }
            }
        }
    }

    Ok(())
}
