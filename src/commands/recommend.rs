//! `listrec recommend` command - rank every listing against the corpus
//!
//! - `listrec recommend --data listings.json` - all listings
//! - `--group Ballard` - only listings from one neighbourhood
//! - `--alt 9001 [--alt-data other.json]` - append one extra listing first

use tracing::debug;

use crate::cli::output::escape_quotes;
use crate::cli::{OutputFormat, RecommendArgs};
use crate::commands::dispatch::CommandContext;
use listrec_core::bail_usage;
use listrec_core::config::RecommenderConfig;
use listrec_core::dataset::ListingTable;
use listrec_core::error::Result;
use listrec_core::recommender::{ListingRecommender, RecommendOptions, RecommendationRun};

/// Execute the recommend command
pub fn execute(ctx: &CommandContext, args: &RecommendArgs) -> Result<()> {
    let mut config = apply_overrides(ctx.load_config()?, args)?;
    config.tokenizer_path = config.tokenizer_path.map(|path| ctx.resolve(&path));

    let table = ListingTable::load(&ctx.resolve(&args.data), &config.dataset)?;
    debug!(elapsed = ?ctx.start.elapsed(), listings = table.len(), "load_dataset");

    let (texts, labels) = table.corpus(args.group.as_deref());
    if let Some(group) = &args.group {
        if labels.is_empty() {
            bail_usage!(format!(
                "unknown group '{}' (available: {})",
                group,
                table.groups().join(", ")
            ));
        }
    }

    let lookup = match &args.alt_data {
        Some(path) => ListingTable::load(&ctx.resolve(path), &config.dataset)?,
        None => table,
    };

    let mut recommender = ListingRecommender::from_config(lookup, &config)?;
    let mut options = RecommendOptions::from_config(&config);
    if let Some(alt) = &args.alt {
        options = options.with_alternate(alt.as_str());
    }

    let run = recommender.run(&texts, &labels, &options)?;
    debug!(elapsed = ?ctx.start.elapsed(), "recommend");

    print_run(ctx, args, &run)
}

/// Fold command-line flags over the loaded configuration
fn apply_overrides(
    mut config: RecommenderConfig,
    args: &RecommendArgs,
) -> Result<RecommenderConfig> {
    if args.pos_tagged {
        config.pos_tagged = true;
    }
    if let Some(path) = &args.tokenizer {
        config.tokenizer_path = Some(path.clone());
    }
    if args.no_extra_stopwords {
        config.combine_stopwords = false;
    }
    if let Some(min) = args.ngram_min {
        config.ngram_min = min;
        if args.ngram_max.is_none() {
            config.ngram_max = config.ngram_max.max(min);
        }
    }
    if let Some(max) = args.ngram_max {
        config.ngram_max = max;
    }
    config.validate()?;
    Ok(config)
}

fn print_run(ctx: &CommandContext, args: &RecommendArgs, run: &RecommendationRun) -> Result<()> {
    let cli = ctx.cli;
    let recommendations = &run.recommendations;

    match cli.format {
        OutputFormat::Json => {
            let output = if args.scores {
                serde_json::to_value(recommendations.iter().collect::<Vec<_>>())?
            } else {
                serde_json::to_value(recommendations)?
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H listrec=1 records=1 mode=recommend listings={} terms={}",
                recommendations.len(),
                run.review_vectors.n_cols()
            );
            for entry in recommendations.iter() {
                for (rank, (neighbor, score)) in
                    entry.neighbors.iter().zip(&entry.scores).enumerate()
                {
                    println!(
                        "R \"{}\" rank={} neighbor=\"{}\" score={:.4}",
                        escape_quotes(&entry.label),
                        rank + 1,
                        escape_quotes(neighbor),
                        score
                    );
                }
            }
        }
        OutputFormat::Human => {
            for entry in recommendations.iter() {
                let neighbors = if args.scores {
                    entry
                        .neighbors
                        .iter()
                        .zip(&entry.scores)
                        .map(|(n, s)| format!("{} ({:.3})", n, s))
                        .collect::<Vec<_>>()
                } else {
                    entry.neighbors.clone()
                };
                println!("{}: {}", entry.label, neighbors.join(", "));
            }
            if !cli.quiet && cli.verbose {
                eprintln!(
                    "{} listings, {} terms",
                    recommendations.len(),
                    run.review_vectors.n_cols()
                );
            }
        }
    }

    Ok(())
}
