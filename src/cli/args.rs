use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Listing file (JSON array, or JSON Lines with a .jsonl/.ndjson extension)
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Only rank listings from this neighbourhood group
    #[arg(long)]
    pub group: Option<String>,

    /// Id of an extra listing to append to the corpus before ranking
    #[arg(long, value_name = "ID")]
    pub alt: Option<String>,

    /// Look the alternate listing up in this file instead of --data
    #[arg(long, value_name = "FILE", requires = "alt")]
    pub alt_data: Option<PathBuf>,

    /// Keep only nouns and adjectives instead of dropping digit tokens
    #[arg(long)]
    pub pos_tagged: bool,

    /// nlprule tokenizer binary used by --pos-tagged (overrides tokenizer_path)
    #[arg(long, value_name = "FILE")]
    pub tokenizer: Option<PathBuf>,

    /// N-gram size
    #[arg(long, value_name = "N")]
    pub ngram_min: Option<usize>,

    /// Upper n-gram bound (recorded, ranking uses --ngram-min for both bounds)
    #[arg(long, value_name = "N")]
    pub ngram_max: Option<usize>,

    /// Use only the English stopword list
    #[arg(long)]
    pub no_extra_stopwords: bool,

    /// Include similarity scores in the output
    #[arg(long)]
    pub scores: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    /// Remarks to clean
    #[arg(required_unless_present = "data")]
    pub texts: Vec<String>,

    /// Clean every listing in this file instead
    #[arg(long, value_name = "FILE", conflicts_with = "texts")]
    pub data: Option<PathBuf>,

    /// Keep only nouns and adjectives instead of dropping digit tokens
    #[arg(long)]
    pub pos_tagged: bool,

    /// nlprule tokenizer binary used by --pos-tagged (overrides tokenizer_path)
    #[arg(long, value_name = "FILE")]
    pub tokenizer: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct StopwordsArgs {
    /// Leave out the neighbourhood stopwords
    #[arg(long)]
    pub no_extra: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Write the effective configuration to ./listrec.toml
    #[arg(long)]
    pub write: bool,
}
