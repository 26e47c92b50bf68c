//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default configuration file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "listrec.toml";

/// Recommender configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Add the neighborhood stopword list to the English list (default true)
    #[serde(default = "default_combine_stopwords")]
    pub combine_stopwords: bool,

    /// Keep only nouns and adjectives instead of stripping digit tokens
    #[serde(default)]
    pub pos_tagged: bool,

    /// Lower n-gram bound (default 2)
    #[serde(default = "default_ngram")]
    pub ngram_min: usize,

    /// Upper n-gram bound (default 2)
    #[serde(default = "default_ngram")]
    pub ngram_max: usize,

    /// nlprule `en_tokenizer.bin` used when `pos_tagged` is on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenizer_path: Option<PathBuf>,

    /// Dataset field mapping
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Field names used when reading listing records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Identifier column (default "id")
    #[serde(default = "default_id_field")]
    pub id_field: String,

    /// Free-text column (default "remarks")
    #[serde(default = "default_text_field")]
    pub text_field: String,

    /// Grouping column used by `--group` (default "neighbourhood")
    #[serde(default = "default_group_field")]
    pub group_field: String,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            combine_stopwords: default_combine_stopwords(),
            pos_tagged: false,
            ngram_min: default_ngram(),
            ngram_max: default_ngram(),
            tokenizer_path: None,
            dataset: DatasetConfig::default(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            id_field: default_id_field(),
            text_field: default_text_field(),
            group_field: default_group_field(),
        }
    }
}

fn default_combine_stopwords() -> bool {
    true
}

fn default_ngram() -> usize {
    2
}

fn default_id_field() -> String {
    "id".to_string()
}

fn default_text_field() -> String {
    "remarks".to_string()
}

fn default_group_field() -> String {
    "neighbourhood".to_string()
}
