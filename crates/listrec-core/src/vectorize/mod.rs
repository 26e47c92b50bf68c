//! Stemmed n-gram TF-IDF vectorization
//!
//! The analyzer is built by composition: a base analyzer lowercases the
//! document, extracts tokens of two or more word characters and drops
//! stopwords; [`with_stemming`] wraps it so every surviving token is reduced
//! to its Snowball English stem; n-grams are then assembled from the stems.
//!
//! Weights follow the usual smoothed TF-IDF scheme: raw term counts times
//! `ln((1 + n_docs) / (1 + df)) + 1`, each row scaled to unit length.

mod matrix;

use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::error::{ListrecError, Result};
use crate::stopwords::StopwordSet;

pub use matrix::TermMatrix;

/// Tokens are runs of at least two word characters
pub const TOKEN_PATTERN: &str = r"\b\w\w+\b";

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

/// Snowball (Porter2) stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn token_re() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("valid token pattern"))
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Reduce a single token to its stem
pub fn stem(token: &str) -> String {
    get_stemmer().stem(token).into_owned()
}

/// Wrap a token analyzer so that every token it yields is stemmed
pub fn with_stemming<F>(analyzer: F) -> impl Fn(&str) -> Vec<String>
where
    F: Fn(&str) -> Vec<String>,
{
    move |doc| analyzer(doc).iter().map(|token| stem(token)).collect()
}

/// Assemble space-joined n-grams for every n in `min_n..=max_n`.
///
/// Shorter grams come first, each length in text order.
pub fn word_ngrams(tokens: &[String], (min_n, max_n): (usize, usize)) -> Vec<String> {
    let mut grams = Vec::new();
    let max_n = max_n.min(tokens.len());
    for n in min_n.max(1)..=max_n {
        grams.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    grams
}

/// TF-IDF vectorizer whose analyzer stems tokens before building n-grams
#[derive(Debug, Clone)]
pub struct StemmedTfidfVectorizer<'a> {
    stopwords: &'a StopwordSet,
    ngram_range: (usize, usize),
    vocabulary: HashMap<String, usize>,
}

impl<'a> StemmedTfidfVectorizer<'a> {
    /// Create a vectorizer producing bigrams by default
    pub fn new(stopwords: &'a StopwordSet) -> Self {
        Self {
            stopwords,
            ngram_range: (2, 2),
            vocabulary: HashMap::new(),
        }
    }

    /// Set the inclusive n-gram range
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n, max_n);
        self
    }

    /// Number of terms learned by the last `fit_transform`
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Lowercase, tokenize and drop stopwords
    fn base_analyzer(&self) -> impl Fn(&str) -> Vec<String> + '_ {
        move |doc| {
            let lower = doc.to_lowercase();
            token_re()
                .find_iter(&lower)
                .map(|m| m.as_str())
                .filter(|token| !self.stopwords.contains(token))
                .map(str::to_string)
                .collect()
        }
    }

    /// The full document analyzer: base tokens, stemmed, then n-grams
    pub fn build_analyzer(&self) -> impl Fn(&str) -> Vec<String> + '_ {
        let stemmed = with_stemming(self.base_analyzer());
        let range = self.ngram_range;
        move |doc| word_ngrams(&stemmed(doc), range)
    }

    /// Learn the vocabulary from `documents` and return their TF-IDF matrix.
    ///
    /// Rows follow document order; columns follow sorted term order. Fails
    /// with [`ListrecError::EmptyVocabulary`] when no document yields a term.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<TermMatrix> {
        let analyzed: Vec<Vec<String>> = {
            let analyzer = self.build_analyzer();
            documents.iter().map(|d| analyzer(d.as_ref())).collect()
        };

        let terms: BTreeSet<&str> = analyzed.iter().flatten().map(String::as_str).collect();
        if terms.is_empty() {
            return Err(ListrecError::EmptyVocabulary);
        }
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(j, term)| (term.to_string(), j))
            .collect();

        let n_docs = analyzed.len();
        let n_terms = vocabulary.len();
        let mut matrix = TermMatrix::zeros(n_docs, n_terms);
        let mut doc_freq = vec![0usize; n_terms];

        for (i, grams) in analyzed.iter().enumerate() {
            let row = matrix.row_mut(i);
            for gram in grams {
                if let Some(&j) = vocabulary.get(gram) {
                    if row[j] == 0.0 {
                        doc_freq[j] += 1;
                    }
                    row[j] += 1.0;
                }
            }
        }

        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        for i in 0..n_docs {
            for (w, weight) in matrix.row_mut(i).iter_mut().zip(&idf) {
                *w *= weight;
            }
        }
        matrix.normalize_rows();

        tracing::debug!(
            documents = n_docs,
            terms = n_terms,
            ngram_min = self.ngram_range.0,
            ngram_max = self.ngram_range.1,
            "fit_transform"
        );

        self.vocabulary = vocabulary;
        Ok(matrix)
    }
}
