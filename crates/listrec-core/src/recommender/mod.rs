//! Listing recommender: normalize, vectorize and rank a corpus of remarks
//!
//! A [`ListingRecommender`] owns the listing table used for alternate lookups,
//! the stopword set (fixed at construction) and the POS tagger. Each call to
//! [`ListingRecommender::top_three`] rebuilds the term matrix from scratch and
//! keeps it on the instance until the next call. Calls take `&mut self`, so a
//! shared instance has to be wrapped in a lock by whoever shares it.

use std::collections::HashSet;
use std::time::Instant;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::RecommenderConfig;
use crate::dataset::ListingTable;
use crate::error::{ListrecError, Result};
use crate::similarity::SimilarityRanker;
use crate::stopwords::StopwordSet;
use crate::text::{NlpruleTagger, PosTagger, TextCleaner};
use crate::trace_time;
use crate::vectorize::{StemmedTfidfVectorizer, TermMatrix};

/// Per-call options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendOptions {
    /// Keep nouns and adjectives instead of dropping digit tokens
    pub pos_tagged: bool,
    /// Lower n-gram bound; also used as the upper bound, see [`Self::ngram_range`]
    pub ngram_min: usize,
    /// Accepted for compatibility, not used by the ranking call
    pub ngram_max: usize,
    /// Id of a listing in the table to append to the corpus
    pub alternate: Option<String>,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            pos_tagged: false,
            ngram_min: 2,
            ngram_max: 2,
            alternate: None,
        }
    }
}

impl RecommendOptions {
    pub fn from_config(config: &RecommenderConfig) -> Self {
        Self {
            pos_tagged: config.pos_tagged,
            ngram_min: config.ngram_min,
            ngram_max: config.ngram_max,
            alternate: None,
        }
    }

    pub fn with_alternate(mut self, id: impl Into<String>) -> Self {
        self.alternate = Some(id.into());
        self
    }

    /// The n-gram range actually vectorized.
    ///
    /// Both bounds come from `ngram_min`; only symmetric ranges are reachable
    /// through a ranking call.
    pub fn ngram_range(&self) -> (usize, usize) {
        (self.ngram_min, self.ngram_min)
    }
}

/// Ranked neighbors of one corpus item
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Recommendation {
    pub label: String,
    /// Most similar first
    pub neighbors: Vec<String>,
    /// Cosine similarity for each neighbor
    pub scores: Vec<f64>,
}

/// Label to neighbor-labels mapping, in corpus order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendations {
    entries: Vec<Recommendation>,
}

impl Recommendations {
    /// Neighbor labels for `label`
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entry(label).map(|e| e.neighbors.as_slice())
    }

    pub fn entry(&self, label: &str) -> Option<&Recommendation> {
        self.entries.iter().find(|e| e.label == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recommendation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }
}

impl Serialize for Recommendations {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.label, &entry.neighbors)?;
        }
        map.end()
    }
}

/// Everything produced by one ranking call
#[derive(Debug, Clone)]
pub struct RecommendationRun {
    pub recommendations: Recommendations,
    /// Term matrix rows in corpus order (alternate last, if any)
    pub review_vectors: TermMatrix,
    /// Cleaned remarks in corpus order
    pub cleaned: Vec<String>,
}

/// Finds the three most similar listings for every listing in a corpus
pub struct ListingRecommender {
    table: ListingTable,
    stopwords: StopwordSet,
    tagger: Option<Box<dyn PosTagger>>,
    ranker: SimilarityRanker,
    review_vectors: Option<TermMatrix>,
}

impl ListingRecommender {
    /// Create a recommender over `table`.
    ///
    /// `combine_stopwords` adds the neighborhood list to the English list.
    /// There is no tagger until one is set with [`Self::with_tagger`].
    pub fn new(table: ListingTable, combine_stopwords: bool) -> Self {
        Self {
            table,
            stopwords: StopwordSet::new(combine_stopwords),
            tagger: None,
            ranker: SimilarityRanker::default(),
            review_vectors: None,
        }
    }

    /// Build from configuration. The nlprule tagger is loaded only when
    /// `pos_tagged` is on and `tokenizer_path` is set.
    pub fn from_config(table: ListingTable, config: &RecommenderConfig) -> Result<Self> {
        let recommender = Self::new(table, config.combine_stopwords);
        match &config.tokenizer_path {
            Some(path) if config.pos_tagged => {
                Ok(recommender.with_tagger(Box::new(NlpruleTagger::load(path)?)))
            }
            _ => Ok(recommender),
        }
    }

    /// Set the part-of-speech tagger used by `pos_tagged` calls
    pub fn with_tagger(mut self, tagger: Box<dyn PosTagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    /// Term matrix computed by the most recent successful call
    pub fn last_review_vectors(&self) -> Option<&TermMatrix> {
        self.review_vectors.as_ref()
    }

    /// Clean remarks the same way a ranking call does
    pub fn clean<S: AsRef<str>>(&self, texts: &[S], pos_tagged: bool) -> Result<Vec<String>> {
        let cleaner = match &self.tagger {
            Some(tagger) => TextCleaner::new().with_tagger(tagger.as_ref()),
            None => TextCleaner::new(),
        };
        cleaner.clean_all(texts, pos_tagged)
    }

    /// Map every label to its three most similar other labels
    pub fn top_three<T, L>(
        &mut self,
        text_list: &[T],
        label_list: &[L],
        options: &RecommendOptions,
    ) -> Result<Recommendations>
    where
        T: AsRef<str>,
        L: AsRef<str>,
    {
        Ok(self.run(text_list, label_list, options)?.recommendations)
    }

    /// Like [`Self::top_three`] but also returns the matrix and cleaned text
    pub fn run<T, L>(
        &mut self,
        text_list: &[T],
        label_list: &[L],
        options: &RecommendOptions,
    ) -> Result<RecommendationRun>
    where
        T: AsRef<str>,
        L: AsRef<str>,
    {
        let start = Instant::now();

        if text_list.len() != label_list.len() {
            return Err(ListrecError::LengthMismatch {
                texts: text_list.len(),
                labels: label_list.len(),
            });
        }
        if options.ngram_min == 0 {
            return Err(ListrecError::invalid_value("ngram_min", options.ngram_min));
        }

        let mut texts: Vec<String> = text_list.iter().map(|t| t.as_ref().to_string()).collect();
        let mut labels: Vec<String> = label_list.iter().map(|l| l.as_ref().to_string()).collect();
        check_unique(&labels)?;

        if let Some(alt_id) = &options.alternate {
            let alt_text = self.table.lookup_text(alt_id)?.to_string();
            if labels.iter().any(|l| l == alt_id) {
                return Err(ListrecError::DuplicateLabel {
                    label: alt_id.clone(),
                });
            }
            texts.push(alt_text);
            labels.push(alt_id.clone());
        }

        if options.ngram_max != options.ngram_min {
            tracing::debug!(
                ngram_min = options.ngram_min,
                ngram_max = options.ngram_max,
                "ngram_max_ignored"
            );
        }
        tracing::debug!(
            documents = texts.len(),
            alternate = options.alternate.as_deref().unwrap_or("-"),
            pos_tagged = options.pos_tagged,
            "top_three"
        );

        let cleaned = self.clean(&texts, options.pos_tagged)?;
        trace_time!(start, "clean");

        let (min_n, max_n) = options.ngram_range();
        let mut vectorizer =
            StemmedTfidfVectorizer::new(&self.stopwords).with_ngram_range(min_n, max_n);
        let matrix = vectorizer.fit_transform(&cleaned)?;
        trace_time!(start, "vectorize", terms = vectorizer.vocabulary_size());
        let empty_rows = (0..matrix.n_rows())
            .filter(|&i| matrix.is_zero_row(i))
            .count();
        if empty_rows > 0 {
            tracing::debug!(empty_rows, "documents_without_terms");
        }

        let entries = self
            .ranker
            .rank_all(&matrix)
            .into_iter()
            .zip(&labels)
            .map(|(neighbors, label)| Recommendation {
                label: label.clone(),
                neighbors: neighbors.iter().map(|n| labels[n.index].clone()).collect(),
                scores: neighbors.iter().map(|n| n.score).collect(),
            })
            .collect();
        trace_time!(start, "rank");

        self.review_vectors = Some(matrix.clone());

        Ok(RecommendationRun {
            recommendations: Recommendations { entries },
            review_vectors: matrix,
            cleaned,
        })
    }
}

fn check_unique(labels: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(ListrecError::DuplicateLabel {
                label: label.clone(),
            });
        }
    }
    Ok(())
}
