//! Listrec Core Library
//!
//! Text normalization, stemmed TF-IDF vectorization and top-three cosine
//! ranking for free-text listing remarks.

pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod recommender;
pub mod similarity;
pub mod stopwords;
pub mod text;
pub mod vectorize;

pub use recommender::{ListingRecommender, RecommendOptions, Recommendations};
