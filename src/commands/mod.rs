//! Command implementations for listrec

pub mod clean;
pub mod config;
pub mod dispatch;
pub mod recommend;
pub mod stopwords;
