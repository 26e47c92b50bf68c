//! Text normalization for listing remarks
//!
//! Every remark goes through the same stages, each a pure string function:
//!
//! 1. abbreviation expansion per whitespace token ([`expand_abbreviations`])
//! 2. ASCII punctuation removal, character by character ([`remove_punctuation`])
//! 3. either noun/adjective filtering with a [`PosTagger`] ([`keep_nouns_and_adjectives`])
//!    or dropping every token that contains a digit ([`remove_digit_tokens`])
//!
//! The output list always has the same length and order as the input. A remark
//! may clean down to an empty string.

mod abbreviations;
mod pos;

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ListrecError, Result};

pub use abbreviations::{expand_abbreviations, expand_token, ABBREVIATIONS};
pub use pos::{NlpruleTagger, PosTagger};

#[cfg(test)]
pub(crate) use pos::WordListTagger;

/// Unicode decimal digits (general category Nd)
static DIGIT_RE: OnceLock<Regex> = OnceLock::new();

fn digit_re() -> &'static Regex {
    DIGIT_RE.get_or_init(|| Regex::new(r"\d").expect("valid digit pattern"))
}

/// Delete every ASCII punctuation character without re-tokenizing
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Drop whitespace tokens containing a decimal digit.
///
/// Fractions and numeral letters such as `½` or `三` are not decimal digits.
pub fn remove_digit_tokens(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| !digit_re().is_match(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep only tokens tagged as adjectives (`JJ*`) or nouns (`NN*`)
pub fn keep_nouns_and_adjectives(text: &str, tagger: &dyn PosTagger) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    tagger
        .tag(&tokens)
        .into_iter()
        .filter(|(_, tag)| tag.starts_with("JJ") || tag.starts_with("NN"))
        .map(|(token, _)| token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs the normalization stages over a corpus
#[derive(Default)]
pub struct TextCleaner<'a> {
    tagger: Option<&'a dyn PosTagger>,
}

impl<'a> TextCleaner<'a> {
    /// Create a cleaner without a tagger; POS filtering will be refused
    pub fn new() -> Self {
        Self { tagger: None }
    }

    /// Use `tagger` when POS filtering is requested
    pub fn with_tagger(mut self, tagger: &'a dyn PosTagger) -> Self {
        self.tagger = Some(tagger);
        self
    }

    /// Clean a single remark
    ///
    /// With `pos_tagged` the remark keeps only nouns and adjectives and digit
    /// tokens are left to the tagger; otherwise digit tokens are dropped.
    pub fn clean(&self, text: &str, pos_tagged: bool) -> Result<String> {
        let expanded = expand_abbreviations(text);
        let no_punct = remove_punctuation(&expanded);
        if pos_tagged {
            let tagger = self.tagger.ok_or(ListrecError::TaggerUnavailable)?;
            Ok(keep_nouns_and_adjectives(&no_punct, tagger))
        } else {
            Ok(remove_digit_tokens(&no_punct))
        }
    }

    /// Clean every remark, preserving length and order
    pub fn clean_all<S: AsRef<str>>(&self, texts: &[S], pos_tagged: bool) -> Result<Vec<String>> {
        texts
            .iter()
            .map(|text| self.clean(text.as_ref(), pos_tagged))
            .collect()
    }
}
