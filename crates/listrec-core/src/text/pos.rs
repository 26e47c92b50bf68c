//! Part-of-speech tagging used to keep only nouns and adjectives
//!
//! Tags follow the Penn Treebank tag set (`NN`, `NNS`, `JJ`, `VBZ`, ...). The
//! normalizer only looks at the tag prefix, so any tagger producing Penn tags
//! can be plugged in through [`PosTagger`].

use std::fmt;
use std::path::Path;

use nlprule::Tokenizer;

use crate::error::{ListrecError, Result};

/// A part-of-speech tagging capability.
///
/// Implementations must return exactly one `(token, tag)` pair per input
/// token, in input order.
pub trait PosTagger {
    fn tag(&self, tokens: &[&str]) -> Vec<(String, String)>;
}

/// Tagger backed by an nlprule English tokenizer binary (`en_tokenizer.bin`)
pub struct NlpruleTagger {
    tokenizer: Tokenizer,
}

impl fmt::Debug for NlpruleTagger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NlpruleTagger").finish_non_exhaustive()
    }
}

impl NlpruleTagger {
    /// Load the tokenizer binary at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let tokenizer = Tokenizer::new(path).map_err(|e| ListrecError::TaggerLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "load_tagger");
        Ok(Self::from_tokenizer(tokenizer))
    }

    pub fn from_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }
}

impl PosTagger for NlpruleTagger {
    fn tag(&self, tokens: &[&str]) -> Vec<(String, String)> {
        let text = tokens.join(" ");
        let pieces: Vec<(String, String)> = self
            .tokenizer
            .pipe(&text)
            .flat_map(|sentence| {
                sentence
                    .tokens()
                    .iter()
                    .filter_map(|token| {
                        let word = token.word().text().as_str().trim();
                        if word.is_empty() {
                            return None;
                        }
                        let pos = token
                            .word()
                            .tags()
                            .first()
                            .map(|data| data.pos().as_str())
                            .unwrap_or_default();
                        Some((word.to_string(), pos.to_string()))
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        align_tags(tokens, &pieces)
    }
}

/// Map tagger output back onto whitespace tokens.
///
/// A tagger may split one whitespace token into several pieces; each input
/// token takes the tag of its first piece. Tokens left without a piece get
/// an empty tag.
pub(crate) fn align_tags(tokens: &[&str], pieces: &[(String, String)]) -> Vec<(String, String)> {
    let mut pieces = pieces.iter();
    tokens
        .iter()
        .map(|&token| {
            let mut covered = 0;
            let mut tag: Option<&str> = None;
            while covered < token.len() {
                let Some((text, pos)) = pieces.next() else {
                    break;
                };
                covered += text.len();
                tag.get_or_insert(pos.as_str());
            }
            (token.to_string(), tag.unwrap_or_default().to_string())
        })
        .collect()
}

/// Tags listed words, everything else is a singular noun
#[cfg(test)]
pub(crate) struct WordListTagger(pub &'static [(&'static str, &'static str)]);

#[cfg(test)]
impl PosTagger for WordListTagger {
    fn tag(&self, tokens: &[&str]) -> Vec<(String, String)> {
        tokens
            .iter()
            .map(|&token| {
                let tag = self
                    .0
                    .iter()
                    .find(|(word, _)| *word == token)
                    .map_or("NN", |(_, tag)| *tag);
                (token.to_string(), tag.to_string())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(w, t)| (w.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn test_align_one_piece_per_token() {
        let tokens = ["hilly", "leafy", "streets"];
        let tagged = align_tags(
            &tokens,
            &pieces(&[("hilly", "JJ"), ("leafy", "JJ"), ("streets", "NNS")]),
        );
        assert_eq!(
            tagged,
            pieces(&[("hilly", "JJ"), ("leafy", "JJ"), ("streets", "NNS")])
        );
    }

    #[test]
    fn test_align_split_token_takes_first_tag() {
        let tokens = ["cannot", "park"];
        let tagged = align_tags(
            &tokens,
            &pieces(&[("can", "MD"), ("not", "RB"), ("park", "NN")]),
        );
        assert_eq!(tagged, pieces(&[("cannot", "MD"), ("park", "NN")]));
    }

    #[test]
    fn test_align_keeps_count_when_pieces_run_out() {
        let tokens = ["quiet", "street"];
        let tagged = align_tags(&tokens, &pieces(&[("quiet", "JJ")]));
        assert_eq!(tagged.len(), 2);
        assert_eq!(tagged[1], ("street".to_string(), String::new()));
    }

    #[test]
    fn test_load_missing_binary_fails() {
        let err = NlpruleTagger::load(Path::new("/nonexistent/en_tokenizer.bin")).unwrap_err();
        assert!(matches!(err, ListrecError::TaggerLoad { .. }));
    }

    #[test]
    fn test_word_list_tagger_defaults_to_noun() {
        let tagged = WordListTagger(&[("is", "VBZ")]).tag(&["street", "is"]);
        assert_eq!(tagged, pieces(&[("street", "NN"), ("is", "VBZ")]));
    }
}
