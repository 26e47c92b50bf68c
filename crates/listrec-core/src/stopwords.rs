//! Stopword sets used by the vectorizer
//!
//! A [`StopwordSet`] is built once when a recommender is created and never
//! changes afterwards. It always holds the general English list and, unless
//! disabled, the Seattle neighborhood and location terms.

use std::collections::HashSet;

/// General English stopwords (lowercase, apostrophes kept)
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they",
    "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
    "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and",
    "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for", "with",
    "about", "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
    "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't",
    "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't",
    "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Neighborhood names and location words that say nothing about a listing.
///
/// `"seattlestreet"` is two words run together and is kept as is: fixing it
/// would start filtering "seattle" and "street" from every corpus.
pub const NEIGHBORHOOD_STOPWORDS: &[&str] = &[
    "1st", "2nd", "3rd", "alki", "anne", "arbor", "area", "atlantic", "admiral", "baker",
    "ballard", "bay", "beach", "beacon", "belltown", "bitter", "blaine", "blue", "broadview",
    "broadway", "bryant", "business", "capitol", "cedar", "central", "city", "columbia",
    "delridge", "denny", "district", "downtown", "east", "eastlake", "fairmount", "fauntleroy",
    "floor", "floors", "fremont", "gatewood", "genesee", "georgetown", "green", "greenwood",
    "haller", "harrison", "heights", "high", "highland", "hill", "hills", "house", "housing",
    "interbay", "international", "lake", "laurelhurst", "leschi", "licton", "lower", "madison",
    "madrona", "magnolia", "mann", "market", "meadowbrook", "minor", "montlake", "mount",
    "neighborhood", "north", "northgate", "olympic", "park", "phinney", "pike", "pioneer",
    "point", "portage", "queen", "rainier", "ravenna", "ridge", "riverview", "roxhill", "sand",
    "seattlestreet", "seaview", "seward", "south", "springs", "square", "stevens", "sunset",
    "terrace", "union", "university", "victory", "wallingford", "wedgeview", "west",
    "westlake", "whittier", "yesler",
];

/// Immutable set of tokens excluded from vectorization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// English stopwords, plus the neighborhood list when `combine_extra` is set
    pub fn new(combine_extra: bool) -> Self {
        let mut words: HashSet<String> = ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect();
        if combine_extra {
            words.extend(NEIGHBORHOOD_STOPWORDS.iter().map(|w| w.to_string()));
        }
        Self { words }
    }

    /// English stopwords only
    pub fn english() -> Self {
        Self::new(false)
    }

    /// Whether `token` is excluded (exact, case-sensitive match)
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All stopwords in lexicographic order
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::new(true)
    }
}
