use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::compound::{CompoundOptions, synthesize_compounds};
use crate::dictionary::Dictionary;
use crate::error::{AcronymError, Result};
use crate::matcher::find_word_in_title;
use crate::near::{NearOptions, near_matches};
use crate::niceness::calculate_niceness;
use crate::title::TitleInfo;

/// Which search produced a [`WordMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Dictionary word spelled from the title's letters.
    Exact,
    /// Two exact matches glued together.
    Compound,
    /// Dictionary word a few edits away from the title's initials.
    Near,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MatchType::Exact => "exact",
            MatchType::Compound => "compound",
            MatchType::Near => "near",
        };
        write!(f, "{s}")
    }
}

/// A ranked candidate name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordMatch {
    pub word: String,
    /// Original-title indices justifying the match. For near matches these
    /// are the start indices of the title words the initials came from.
    pub indices: Vec<usize>,
    pub niceness: f64,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<[String; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_distance: Option<usize>,
}

impl WordMatch {
    pub fn exact(word: String, indices: Vec<usize>, niceness: f64) -> Self {
        Self {
            word,
            indices,
            niceness,
            match_type: MatchType::Exact,
            components: None,
            edit_distance: None,
        }
    }

    pub fn compound(
        word: String,
        indices: Vec<usize>,
        niceness: f64,
        components: [String; 2],
    ) -> Self {
        Self {
            word,
            indices,
            niceness,
            match_type: MatchType::Compound,
            components: Some(components),
            edit_distance: None,
        }
    }

    pub fn near(word: String, indices: Vec<usize>, niceness: f64, edit_distance: usize) -> Self {
        Self {
            word,
            indices,
            niceness,
            match_type: MatchType::Near,
            components: None,
            edit_distance: Some(edit_distance),
        }
    }
}

/// Ranking shared by every result category: niceness descending, then
/// longer words first, then alphabetical. Never depends on scan order.
pub fn compare_matches(a: &WordMatch, b: &WordMatch) -> Ordering {
    b.niceness
        .total_cmp(&a.niceness)
        .then_with(|| b.word.len().cmp(&a.word.len()))
        .then_with(|| a.word.cmp(&b.word))
}

pub fn sort_matches(matches: &mut [WordMatch]) {
    matches.sort_by(compare_matches);
}

/// Options for a full [`search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub min_length: usize,
    pub max_results: usize,
    /// Case-insensitive substring every candidate must contain; empty disables it.
    pub search_term: String,
    pub include_compounds: bool,
    pub include_near_matches: bool,
    pub max_edit_distance: usize,
    /// How many top exact matches may serve as compound components.
    pub compound_pool_size: usize,
    pub min_component_length: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_results: 50,
            search_term: String::new(),
            include_compounds: true,
            include_near_matches: true,
            max_edit_distance: 2,
            compound_pool_size: 80,
            min_component_length: 3,
        }
    }
}

impl SearchOptions {
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(AcronymError::invalid_option(
                "min_length",
                "must be at least 1",
            ));
        }
        if self.max_results == 0 {
            return Err(AcronymError::invalid_option(
                "max_results",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// The search term as it is compared against candidates. Only case is
    /// folded; surrounding whitespace is part of the substring.
    pub fn normalized_term(&self) -> String {
        self.search_term.to_lowercase()
    }
}

/// Categorized results of one [`search`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub exact: Vec<WordMatch>,
    pub compound: Vec<WordMatch>,
    pub near: Vec<WordMatch>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.compound.is_empty() && self.near.is_empty()
    }

    pub fn total(&self) -> usize {
        self.exact.len() + self.compound.len() + self.near.len()
    }
}

pub(crate) fn passes_term(candidate: &str, term: &str) -> bool {
    term.is_empty() || candidate.to_lowercase().contains(term)
}

/// Every dictionary word spelled by the title, ranked but not truncated.
///
/// `term` must already be lowercased; see [`SearchOptions::normalized_term`].
pub fn find_exact_matches(
    title: &TitleInfo,
    words: &[String],
    min_length: usize,
    term: &str,
) -> Vec<WordMatch> {
    let max_len = title.letter_count();
    let mut matches: Vec<WordMatch> = words
        .iter()
        .filter(|w| {
            let len = w.chars().count();
            len >= min_length && len <= max_len && passes_term(w, term)
        })
        .filter_map(|w| {
            let indices = find_word_in_title(title, w)?;
            let niceness = calculate_niceness(title, w, &indices);
            Some(WordMatch::exact(w.clone(), indices, niceness))
        })
        .collect();

    sort_matches(&mut matches);
    matches
}

/// Ranked exact matches, truncated to `options.max_results`.
pub fn exact_matches(
    title: &TitleInfo,
    words: &[String],
    options: &SearchOptions,
) -> Vec<WordMatch> {
    let mut matches =
        find_exact_matches(title, words, options.min_length, &options.normalized_term());
    matches.truncate(options.max_results);
    matches
}

/// Run every enabled search category for one title.
///
/// Pure and synchronous; callers that need responsiveness schedule it on a
/// worker thread themselves.
pub fn search(
    title: &TitleInfo,
    dictionary: &Dictionary,
    options: &SearchOptions,
) -> SearchResults {
    if title.is_empty() || dictionary.is_empty() {
        debug!(
            title_words = title.words.len(),
            dictionary = dictionary.len(),
            "nothing to search"
        );
        return SearchResults::default();
    }

    let term = options.normalized_term();
    // Compound components need not contain the term; only the glued word must.
    let spelled = find_exact_matches(title, dictionary.words(), options.min_length, "");
    let mut exact: Vec<WordMatch> = spelled
        .iter()
        .filter(|m| passes_term(&m.word, &term))
        .cloned()
        .collect();
    debug!(spelled = spelled.len(), found = exact.len(), "exact matches");

    let compounds = if options.include_compounds {
        synthesize_compounds(
            title,
            &spelled,
            dictionary,
            &CompoundOptions {
                min_length: options.min_length,
                search_term: &term,
                target_count: options.max_results,
                min_component_length: options.min_component_length,
                pool_size: options.compound_pool_size,
            },
        )
    } else {
        Vec::new()
    };

    exact.truncate(options.max_results);

    let returned: HashSet<&str> = exact.iter().map(|m| m.word.as_str()).collect();
    let compound: Vec<WordMatch> = compounds
        .into_iter()
        .filter(|m| !returned.contains(m.word.as_str()))
        .collect();

    let near = if options.include_near_matches {
        near_matches(
            title,
            dictionary.words(),
            &NearOptions {
                max_edit_distance: options.max_edit_distance,
                target_count: options.max_results,
            },
        )
    } else {
        Vec::new()
    };

    debug!(
        exact = exact.len(),
        compound = compound.len(),
        near = near.len(),
        "search finished"
    );

    SearchResults {
        exact,
        compound,
        near,
    }
}
