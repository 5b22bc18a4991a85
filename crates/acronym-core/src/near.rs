use tracing::debug;

use crate::distance::levenshtein;
use crate::matcher::{find_word_in_title, is_subsequence};
use crate::niceness::round2;
use crate::search::{WordMatch, sort_matches};
use crate::title::TitleInfo;

const NEAR_SCALE: f64 = 50.0;
const SAME_FIRST_LETTER_BONUS: f64 = 0.2;
const CONTAINS_INITIALS_BONUS: f64 = 0.3;

/// Knobs for [`near_matches`].
#[derive(Debug, Clone)]
pub struct NearOptions {
    pub max_edit_distance: usize,
    pub target_count: usize,
}

impl Default for NearOptions {
    fn default() -> Self {
        Self {
            max_edit_distance: 2,
            target_count: 50,
        }
    }
}

/// Dictionary words within a few edits of the title's initials that cannot
/// be spelled from the title itself.
pub fn near_matches(title: &TitleInfo, words: &[String], options: &NearOptions) -> Vec<WordMatch> {
    let initials = title.initials.as_str();
    let initials_len = initials.chars().count();
    if initials_len < 2 {
        return Vec::new();
    }

    let max_distance = options.max_edit_distance;
    let min_len = initials_len.saturating_sub(max_distance).max(2);
    let max_len = initials_len + max_distance + 2;
    let raw_cap = options.target_count.saturating_mul(2);

    let mut matches = Vec::new();
    for candidate in words {
        if matches.len() >= raw_cap {
            debug!(raw_cap, "near match candidate cap reached");
            break;
        }

        let len = candidate.chars().count();
        if len < min_len || len > max_len {
            continue;
        }

        let lower = candidate.to_lowercase();
        let distance = levenshtein(&lower, initials);
        if distance == 0 || distance > max_distance {
            continue;
        }
        if find_word_in_title(title, &lower).is_some() {
            continue;
        }

        let niceness = near_niceness(initials, &lower, distance, max_distance);
        let indices = initials_indices(title, &lower);
        matches.push(WordMatch::near(
            candidate.clone(),
            indices,
            niceness,
            distance,
        ));
    }

    sort_matches(&mut matches);
    matches.truncate(options.target_count);
    matches
}

fn near_niceness(initials: &str, candidate: &str, distance: usize, max_distance: usize) -> f64 {
    let mut closeness = 1.0 - distance as f64 / (max_distance + 1) as f64;
    if candidate.chars().next() == initials.chars().next() {
        closeness += SAME_FIRST_LETTER_BONUS;
    }
    if is_subsequence(initials, candidate) {
        closeness += CONTAINS_INITIALS_BONUS;
    }
    round2(closeness.min(1.0) * NEAR_SCALE)
}

/// Walk `candidate` left to right, consuming initials in order. Each
/// consumed initial contributes the start index of its title word.
fn initials_indices(title: &TitleInfo, candidate: &str) -> Vec<usize> {
    let mut pending = title.words.iter().zip(title.initials.chars()).peekable();
    let mut indices = Vec::new();
    for ch in candidate.chars() {
        if let Some(&(word, initial)) = pending.peek()
            && ch == initial
        {
            indices.push(word.start_index);
            pending.next();
        }
    }
    indices
}
