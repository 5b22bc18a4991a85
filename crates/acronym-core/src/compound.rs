use std::collections::HashSet;

use tracing::{debug, trace};

use crate::dictionary::Dictionary;
use crate::matcher::find_word_in_title;
use crate::niceness::{COMPOUND_PENALTY, calculate_niceness, round2};
use crate::search::{WordMatch, passes_term, sort_matches};
use crate::title::TitleInfo;

/// Knobs for [`synthesize_compounds`].
#[derive(Debug, Clone)]
pub struct CompoundOptions<'a> {
    pub min_length: usize,
    /// Lowercased substring filter; empty disables it.
    pub search_term: &'a str,
    pub target_count: usize,
    pub min_component_length: usize,
    /// How many of the best exact matches may be used as components.
    pub pool_size: usize,
}

impl Default for CompoundOptions<'_> {
    fn default() -> Self {
        Self {
            min_length: 3,
            search_term: "",
            target_count: 50,
            min_component_length: 3,
            pool_size: 80,
        }
    }
}

/// Glue pairs of exact matches into new words that still spell from the title.
///
/// `exact` must be ranked (best first) and untruncated. A compound is kept
/// only if it is not itself a dictionary word, so every result is fabricated.
pub fn synthesize_compounds(
    title: &TitleInfo,
    exact: &[WordMatch],
    dictionary: &Dictionary,
    options: &CompoundOptions<'_>,
) -> Vec<WordMatch> {
    let pool: Vec<&WordMatch> = exact
        .iter()
        .take(options.pool_size)
        .filter(|m| m.word.chars().count() >= options.min_component_length)
        .collect();
    let cap = options
        .target_count
        .saturating_mul(3)
        .max(options.pool_size);

    debug!(pool = pool.len(), cap, "synthesizing compounds");

    let mut compounds = collect_compounds(title, &pool, dictionary, options, cap);
    sort_matches(&mut compounds);
    compounds.truncate(options.target_count);
    compounds
}

/// Valid compounds in pair order (first component's rank, then second's),
/// stopping once `cap` have been found. Pairs of equal words are skipped.
fn collect_compounds(
    title: &TitleInfo,
    pool: &[&WordMatch],
    dictionary: &Dictionary,
    options: &CompoundOptions<'_>,
    cap: usize,
) -> Vec<WordMatch> {
    let max_len = title.letter_count();
    let mut seen = HashSet::new();
    let mut compounds = Vec::new();

    'pairs: for first in pool {
        for second in pool {
            if first.word == second.word {
                continue;
            }

            let combined = format!("{}{}", first.word, second.word);
            let len = combined.chars().count();
            if len < options.min_length || len > max_len {
                continue;
            }
            if !passes_term(&combined, options.search_term) {
                continue;
            }
            if dictionary.contains(&combined) {
                trace!(word = %combined, "compound is a real word, skipping");
                continue;
            }
            if !seen.insert(combined.clone()) {
                continue;
            }

            let Some(indices) = find_word_in_title(title, &combined) else {
                continue;
            };
            let niceness =
                round2(calculate_niceness(title, &combined, &indices) * COMPOUND_PENALTY);
            compounds.push(WordMatch::compound(
                combined,
                indices,
                niceness,
                [first.word.clone(), second.word.clone()],
            ));

            if compounds.len() >= cap {
                debug!(cap, "compound candidate cap reached");
                break 'pairs;
            }
        }
    }

    compounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{MatchType, find_exact_matches};

    fn exact_for(title: &TitleInfo, dict: &Dictionary) -> Vec<WordMatch> {
        find_exact_matches(title, dict.words(), 3, "")
    }

    #[test]
    fn test_builds_compound_from_two_matches() {
        let title = TitleInfo::analyze("Sun Flower Power");
        let dict = Dictionary::from_words(["sun", "flow", "power"]);
        let exact = exact_for(&title, &dict);

        let compounds = synthesize_compounds(&title, &exact, &dict, &CompoundOptions::default());
        let words: Vec<_> = compounds.iter().map(|m| m.word.as_str()).collect();
        assert!(words.contains(&"sunflow"));
        assert!(words.contains(&"sunpower"));
        assert!(words.contains(&"flowpower"));
        // "power" is consumed before "flow" could start.
        assert!(!words.contains(&"powerflow"));

        let sunflow = compounds.iter().find(|m| m.word == "sunflow").unwrap();
        assert_eq!(sunflow.match_type, MatchType::Compound);
        assert_eq!(
            sunflow.components,
            Some(["sun".to_string(), "flow".to_string()])
        );
        let unpenalized = calculate_niceness(&title, "sunflow", &sunflow.indices);
        assert_eq!(sunflow.niceness, round2(unpenalized * COMPOUND_PENALTY));
    }

    #[test]
    fn test_real_words_are_never_compounds() {
        let title = TitleInfo::analyze("Cat Dog");
        let dict = Dictionary::from_words(["cat", "dog", "catdog"]);
        let exact = exact_for(&title, &dict);

        let compounds = synthesize_compounds(&title, &exact, &dict, &CompoundOptions::default());
        assert!(compounds.iter().all(|m| !dict.contains(&m.word)));
        assert!(compounds.iter().all(|m| m.word != "catdog"));
    }

    #[test]
    fn test_short_components_are_skipped() {
        let title = TitleInfo::analyze("Go Fast Now");
        let dict = Dictionary::from_words(["go", "fast", "now"]);
        let exact = find_exact_matches(&title, dict.words(), 2, "");

        let compounds = synthesize_compounds(&title, &exact, &dict, &CompoundOptions::default());
        let words: Vec<_> = compounds.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["fastnow"]);
    }

    #[test]
    fn test_search_term_and_dedup() {
        let title = TitleInfo::analyze("Sun Flower Power");
        let dict = Dictionary::from_raw(vec!["sun".into(), "sun".into(), "flow".into()]);
        let exact = exact_for(&title, &dict);
        let options = CompoundOptions {
            search_term: "flow",
            ..CompoundOptions::default()
        };

        let compounds = synthesize_compounds(&title, &exact, &dict, &options);
        let words: Vec<_> = compounds.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["sunflow"]);
    }

    fn words_of(compounds: &[WordMatch]) -> Vec<&str> {
        compounds.iter().map(|m| m.word.as_str()).collect()
    }

    #[test]
    fn test_stops_at_candidate_cap_in_pair_order() {
        let title = TitleInfo::analyze("Sun Flower Power");
        let dict = Dictionary::from_words(["sun", "flow", "power", "owe"]);
        let exact = exact_for(&title, &dict);
        assert_eq!(words_of(&exact), vec!["sun", "flow", "power", "owe"]);
        let pool: Vec<&WordMatch> = exact.iter().collect();
        let options = CompoundOptions {
            target_count: 1,
            pool_size: 4,
            ..CompoundOptions::default()
        };

        // max(3 * 1, 4) = 4 candidates, gathered before any sorting.
        let capped = collect_compounds(&title, &pool, &dict, &options, 4);
        assert_eq!(
            words_of(&capped),
            vec!["sunflow", "sunpower", "sunowe", "flowpower"]
        );

        let uncapped = collect_compounds(&title, &pool, &dict, &options, usize::MAX);
        assert_eq!(
            words_of(&uncapped),
            vec!["sunflow", "sunpower", "sunowe", "flowpower", "flowowe", "owepower"]
        );

        let ranked = synthesize_compounds(&title, &exact, &dict, &options);
        assert_eq!(ranked.len(), 1);
        assert!(words_of(&capped).contains(&ranked[0].word.as_str()));
    }

    #[test]
    fn test_huge_target_count_saturates() {
        let title = TitleInfo::analyze("Sun Flower Power");
        let dict = Dictionary::from_words(["sun", "flow"]);
        let exact = exact_for(&title, &dict);
        let options = CompoundOptions {
            target_count: usize::MAX,
            ..CompoundOptions::default()
        };
        let compounds = synthesize_compounds(&title, &exact, &dict, &options);
        assert_eq!(words_of(&compounds), vec!["sunflow"]);
    }

    #[test]
    fn test_equal_words_are_not_paired() {
        let title = TitleInfo::analyze("Sun Sun Flow");
        let dict = Dictionary::from_raw(vec!["sun".into(), "sun".into(), "flow".into()]);
        let exact = exact_for(&title, &dict);
        assert_eq!(exact.len(), 3);

        let compounds = synthesize_compounds(&title, &exact, &dict, &CompoundOptions::default());
        let words = words_of(&compounds);
        assert!(!words.contains(&"sunsun"));
        assert_eq!(words.iter().filter(|w| **w == "sunflow").count(), 1);
    }

    #[test]
    fn test_truncates_to_target() {
        let title = TitleInfo::analyze("Sun Flower Power");
        let dict = Dictionary::from_words(["sun", "flow", "power", "low", "owe"]);
        let exact = exact_for(&title, &dict);
        let options = CompoundOptions {
            target_count: 2,
            ..CompoundOptions::default()
        };

        let compounds = synthesize_compounds(&title, &exact, &dict, &options);
        assert_eq!(compounds.len(), 2);
        assert!(compounds[0].niceness >= compounds[1].niceness);
    }
}
