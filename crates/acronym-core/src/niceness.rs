use std::collections::BTreeSet;

use crate::title::TitleInfo;

/// Multiplier applied to fabricated compound words.
pub const COMPOUND_PENALTY: f64 = 0.9;

const FIRST_LETTER_BONUS: f64 = 25.0;
const COVERAGE_WEIGHT: f64 = 40.0;
const START_LETTER_WEIGHT: f64 = 30.0;
const INITIALS_PREFIX_WEIGHT: f64 = 20.0;
const LENGTH_WEIGHT: f64 = 10.0;
const FULL_LENGTH: f64 = 10.0;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score how good `word` is as a stand-in name for the title.
///
/// `indices` are the original-title indices produced by
/// [`find_word_in_title`](crate::matcher::find_word_in_title). The result is
/// the sum of five capped sub-scores (at most 125), rounded to two decimals.
pub fn calculate_niceness(title: &TitleInfo, word: &str, indices: &[usize]) -> f64 {
    let positions: Vec<usize> = indices
        .iter()
        .filter_map(|&i| title.letter_position_of(i))
        .collect();
    let word_len = word.chars().count();

    let mut score = 0.0;

    if let Some(first) = title.words.first()
        && positions.contains(&first.letter_start_index)
    {
        score += FIRST_LETTER_BONUS;
    }

    if !title.words.is_empty() {
        let touched: BTreeSet<usize> = positions
            .iter()
            .filter_map(|&p| title.word_at_letter(p).map(|(idx, _)| idx))
            .collect();
        score += touched.len() as f64 / title.words.len() as f64 * COVERAGE_WEIGHT;
    }

    if word_len > 0 {
        let start_sum: f64 = positions
            .iter()
            .filter_map(|&p| {
                let (_, w) = title.word_at_letter(p)?;
                let within = (p - w.letter_start_index) as f64;
                let span = w.len().saturating_sub(1).max(1) as f64;
                Some(1.0 - within / span)
            })
            .sum();
        score += start_sum / word_len as f64 * START_LETTER_WEIGHT;
    }

    let initials_len = title.initials.chars().count();
    if initials_len > 0 {
        let prefix = word
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .zip(title.initials.chars())
            .take_while(|(a, b)| a == b)
            .count();
        if prefix > 0 {
            score += prefix as f64 / initials_len as f64 * INITIALS_PREFIX_WEIGHT;
        }
    }

    score += (word_len as f64 / FULL_LENGTH).min(1.0) * LENGTH_WEIGHT;

    round2(score)
}
