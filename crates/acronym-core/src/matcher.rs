use crate::title::TitleInfo;

/// Locate `word` as an in-order subsequence of the title's letters.
///
/// Returns one original-title index per letter of `word`, or `None` when the
/// word cannot be spelled from the title. The scan is greedy and never
/// backtracks: each title letter is consumed at most once, and taking the
/// leftmost candidate never prevents a later character from matching.
pub fn find_word_in_title(title: &TitleInfo, word: &str) -> Option<Vec<usize>> {
    if word.chars().count() > title.letter_count() {
        return None;
    }

    let letters = title.letters.as_bytes();
    let mut cursor = 0;
    let mut indices = Vec::with_capacity(word.len());

    for ch in word.chars() {
        let target = ch.to_ascii_lowercase();
        if !target.is_ascii_alphabetic() {
            return None;
        }
        let offset = letters[cursor..]
            .iter()
            .position(|&b| b == target as u8)?;
        cursor += offset;
        indices.push(title.letter_positions[cursor]);
        cursor += 1;
    }

    Some(indices)
}

/// Whether `needle` occurs in `haystack` as an in-order subsequence.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|n| rest.any(|h| h == n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_greedy_indices() {
        let title = TitleInfo::analyze("Cat Dog");
        assert_eq!(find_word_in_title(&title, "cat"), Some(vec![0, 1, 2]));
        assert_eq!(find_word_in_title(&title, "dog"), Some(vec![4, 5, 6]));
        assert_eq!(find_word_in_title(&title, "cog"), Some(vec![0, 5, 6]));
        assert_eq!(find_word_in_title(&title, "catdog"), Some(vec![0, 1, 2, 4, 5, 6]));
    }

    #[test]
    fn test_case_insensitive() {
        let title = TitleInfo::analyze("Rust Engine");
        assert_eq!(find_word_in_title(&title, "RUNE"), Some(vec![0, 1, 9, 10]));
    }

    #[test]
    fn test_order_matters() {
        let title = TitleInfo::analyze("Cat Dog");
        // c, o, then no 'd' left after the 'o'.
        assert_eq!(find_word_in_title(&title, "cod"), None);
        assert_eq!(find_word_in_title(&title, "god"), None);
    }

    #[test]
    fn test_longer_than_title_fails() {
        let title = TitleInfo::analyze("Ab");
        assert_eq!(find_word_in_title(&title, "abc"), None);
        let empty = TitleInfo::analyze("");
        assert_eq!(find_word_in_title(&empty, "a"), None);
    }

    #[test]
    fn test_letters_consumed_once() {
        let title = TitleInfo::analyze("Moon");
        assert_eq!(find_word_in_title(&title, "moo"), Some(vec![0, 1, 2]));
        assert_eq!(find_word_in_title(&title, "mooo"), None);
    }

    #[test]
    fn test_non_letters_in_word_never_match() {
        let title = TitleInfo::analyze("a-b c");
        assert_eq!(find_word_in_title(&title, "a-b"), None);
    }

    #[test]
    fn test_is_subsequence() {
        assert!(is_subsequence("dce", "dice"));
        assert!(is_subsequence("", "anything"));
        assert!(!is_subsequence("dce", "ced"));
        assert!(!is_subsequence("abc", "ab"));
    }
}
