use serde::Serialize;

/// One maximal run of ASCII letters in a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleWord {
    /// Lowercased letters of the run.
    pub word: String,
    /// Character index of the run's first letter in the original title.
    pub start_index: usize,
    /// Half-open range of this word inside [`TitleInfo::letters`].
    pub letter_start_index: usize,
    pub letter_end_index: usize,
}

impl TitleWord {
    pub fn len(&self) -> usize {
        self.letter_end_index - self.letter_start_index
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_letter(&self, letter_position: usize) -> bool {
        (self.letter_start_index..self.letter_end_index).contains(&letter_position)
    }
}

/// Index-mapped view of a title, built once per search.
///
/// Every "original index" is a character position in `original` (as counted
/// by [`str::chars`]), never a byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleInfo {
    pub original: String,
    /// ASCII letters of `original`, lowercased, in order.
    pub letters: String,
    /// `letter_positions[i]` is the original index of `letters[i]`. Strictly increasing.
    pub letter_positions: Vec<usize>,
    pub words: Vec<TitleWord>,
    /// First letter of every word, in word order.
    pub initials: String,
}

impl TitleInfo {
    /// Analyze a raw title. Titles without letters produce an empty analysis.
    pub fn analyze(title: &str) -> Self {
        let mut letters = String::new();
        let mut letter_positions = Vec::new();
        let mut words = Vec::new();
        let mut current: Option<TitleWord> = None;

        for (index, ch) in title.chars().enumerate() {
            if !ch.is_ascii_alphabetic() {
                if let Some(word) = current.take() {
                    words.push(word);
                }
                continue;
            }

            let lower = ch.to_ascii_lowercase();
            // `letters` is pure ASCII, so its byte length is its letter count.
            let cursor = letters.len();
            match current.as_mut() {
                Some(word) => {
                    word.word.push(lower);
                    word.letter_end_index = cursor + 1;
                }
                None => {
                    current = Some(TitleWord {
                        word: lower.to_string(),
                        start_index: index,
                        letter_start_index: cursor,
                        letter_end_index: cursor + 1,
                    });
                }
            }
            letters.push(lower);
            letter_positions.push(index);
        }
        if let Some(word) = current {
            words.push(word);
        }

        let initials = words.iter().filter_map(|w| w.word.chars().next()).collect();

        Self {
            original: title.to_string(),
            letters,
            letter_positions,
            words,
            initials,
        }
    }

    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Map an original-title index back to its position in `letters`.
    pub fn letter_position_of(&self, original_index: usize) -> Option<usize> {
        self.letter_positions.binary_search(&original_index).ok()
    }

    /// The title word covering a position in `letters`.
    pub fn word_at_letter(&self, letter_position: usize) -> Option<(usize, &TitleWord)> {
        let idx = self
            .words
            .partition_point(|w| w.letter_end_index <= letter_position);
        self.words
            .get(idx)
            .filter(|w| w.contains_letter(letter_position))
            .map(|w| (idx, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_mixed_title() {
        let info = TitleInfo::analyze("Hello, World 2!");
        assert_eq!(info.letters, "helloworld");
        assert_eq!(info.letter_positions, vec![0, 1, 2, 3, 4, 7, 8, 9, 10, 11]);
        assert_eq!(info.initials, "hw");
        assert_eq!(info.words.len(), 2);

        let world = &info.words[1];
        assert_eq!(world.word, "world");
        assert_eq!(world.start_index, 7);
        assert_eq!(world.letter_start_index, 5);
        assert_eq!(world.letter_end_index, 10);
        assert_eq!(world.len(), 5);
    }

    #[test]
    fn test_digits_split_words() {
        let info = TitleInfo::analyze("web3Auth");
        let words: Vec<_> = info.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["web", "auth"]);
        assert_eq!(info.initials, "wa");
        assert_eq!(info.words[1].start_index, 4);
    }

    #[test]
    fn test_empty_and_letterless_titles() {
        for title in ["", "   ", "123 -- 456"] {
            let info = TitleInfo::analyze(title);
            assert!(info.is_empty());
            assert!(info.letters.is_empty());
            assert!(info.letter_positions.is_empty());
            assert!(info.initials.is_empty());
            assert_eq!(info.original, title);
        }
    }

    #[test]
    fn test_non_ascii_uses_char_indices() {
        let info = TitleInfo::analyze("Café Noir");
        // 'é' is not an ASCII letter: it ends the first word and is never indexed.
        assert_eq!(info.letters, "cafnoir");
        assert_eq!(info.words[1].start_index, 5);
        assert_eq!(info.letter_positions[3], 5);
    }

    #[test]
    fn test_word_ranges_cover_letters() {
        let info = TitleInfo::analyze("  Distributed   Consensus-Engine ");
        let mut cursor = 0;
        for word in &info.words {
            assert_eq!(word.letter_start_index, cursor);
            assert_eq!(word.len(), word.word.len());
            assert_eq!(
                &info.letters[word.letter_start_index..word.letter_end_index],
                word.word
            );
            assert_eq!(info.letter_positions[word.letter_start_index], word.start_index);
            cursor = word.letter_end_index;
        }
        assert_eq!(cursor, info.letter_count());
        assert!(info.letter_positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_letter_lookups() {
        let info = TitleInfo::analyze("Cat Dog");
        assert_eq!(info.letter_position_of(4), Some(3));
        assert_eq!(info.letter_position_of(3), None);
        assert_eq!(info.word_at_letter(3).map(|(i, _)| i), Some(1));
        assert_eq!(info.word_at_letter(2).map(|(_, w)| w.word.as_str()), Some("cat"));
        assert!(info.word_at_letter(6).is_none());
    }
}
