use std::collections::HashSet;

use acronym_core::{MatchType, SearchResults, TitleInfo, WordMatch};

/// Uppercase every title character a match points at; lowercase the rest.
///
/// Near matches point at the first letters of the title words they stand for,
/// so the same rule highlights the initials they were derived from.
pub fn highlight(title: &str, indices: &[usize]) -> String {
    let marked: HashSet<usize> = indices.iter().copied().collect();
    title
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if marked.contains(&i) {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

fn detail(m: &WordMatch) -> String {
    match m.match_type {
        MatchType::Exact => String::new(),
        MatchType::Compound => m
            .components
            .as_ref()
            .map(|[a, b]| format!("{a} + {b}"))
            .unwrap_or_default(),
        MatchType::Near => m
            .edit_distance
            .map(|d| format!("{d} edit{}", if d == 1 { "" } else { "s" }))
            .unwrap_or_default(),
    }
}

pub fn print_results(info: &TitleInfo, results: &SearchResults) {
    for (label, matches) in [
        ("Exact", &results.exact),
        ("Compound", &results.compound),
        ("Near", &results.near),
    ] {
        if matches.is_empty() {
            continue;
        }
        println!("{label} ({}):", matches.len());
        for m in matches {
            println!(
                "  {:<20} {:>7.2}  {:<30} {}",
                m.word,
                m.niceness,
                highlight(&info.original, &m.indices),
                detail(m),
            );
        }
    }
}

pub fn print_title(info: &TitleInfo) {
    println!("Title:    {}", info.original);
    println!("Letters:  {}", info.letters);
    println!("Initials: {}", info.initials);
    println!();
    println!("  {:<20} {:<8} {:<8}", "Word", "Start", "Letters");
    println!("  {}", "-".repeat(38));
    for w in &info.words {
        println!(
            "  {:<20} {:<8} {}..{}",
            w.word, w.start_index, w.letter_start_index, w.letter_end_index
        );
    }
}
