//! Trigram similarity compatible with PostgreSQL's pg_trgm
//!
//! Text is lowercased and split into alphanumeric words. Each word is padded
//! with two leading blanks and one trailing blank before its three-character
//! windows are taken. Similarity is the number of shared trigrams divided by
//! the size of the union, so the in-memory catalog scores the same way
//! `similarity()` does in Postgres.

use std::collections::BTreeSet;

type Trigram = [char; 3];

/// Collect the distinct trigrams of `text`
pub fn trigrams(text: &str) -> BTreeSet<Trigram> {
    let lower = text.to_lowercase();
    let mut set = BTreeSet::new();

    for word in lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let padded: Vec<char> = "  "
            .chars()
            .chain(word.chars())
            .chain(std::iter::once(' '))
            .collect();
        for window in padded.windows(3) {
            set.insert([window[0], window[1], window[2]]);
        }
    }

    set
}

/// Trigram similarity in [0, 1]
///
/// Two strings without any alphanumeric content score 0.
pub fn similarity(a: &str, b: &str) -> f32 {
    let left = trigrams(a);
    let right = trigrams(b);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let shared = left.intersection(&right).count();
    let union = left.len() + right.len() - shared;
    shared as f32 / union as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_trigrams() {
        let set = trigrams("cat");
        let expected: BTreeSet<Trigram> = [
            [' ', ' ', 'c'],
            [' ', 'c', 'a'],
            ['c', 'a', 't'],
            ['a', 't', ' '],
        ]
        .into_iter()
        .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_identical_strings() {
        assert!((similarity("React", "react") - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_matches_postgres_reference_value() {
        // SELECT similarity('word', 'two words') = 0.363636
        let score = similarity("word", "two words");
        assert!((score - 4.0 / 11.0).abs() < 1e-6);
    }

    #[test]
    fn test_punctuation_splits_words() {
        assert_eq!(trigrams("node.js"), trigrams("node js"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(similarity("", "react"), 0.0);
        assert_eq!(similarity("--", "--"), 0.0);
    }

    #[test]
    fn test_closer_names_score_higher() {
        let exact = similarity("apple", "apple");
        let prefix = similarity("app", "apple");
        let distant = similarity("app", "appsmith");
        assert!(exact > prefix);
        assert!(prefix > distant);
    }
}
