//! The set of target words, each carrying a found/not-found flag.
//!
//! Words are normalized (trimmed, uppercased) on insertion and enumerated
//! in insertion order. The `found` flag only ever transitions false→true
//! during searches; [`Dictionary::reset_found`] clears all flags between
//! independent search sessions.

use std::collections::HashMap;

/// Ordered set of target words with per-word found flags.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Words in insertion order, normalized to uppercase.
    order: Vec<String>,
    /// Word -> found flag.
    found: HashMap<String, bool>,
}

fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from a word list in one step.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        dictionary.add_words(words);
        dictionary
    }

    /// Add one word, normalized. Empty or whitespace-only input is
    /// ignored. Re-adding an existing word clears its found flag without
    /// changing its position in the enumeration order.
    pub fn add_word(&mut self, word: &str) {
        let word = normalize(word);
        if word.is_empty() {
            return;
        }
        if self.found.insert(word.clone(), false).is_none() {
            self.order.push(word);
        }
    }

    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
    }

    /// Membership test, case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.found.contains_key(&normalize(word))
    }

    /// Flip a word's found flag to true. Unknown words are ignored.
    pub fn mark_found(&mut self, word: &str) {
        if let Some(flag) = self.found.get_mut(&normalize(word)) {
            *flag = true;
        }
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.get(&normalize(word)).copied().unwrap_or(false)
    }

    /// All words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn found_words(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|w| self.found[w.as_str()])
            .map(String::as_str)
            .collect()
    }

    pub fn remaining_words(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|w| !self.found[w.as_str()])
            .map(String::as_str)
            .collect()
    }

    pub fn total_count(&self) -> usize {
        self.order.len()
    }

    pub fn found_count(&self) -> usize {
        self.found.values().filter(|&&f| f).count()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove every word.
    pub fn clear(&mut self) {
        self.order.clear();
        self.found.clear();
    }

    /// Clear every found flag, keeping the words.
    pub fn reset_found(&mut self) {
        for flag in self.found.values_mut() {
            *flag = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_normalizes_and_orders() {
        let mut d = Dictionary::new();
        d.add_word("  cat ");
        d.add_word("Dog");
        d.add_word("BIRD");
        assert_eq!(d.words().collect::<Vec<_>>(), vec!["CAT", "DOG", "BIRD"]);
        assert!(d.contains("cat"));
        assert!(d.contains("CAT"));
        assert!(!d.contains("FISH"));
    }

    #[test]
    fn test_empty_words_are_ignored() {
        let mut d = Dictionary::new();
        d.add_word("");
        d.add_word("   ");
        assert!(d.is_empty());
        assert_eq!(d.total_count(), 0);
    }

    #[test]
    fn test_found_flag_lifecycle() {
        let mut d = Dictionary::from_words(["cat", "dog"]);
        assert!(!d.is_found("cat"));
        d.mark_found("cat");
        assert!(d.is_found("CAT"));
        assert_eq!(d.found_count(), 1);
        assert_eq!(d.found_words(), vec!["CAT"]);
        assert_eq!(d.remaining_words(), vec!["DOG"]);
        d.reset_found();
        assert!(!d.is_found("cat"));
        assert_eq!(d.found_count(), 0);
        assert_eq!(d.total_count(), 2);
    }

    #[test]
    fn test_mark_found_unknown_word_is_noop() {
        let mut d = Dictionary::from_words(["cat"]);
        d.mark_found("dog");
        assert_eq!(d.found_count(), 0);
        assert!(!d.contains("dog"));
    }

    #[test]
    fn test_readding_resets_flag_without_duplicating() {
        let mut d = Dictionary::from_words(["cat", "dog"]);
        d.mark_found("cat");
        d.add_word("cat");
        assert_eq!(d.total_count(), 2);
        assert_eq!(d.words().collect::<Vec<_>>(), vec!["CAT", "DOG"]);
        assert!(!d.is_found("cat"));
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut d = Dictionary::from_words(["cat", "dog"]);
        d.clear();
        assert!(d.is_empty());
        assert!(!d.contains("cat"));
    }
}
