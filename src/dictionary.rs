//! The dictionary collaborator: a static, thread-safe word list
//! the engine consumes through a trait, so callers can swap in whatever
//! loading mechanism they like (file, embedded list, database-backed
//! cache) without the engine knowing about it.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path as FsPath;

use anyhow::Result;

/// `contains(word) -> bool` over lowercase ASCII a..z, length 2..16.
/// Implementations must be safe to share across concurrent
/// request handlers.
pub trait Dictionary: Send + Sync {
    fn contains(&self, word: &str) -> bool;

    /// Whether any word in the dictionary starts with `prefix`. Used to
    /// prune board-word search early; a dictionary with no efficient
    /// prefix check may always return `true`.
    fn has_prefix(&self, prefix: &str) -> bool {
        let _ = prefix;
        true
    }
}

/// A simple trie-backed dictionary, loaded once at process start and
/// treated as read-only thereafter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Trie {
    next: HashMap<char, Box<Trie>>,
    finish: bool,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, word: &str) {
        match word.chars().next() {
            None => self.finish = true,
            Some(c) => {
                self.next
                    .entry(c)
                    .or_insert_with(|| Box::new(Trie::new()))
                    .insert(&word[c.len_utf8()..]);
            }
        }
    }

    pub fn search(&self, word: &str) -> bool {
        self.descend(word).is_some_and(|node| node.finish)
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.descend(prefix).is_some()
    }

    fn descend(&self, s: &str) -> Option<&Trie> {
        let mut node = self;
        for c in s.chars() {
            node = node.next.get(&c)?;
        }
        Some(node)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    pub fn from_file(path: impl AsRef<FsPath>) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut trie = Trie::new();
        for line in reader.lines() {
            trie.insert(line?.trim());
        }
        Ok(trie)
    }
}

impl Dictionary for Trie {
    fn contains(&self, word: &str) -> bool {
        self.search(word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        Trie::has_prefix(self, prefix)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Trie::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_finds_inserted_words_only() {
        let t = Trie::from_words(["apple", "banana"]);
        assert!(t.search("apple"));
        assert!(t.search("banana"));
        assert!(!t.search("ban"));
        assert!(!t.search("applesauce"));
    }

    #[test]
    fn has_prefix_covers_partial_and_complete_words() {
        let t = Trie::from_words(["apple", "app", "application"]);
        assert!(t.has_prefix(""));
        assert!(t.has_prefix("a"));
        assert!(t.has_prefix("app"));
        assert!(t.has_prefix("appl"));
        assert!(!t.has_prefix("b"));
        assert!(!t.has_prefix("apple123"));
    }

    #[test]
    fn dictionary_trait_object_works() {
        let t: Box<dyn Dictionary> = Box::new(Trie::from_words(["cat", "dog"]));
        assert!(t.contains("cat"));
        assert!(!t.contains("mouse"));
    }

    #[test]
    fn from_file_loads_one_word_per_line() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file, "dog").unwrap();
        writeln!(file, "test").unwrap();
        file.flush().unwrap();

        let t = Trie::from_file(file.path()).unwrap();
        assert!(t.search("cat"));
        assert!(t.search("dog"));
        assert!(!t.search("bird"));
    }
}
