use crate::word::WordEntry;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Number of history rows shown per page in the client
pub const HISTORY_PAGE_SIZE: usize = 10;

/// A revealed word plus the user's "marked" flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub word: String,
    pub meaning: String,
    #[serde(rename = "isMarked")]
    pub is_marked: bool,
}

impl HistoryEntry {
    fn from_word(entry: &WordEntry) -> Self {
        HistoryEntry {
            word: entry.word.clone(),
            meaning: entry.meaning.clone(),
            is_marked: false,
        }
    }
}

/// One page of history, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryPage {
    /// 1-based page number that was sliced
    pub number: usize,

    /// Total pages at the requested page size
    pub total_pages: usize,

    pub items: Vec<HistoryEntry>,
}

/// Every word whose meaning has been revealed this session
///
/// An insertion-ordered map keyed by `word`. Each insert takes a fresh
/// sequence number; promoting an entry removes its old slot and reinserts it
/// under the next number, so iteration order is reveal order.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: BTreeMap<u64, HistoryEntry>,
    index: HashMap<String, u64>,
    next_seq: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn get(&self, word: &str) -> Option<&HistoryEntry> {
        self.index.get(word).and_then(|seq| self.entries.get(seq))
    }

    /// Record that `entry`'s meaning was revealed
    ///
    /// A word already in history moves to the most-recent position and keeps
    /// its `is_marked` flag. A new word is added unmarked.
    pub fn record_reveal(&mut self, entry: &WordEntry) {
        let record = match self.index.remove(&entry.word) {
            Some(old_seq) => {
                let mut existing = self
                    .entries
                    .remove(&old_seq)
                    .unwrap_or_else(|| HistoryEntry::from_word(entry));
                existing.meaning = entry.meaning.clone();
                existing
            }
            None => HistoryEntry::from_word(entry),
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(record.word.clone(), seq);
        self.entries.insert(seq, record);
    }

    /// Flip the marked flag of `word`
    ///
    /// # Returns
    /// * `bool` - false when the word is not in history (nothing changed)
    pub fn toggle_mark(&mut self, word: &str) -> bool {
        let Some(seq) = self.index.get(word) else {
            return false;
        };
        match self.entries.get_mut(seq) {
            Some(entry) => {
                entry.is_marked = !entry.is_marked;
                true
            }
            None => false,
        }
    }

    /// Entries from most to least recently revealed
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.values().rev()
    }

    /// Number of pages needed to show every entry
    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.len().div_ceil(page_size)
    }

    /// Slice page `number` (1-based) out of the newest-first ordering
    ///
    /// A page past the end comes back with no items.
    pub fn page(&self, number: usize, page_size: usize) -> HistoryPage {
        let number = number.max(1);
        let items = self
            .newest_first()
            .skip((number - 1).saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect();

        HistoryPage {
            number,
            total_pages: self.total_pages(page_size),
            items,
        }
    }
}

/// Which history page the client is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: usize,
    pub page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Pager {
            current: 1,
            page_size: HISTORY_PAGE_SIZE,
        }
    }
}

impl Pager {
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Step back one page; stays put on page 1
    pub fn previous(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one page; stays put on the last page
    pub fn next(&mut self, history: &History) -> bool {
        if self.current < history.total_pages(self.page_size) {
            self.current += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(n: usize) -> WordEntry {
        WordEntry::new(format!("w{:02}", n), format!("meaning {}", n))
    }

    fn filled(count: usize) -> History {
        let mut history = History::new();
        for n in 1..=count {
            history.record_reveal(&word(n));
        }
        history
    }

    #[test]
    fn new_reveals_are_unmarked() {
        let history = filled(1);
        let entry = history.get("w01").unwrap();
        assert!(!entry.is_marked);
        assert_eq!(entry.meaning, "meaning 1");
    }

    #[test]
    fn re_reveal_promotes_and_keeps_mark() {
        let mut history = filled(3);
        assert!(history.toggle_mark("w01"));

        history.record_reveal(&word(1));

        assert_eq!(history.len(), 3);
        let first = history.newest_first().next().unwrap();
        assert_eq!(first.word, "w01");
        assert!(first.is_marked);
        let order: Vec<_> = history.newest_first().map(|e| e.word.as_str()).collect();
        assert_eq!(order, vec!["w01", "w03", "w02"]);
    }

    #[test]
    fn double_toggle_restores() {
        let mut history = filled(2);
        let before = history.get("w02").unwrap().is_marked;
        history.toggle_mark("w02");
        history.toggle_mark("w02");
        assert_eq!(history.get("w02").unwrap().is_marked, before);
    }

    #[test]
    fn toggle_unknown_word_is_noop() {
        let mut history = filled(2);
        assert!(!history.toggle_mark("missing"));
        assert!(history.newest_first().all(|e| !e.is_marked));
    }

    #[test]
    fn pages_of_twenty_five() {
        let history = filled(25);
        assert_eq!(history.total_pages(10), 3);

        let first = history.page(1, 10);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].word, "w25");
        assert_eq!(first.items[9].word, "w16");

        let last = history.page(3, 10);
        assert_eq!(last.total_pages, 3);
        let words: Vec<_> = last.items.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["w05", "w04", "w03", "w02", "w01"]);

        assert!(history.page(4, 10).items.is_empty());
    }

    #[test]
    fn empty_history_has_no_pages() {
        let history = History::new();
        assert_eq!(history.total_pages(10), 0);
        assert!(history.page(1, 10).items.is_empty());
    }

    #[test]
    fn pager_clamps_at_both_ends() {
        let history = filled(15);
        let mut pager = Pager::default();

        assert!(!pager.previous());
        assert!(pager.next(&history));
        assert_eq!(pager.current, 2);
        assert!(!pager.next(&history));
        assert!(pager.previous());
        assert_eq!(pager.current, 1);
    }

    #[test]
    fn entry_serializes_with_camel_case_flag() {
        let history = filled(1);
        let json = serde_json::to_string(history.get("w01").unwrap()).unwrap();
        assert_eq!(json, r#"{"word":"w01","meaning":"meaning 1","isMarked":false}"#);
    }
}
