use log::warn;
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt::{Debug, Formatter};

use crate::MAX_SLOT_LENGTH;

/// An identifier for a given word, based on its index in the WordList's `words` field.
pub type WordId = usize;

/// A struct representing a word that can be chosen for a given slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub string: String,
    pub chars: SmallVec<[char; MAX_SLOT_LENGTH]>,
}

impl Word {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The letter at the given cell index within this word, if the word is long enough.
    pub fn char_at(&self, cell_idx: usize) -> Option<char> {
        self.chars.get(cell_idx).cloned()
    }
}

/// The dictionary used to seed every slot's domain. Words are upper-cased and deduplicated, and
/// keep the order they were first seen in, which is the order every domain iterates in.
#[derive(Clone, Default)]
pub struct WordList {
    pub words: Vec<Word>,
}

impl Debug for WordList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordList")
            .field("words", &format!("({} entries)", self.words.len()))
            .finish()
    }
}

impl WordList {
    /// Build a word list from an iterator of strings. Entries containing anything other than
    /// letters are skipped.
    pub fn new<I, S>(entries: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut words = vec![];

        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            if !entry.chars().all(char::is_alphabetic) {
                warn!("Skipping dictionary entry with non-alphabetic characters: {:?}", entry);
                continue;
            }

            let string = entry.to_uppercase();
            if !seen.insert(string.clone()) {
                continue;
            }

            words.push(Word {
                chars: string.chars().collect(),
                string,
            });
        }

        WordList { words }
    }

    /// Parse a dictionary file's contents, one word per line.
    pub fn from_lines(contents: &str) -> WordList {
        WordList::new(contents.lines())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, word_id: WordId) -> &Word {
        &self.words[word_id]
    }

    pub fn find(&self, string: &str) -> Option<WordId> {
        let string = string.to_uppercase();
        self.words.iter().position(|word| word.string == string)
    }
}

#[cfg(test)]
mod tests {
    use crate::word_list::WordList;

    #[test]
    fn test_words_are_normalized_and_deduplicated() {
        let word_list = WordList::from_lines("cat\n  Dog \n\nCAT\nit's\nemu\n");

        let strings: Vec<_> = word_list.words.iter().map(|word| word.string.as_str()).collect();
        assert_eq!(strings, vec!["CAT", "DOG", "EMU"]);
        assert_eq!(word_list.get(1).char_at(2), Some('G'));
        assert_eq!(word_list.get(1).char_at(3), None);
        assert_eq!(word_list.find("emu"), Some(2));
        assert_eq!(word_list.find("yak"), None);
    }
}
