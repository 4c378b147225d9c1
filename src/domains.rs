use bit_set::BitSet;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::grid_config::{GridConfig, VariableId};
use crate::word_list::{WordId, WordList};

/// A position in the removal log. Rolling back to a checkpoint restores every word removed
/// since it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

/// The still-possible words for a single variable.
#[derive(Clone)]
struct Domain {
    /// Indexed by WordId. Iterating a BitSet yields ascending ids, which is dictionary order.
    available: BitSet,

    /// Cached `available.len()`, which is otherwise a full scan.
    remaining_count: usize,
}

/// Owns the domain of every variable in a grid. All removals go through `remove`, which records
/// them in a log so that they can be undone in reverse order with `rollback`.
pub struct DomainStore<'a> {
    config: &'a GridConfig,
    word_list: &'a WordList,
    domains: Vec<Domain>,
    removals: Vec<(VariableId, WordId)>,
}

impl<'a> Debug for DomainStore<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainStore")
            .field("sizes", &self.domains.iter().map(|domain| domain.remaining_count).collect::<Vec<_>>())
            .field("removals", &self.removals.len())
            .finish()
    }
}

impl<'a> DomainStore<'a> {
    /// Seed every variable's domain with the full word list.
    pub fn new(config: &'a GridConfig, word_list: &'a WordList) -> DomainStore<'a> {
        let mut full = BitSet::with_capacity(word_list.len());
        for word_id in 0..word_list.len() {
            full.insert(word_id);
        }

        DomainStore {
            config,
            word_list,
            domains: (0..config.variable_count()).map(|_| Domain {
                available: full.clone(),
                remaining_count: word_list.len(),
            }).collect(),
            removals: vec![],
        }
    }

    pub fn config(&self) -> &'a GridConfig {
        self.config
    }

    pub fn word_list(&self) -> &'a WordList {
        self.word_list
    }

    pub fn len(&self, variable_id: VariableId) -> usize {
        self.domains[variable_id].remaining_count
    }

    pub fn is_empty(&self, variable_id: VariableId) -> bool {
        self.domains[variable_id].remaining_count == 0
    }

    pub fn contains(&self, variable_id: VariableId, word_id: WordId) -> bool {
        self.domains[variable_id].available.contains(word_id)
    }

    /// The words still available for a variable, in dictionary order.
    pub fn iter(&self, variable_id: VariableId) -> impl Iterator<Item = WordId> + '_ {
        self.domains[variable_id].available.iter()
    }

    /// The first variable (by id) whose domain is empty, if any.
    pub fn first_empty(&self) -> Option<VariableId> {
        self.domains.iter().position(|domain| domain.remaining_count == 0)
    }

    /// Total number of removals currently in the log.
    pub fn removal_count(&self) -> usize {
        self.removals.len()
    }

    /// Remove a word from a variable's domain, recording the removal. Returns false if the word
    /// wasn't there to begin with.
    pub fn remove(&mut self, variable_id: VariableId, word_id: WordId) -> bool {
        let domain = &mut self.domains[variable_id];
        if !domain.available.remove(word_id) {
            return false;
        }

        domain.remaining_count -= 1;
        self.removals.push((variable_id, word_id));
        true
    }

    /// Remove every word except `word_id` from a variable's domain.
    pub fn restrict(&mut self, variable_id: VariableId, word_id: WordId) {
        let others: Vec<WordId> = self.iter(variable_id).filter(|&other| other != word_id).collect();
        for other in others {
            self.remove(variable_id, other);
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.removals.len())
    }

    /// Restore every removal made since the checkpoint, most recent first.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        while self.removals.len() > checkpoint.0 {
            if let Some((variable_id, word_id)) = self.removals.pop() {
                let domain = &mut self.domains[variable_id];
                domain.available.insert(word_id);
                domain.remaining_count += 1;
            }
        }
    }

    /// Remove every word whose length doesn't match its variable's length. Emptied domains are
    /// left for the caller to detect.
    pub fn enforce_node_consistency(&mut self) {
        for variable_id in 0..self.domains.len() {
            let length = self.config.variable(variable_id).length;
            let word_list = self.word_list;

            let wrong_length: Vec<WordId> = self.iter(variable_id)
                .filter(|&word_id| word_list.get(word_id).len() != length)
                .collect();

            for word_id in wrong_length {
                self.remove(variable_id, word_id);
            }
        }
    }

    /// For each letter, how many words in the variable's domain place it in the given cell.
    pub fn char_counts(&self, variable_id: VariableId, cell_idx: usize) -> HashMap<char, usize> {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for word_id in self.iter(variable_id) {
            if let Some(c) = self.word_list.get(word_id).char_at(cell_idx) {
                *counts.entry(c).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Make `x` arc consistent with `y`: remove every word from `x` that has no word in `y` with
    /// the same letter at the shared cell. A word never supports itself, since the same word
    /// can't be used twice. Returns true if anything was removed.
    pub fn revise(&mut self, x: VariableId, y: VariableId) -> bool {
        let overlap = match self.config.overlap(x, y) {
            Some(overlap) => overlap,
            None => return false,
        };
        let word_list = self.word_list;
        let y_char_counts = self.char_counts(y, overlap.y_cell);

        let unsupported: Vec<WordId> = self.iter(x).filter(|&word_id| {
            let word = word_list.get(word_id);
            let x_char = match word.char_at(overlap.x_cell) {
                Some(c) => c,
                None => return true,
            };

            let mut support_count = y_char_counts.get(&x_char).cloned().unwrap_or(0);
            if self.contains(y, word_id) && word.char_at(overlap.y_cell) == Some(x_char) {
                support_count -= 1;
            }

            support_count == 0
        }).collect();

        for &word_id in &unsupported {
            self.remove(x, word_id);
        }

        !unsupported.is_empty()
    }

    /// Check the cached counts against the underlying sets and make sure every logged removal is
    /// actually absent. Only used when `CHECK_INVARIANTS` is on.
    pub fn verify(&self) {
        for (variable_id, domain) in self.domains.iter().enumerate() {
            assert_eq!(
                domain.remaining_count,
                domain.available.len(),
                "Cached domain size is stale for variable {}",
                variable_id,
            );
        }
        for &(variable_id, word_id) in &self.removals {
            assert!(
                !self.domains[variable_id].available.contains(word_id),
                "Logged removal of word {} is still present for variable {}",
                word_id,
                variable_id,
            );
        }
    }
}
