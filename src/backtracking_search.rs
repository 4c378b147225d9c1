//! This module fills a grid with backtracking search. Variables are chosen with the "minimum
//! remaining values" heuristic (ties broken by degree, then by the variables' own ordering) and
//! words are tried in "least constraining value" order. By default we also maintain arc
//! consistency after every assignment.
//!
//! The search runs on an explicit stack of frames rather than recursion. Each frame remembers a
//! checkpoint in the domain store's removal log, so abandoning a candidate rolls back exactly
//! the removals made on its behalf and nothing leaks into sibling branches.

use bit_set::BitSet;
use instant::{Duration, Instant};
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::arc_consistency::{ac3, Arc};
use crate::domains::{Checkpoint, DomainStore};
use crate::grid_config::{Choice, GridConfig, Variable, VariableId};
use crate::word_list::{WordId, WordList};
use crate::CHECK_INVARIANTS;

/// What to do after each tentative assignment, beyond checking that it's consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inference {
    /// Plain backtracking: domains stay as they were after the initial arc-consistency pass.
    None,

    /// Shrink the assigned variable's domain to its word, drop that word from every other
    /// unassigned variable, and re-establish arc consistency from there.
    ArcConsistency,
}

/// Tunable settings for a solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub inference: Inference,

    /// Give up after this many abandoned candidates. `None` means search until done.
    pub max_backtracks: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            inference: Inference::ArcConsistency,
            max_backtracks: None,
        }
    }
}

/// A struct tracking statistics about the solving process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub states: u64,
    pub backtracks: u64,
    pub inference_removals: u64,
    pub duration: Duration,
}

/// The ways a solve can come up empty. None of these mean the solver misbehaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveFailure {
    /// A domain was emptied by node or arc consistency before search began, so the grid can't be
    /// filled from this word list.
    StructuralInconsistency { variable: Variable },

    /// Every branch of the search failed.
    SearchExhausted,

    /// The search hit `SolverConfig::max_backtracks` before finding a fill.
    BacktrackLimitReached,
}

impl Display for SolveFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveFailure::StructuralInconsistency { variable } => {
                write!(f, "no words fit variable {}", variable)
            }
            SolveFailure::SearchExhausted => write!(f, "no fill exists"),
            SolveFailure::BacktrackLimitReached => write!(f, "gave up after too many backtracks"),
        }
    }
}

impl Error for SolveFailure {}

/// A partial mapping from variables to words, indexed by VariableId.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    words: Vec<Option<WordId>>,
    assigned_count: usize,
}

impl Assignment {
    pub fn new(variable_count: usize) -> Assignment {
        Assignment {
            words: vec![None; variable_count],
            assigned_count: 0,
        }
    }

    pub fn get(&self, variable_id: VariableId) -> Option<WordId> {
        self.words[variable_id]
    }

    pub fn is_assigned(&self, variable_id: VariableId) -> bool {
        self.words[variable_id].is_some()
    }

    pub fn assign(&mut self, variable_id: VariableId, word_id: WordId) {
        if self.words[variable_id].replace(word_id).is_none() {
            self.assigned_count += 1;
        }
    }

    pub fn unassign(&mut self, variable_id: VariableId) {
        if self.words[variable_id].take().is_some() {
            self.assigned_count -= 1;
        }
    }

    pub fn len(&self) -> usize {
        self.assigned_count
    }

    pub fn is_empty(&self) -> bool {
        self.assigned_count == 0
    }

    /// The assigned (variable, word) pairs, in variable order.
    pub fn choices(&self) -> Vec<Choice> {
        self.words.iter().enumerate()
            .filter_map(|(variable_id, word_id)| {
                word_id.map(|word_id| Choice { variable_id, word_id })
            })
            .collect()
    }

    /// The assignment spelled out as variables and words.
    pub fn to_map(&self, config: &GridConfig, word_list: &WordList) -> BTreeMap<Variable, String> {
        self.choices().into_iter()
            .map(|Choice { variable_id, word_id }| {
                (*config.variable(variable_id), word_list.get(word_id).string.clone())
            })
            .collect()
    }
}

/// A struct representing the results of a successful solve.
#[derive(Debug, Clone)]
pub struct Solution {
    pub assignment: Assignment,
    pub statistics: Statistics,
}

/// One level of the search: the variable being filled, its candidates in the order we try them,
/// and the removal log position to return to when a candidate is abandoned.
#[derive(Debug)]
struct Frame {
    variable_id: VariableId,
    candidates: Vec<WordId>,
    next_candidate: usize,
    checkpoint: Checkpoint,
}

/// Fills a single grid. Owns the domains for the duration of the solve.
pub struct Solver<'a> {
    config: &'a GridConfig,
    word_list: &'a WordList,
    settings: SolverConfig,
    domains: DomainStore<'a>,
    statistics: Statistics,
}

impl<'a> Solver<'a> {
    /// Create a solver with every variable's domain set to the full word list.
    pub fn new(config: &'a GridConfig, word_list: &'a WordList, settings: SolverConfig) -> Solver<'a> {
        Solver {
            config,
            word_list,
            settings,
            domains: DomainStore::new(config, word_list),
            statistics: Statistics::default(),
        }
    }

    pub fn domains(&self) -> &DomainStore<'a> {
        &self.domains
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Enforce node consistency and then arc consistency over the whole grid. Any emptied domain
    /// proves there's no fill, so we report it right away instead of letting search find out.
    pub fn prepare(&mut self) -> Result<(), SolveFailure> {
        self.domains.enforce_node_consistency();

        if let Some(variable_id) = self.domains.first_empty() {
            let variable = *self.config.variable(variable_id);
            debug!("No words of the right length for {}", variable);
            return Err(SolveFailure::StructuralInconsistency { variable });
        }

        ac3(&mut self.domains, None).map_err(|failure| SolveFailure::StructuralInconsistency {
            variable: *self.config.variable(failure.variable_id),
        })?;

        Ok(())
    }

    /// Run the whole pipeline and return the first complete, consistent fill.
    pub fn solve(mut self) -> Result<Solution, SolveFailure> {
        let start = Instant::now();

        self.prepare()?;
        let result = self.backtrack(Assignment::new(self.config.variable_count()));

        self.statistics.duration = start.elapsed();
        debug!("{:?}", self.statistics);

        result.map(|assignment| Solution {
            assignment,
            statistics: self.statistics,
        })
    }

    /// Does the assignment give a word to every variable?
    pub fn assignment_complete(&self, assignment: &Assignment) -> bool {
        assignment.len() == self.config.variable_count()
    }

    /// Do the assigned words have the right lengths, no repeats, and matching letters wherever
    /// two assigned variables cross?
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        let mut used_words = BitSet::with_capacity(self.word_list.len());

        for Choice { variable_id, word_id } in assignment.choices() {
            let word = self.word_list.get(word_id);
            if word.len() != self.config.variable(variable_id).length {
                return false;
            }
            if !used_words.insert(word_id) {
                return false;
            }

            for &neighbor_id in self.config.neighbors(variable_id) {
                let neighbor_word_id = match assignment.get(neighbor_id) {
                    Some(neighbor_word_id) if neighbor_id > variable_id => neighbor_word_id,
                    _ => continue,
                };
                let overlap = match self.config.overlap(variable_id, neighbor_id) {
                    Some(overlap) => overlap,
                    None => continue,
                };

                let neighbor_word = self.word_list.get(neighbor_word_id);
                if word.char_at(overlap.x_cell) != neighbor_word.char_at(overlap.y_cell) {
                    return false;
                }
            }
        }

        true
    }

    /// Choose the unassigned variable with the fewest remaining words. Ties go to the variable
    /// with the most neighbors, and then to the lowest variable in (row, col, direction, length)
    /// order, which is the same as the lowest id.
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<VariableId> {
        (0..self.config.variable_count())
            .filter(|&variable_id| !assignment.is_assigned(variable_id))
            .min_by_key(|&variable_id| {
                (
                    self.domains.len(variable_id),
                    Reverse(self.config.neighbors(variable_id).len()),
                    variable_id,
                )
            })
    }

    /// Return the words in the variable's domain, ordered by how many words they'd rule out for
    /// unassigned neighbors (fewest first). Ties keep dictionary order.
    pub fn order_domain_values(&self, variable_id: VariableId, assignment: &Assignment) -> Vec<WordId> {
        // For each unassigned neighbor: its overlap, its domain size, and its letter counts at the
        // shared cell.
        let neighbor_stats: Vec<_> = self.config.neighbors(variable_id).iter()
            .filter(|&&neighbor_id| !assignment.is_assigned(neighbor_id))
            .filter_map(|&neighbor_id| {
                let overlap = self.config.overlap(variable_id, neighbor_id)?;
                let char_counts = self.domains.char_counts(neighbor_id, overlap.y_cell);
                Some((neighbor_id, overlap, char_counts))
            })
            .collect();

        let mut costed: Vec<(usize, WordId)> = self.domains.iter(variable_id).map(|word_id| {
            let word = self.word_list.get(word_id);

            let cost: usize = neighbor_stats.iter().map(|(neighbor_id, overlap, char_counts)| {
                let letter = word.char_at(overlap.x_cell);

                // This word never counts against itself.
                let contains_self = self.domains.contains(*neighbor_id, word_id);
                let others = self.domains.len(*neighbor_id) - contains_self as usize;

                let mut matching = letter
                    .and_then(|letter| char_counts.get(&letter).cloned())
                    .unwrap_or(0);
                if contains_self && letter.is_some() && word.char_at(overlap.y_cell) == letter {
                    matching -= 1;
                }

                others - matching
            }).sum();

            (cost, word_id)
        }).collect();

        costed.sort_by_key(|&(cost, _)| cost);
        costed.into_iter().map(|(_, word_id)| word_id).collect()
    }

    /// After tentatively assigning `word_id` to `variable_id`, prune the other domains
    /// accordingly. Returns false if that empties any domain. Removals are left in the log for
    /// the caller to roll back.
    fn infer(&mut self, variable_id: VariableId, word_id: WordId, assignment: &Assignment) -> bool {
        if self.settings.inference == Inference::None {
            return true;
        }

        let removals_before = self.domains.removal_count();
        let config = self.config;

        self.domains.restrict(variable_id, word_id);
        let mut arcs: Vec<Arc> = config.neighbors(variable_id).iter()
            .map(|&neighbor_id| (neighbor_id, variable_id))
            .collect();

        // The same word can't be used twice.
        let mut consistent = true;
        for other_id in 0..config.variable_count() {
            if other_id == variable_id || assignment.is_assigned(other_id) {
                continue;
            }
            if self.domains.remove(other_id, word_id) {
                if self.domains.is_empty(other_id) {
                    consistent = false;
                    break;
                }
                arcs.extend(config.neighbors(other_id).iter().map(|&neighbor_id| (neighbor_id, other_id)));
            }
        }

        if consistent {
            consistent = ac3(&mut self.domains, Some(&arcs)).is_ok();
        }

        self.statistics.inference_removals += (self.domains.removal_count() - removals_before) as u64;
        consistent
    }

    /// Panic if the search state has drifted. Only used when `CHECK_INVARIANTS` is on.
    fn verify(&self, assignment: &Assignment) {
        assert!(self.consistent(assignment), "Inconsistent partial assignment: {:?}", assignment);
        self.domains.verify();

        if self.settings.inference == Inference::ArcConsistency {
            for Choice { variable_id, word_id } in assignment.choices() {
                assert!(
                    self.domains.len(variable_id) == 1 && self.domains.contains(variable_id, word_id),
                    "Domain of assigned variable {} isn't just its word",
                    self.config.variable(variable_id),
                );
            }
        }
    }

    /// Extend `assignment` to a complete, consistent assignment using depth-first search. The
    /// first complete assignment found is returned. Domains are restored to their starting
    /// state before any failure is returned.
    pub fn backtrack(&mut self, mut assignment: Assignment) -> Result<Assignment, SolveFailure> {
        let mut stack: Vec<Frame> = vec![];

        'descend: loop {
            self.statistics.states += 1;

            if CHECK_INVARIANTS {
                self.verify(&assignment);
            }

            if self.assignment_complete(&assignment) {
                if self.consistent(&assignment) {
                    return Ok(assignment);
                }
            } else if let Some(variable_id) = self.select_unassigned_variable(&assignment) {
                let candidates = self.order_domain_values(variable_id, &assignment);
                trace!(
                    "Filling {} ({} assigned, {} candidates)",
                    self.config.variable(variable_id),
                    assignment.len(),
                    candidates.len(),
                );

                stack.push(Frame {
                    variable_id,
                    candidates,
                    next_candidate: 0,
                    checkpoint: self.domains.checkpoint(),
                });
            }

            // Move the innermost frame on to its next workable candidate, discarding frames that
            // have run out.
            loop {
                let frame = match stack.last_mut() {
                    Some(frame) => frame,
                    None => {
                        debug!("Search exhausted after {} backtracks", self.statistics.backtracks);
                        return Err(SolveFailure::SearchExhausted);
                    }
                };
                let variable_id = frame.variable_id;

                // Undo whatever candidate this frame tried last.
                if assignment.is_assigned(variable_id) {
                    assignment.unassign(variable_id);
                    self.domains.rollback(frame.checkpoint);
                    self.statistics.backtracks += 1;

                    if let Some(max_backtracks) = self.settings.max_backtracks {
                        if self.statistics.backtracks > max_backtracks {
                            debug!("Giving up after {} backtracks", self.statistics.backtracks);
                            let checkpoint = stack[0].checkpoint;
                            self.domains.rollback(checkpoint);
                            return Err(SolveFailure::BacktrackLimitReached);
                        }
                    }
                }

                let word_id = match frame.candidates.get(frame.next_candidate).cloned() {
                    Some(word_id) => word_id,
                    None => {
                        stack.pop();
                        continue;
                    }
                };
                frame.next_candidate += 1;

                assignment.assign(variable_id, word_id);
                if self.consistent(&assignment) && self.infer(variable_id, word_id, &assignment) {
                    continue 'descend;
                }
            }
        }
    }
}

/// Fill the grid with words from the word list, or explain why it can't be done.
pub fn solve(
    config: &GridConfig,
    word_list: &WordList,
    settings: SolverConfig,
) -> Result<Solution, SolveFailure> {
    Solver::new(config, word_list, settings).solve()
}

#[cfg(test)]
mod tests {
    use crate::backtracking_search::{solve, Assignment, Inference, SolveFailure, Solver, SolverConfig};
    use crate::grid_config::{render_grid, Direction, GridConfig, Variable};
    use crate::word_list::WordList;

    /// #___#
    /// #_##_
    /// #_##_
    /// #_##_
    /// #____
    const STRUCTURE: &str = "#___#\n#_##_\n#_##_\n#_##_\n#____\n";

    const WORDS: [&str; 10] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"];

    fn plain() -> SolverConfig {
        SolverConfig { inference: Inference::None, max_backtracks: None }
    }

    fn both_inference_modes() -> [SolverConfig; 2] {
        [plain(), SolverConfig::default()]
    }

    /// Check the properties every fill must have.
    fn assert_valid_fill(config: &GridConfig, word_list: &WordList, assignment: &Assignment) {
        assert_eq!(assignment.len(), config.variable_count(), "fill is incomplete");

        let choices = assignment.choices();
        for choice in &choices {
            let variable = config.variable(choice.variable_id);
            let word = word_list.get(choice.word_id);
            assert_eq!(word.len(), variable.length, "{} has the wrong length for {}", word.string, variable);

            for other in &choices {
                if other.variable_id == choice.variable_id {
                    continue;
                }
                assert_ne!(choice.word_id, other.word_id, "{} is used twice", word.string);

                if let Some(overlap) = config.overlap(choice.variable_id, other.variable_id) {
                    assert_eq!(
                        word.char_at(overlap.x_cell),
                        word_list.get(other.word_id).char_at(overlap.y_cell),
                        "{} and {} don't cross",
                        word.string,
                        word_list.get(other.word_id).string,
                    );
                }
            }
        }
    }

    #[test]
    fn test_solve_small_grid() {
        let config = GridConfig::from_structure_str(STRUCTURE).unwrap();
        let word_list = WordList::new(WORDS);

        for settings in both_inference_modes() {
            let solution = solve(&config, &word_list, settings).expect("Failed to find a fill");
            assert_valid_fill(&config, &word_list, &solution.assignment);

            let words: Vec<_> = solution.assignment.to_map(&config, &word_list).into_values().collect();
            assert_eq!(words, vec!["SIX", "SEVEN", "FIVE", "NINE"]);
            assert_eq!(
                render_grid(&config, &word_list, &solution.assignment.choices()),
                "█SIX█\n█E██F\n█V██I\n█E██V\n█NINE",
            );
        }
    }

    /// ____
    /// _##_
    /// _##_
    /// ____
    #[test]
    fn test_solve_frame_grid_with_distractors() {
        let config = GridConfig::from_structure_str("____\n_##_\n_##_\n____").unwrap();
        let word_list = WordList::new([
            "soap", "salt", "toys", "shoe", "echo", "tray", "slot", "easy", "stay", "yolk",
        ]);

        for settings in both_inference_modes() {
            let first = solve(&config, &word_list, settings.clone()).expect("Failed to find a fill");
            let second = solve(&config, &word_list, settings).expect("Failed to find a fill");

            assert_valid_fill(&config, &word_list, &first.assignment);
            assert_eq!(first.assignment, second.assignment, "solving isn't deterministic");
        }
    }

    /// ___
    /// _##
    /// _##
    #[test]
    fn test_conflicting_crossing_has_no_fill() {
        let config = GridConfig::from_structure_str("___\n_##\n_##").unwrap();
        let word_list = WordList::new(["cat", "dog"]);

        for settings in both_inference_modes() {
            let failure = solve(&config, &word_list, settings).expect_err("C and D crossed?");
            assert!(matches!(failure, SolveFailure::StructuralInconsistency { .. }));
        }

        // Without the up-front consistency pass, search has to find out for itself.
        let mut solver = Solver::new(&config, &word_list, plain());
        assert_eq!(
            solver.backtrack(Assignment::new(config.variable_count())),
            Err(SolveFailure::SearchExhausted),
        );
    }

    #[test]
    fn test_single_variable_takes_any_word() {
        let config = GridConfig::from_structure_str("___").unwrap();
        let word_list = WordList::new(["cat", "dog"]);

        let solution = solve(&config, &word_list, SolverConfig::default()).expect("Failed to find a fill");

        let words: Vec<_> = solution.assignment.to_map(&config, &word_list).into_values().collect();
        assert_eq!(words.len(), 1);
        assert!(words[0] == "CAT" || words[0] == "DOG");
    }

    /// ___
    /// ##_
    /// ##_
    /// ##_
    /// ##_
    #[test]
    fn test_crossing_forces_single_pairing() {
        let config = GridConfig::from_structure_str("___\n##_\n##_\n##_\n##_").unwrap();
        let word_list = WordList::new(["ten", "tie", "enter", "tiger"]);

        for settings in both_inference_modes() {
            let solution = solve(&config, &word_list, settings).expect("Failed to find a fill");

            let map = solution.assignment.to_map(&config, &word_list);
            assert_eq!(map[&Variable::new(0, 0, Direction::Across, 3)], "TIE");
            assert_eq!(map[&Variable::new(0, 2, Direction::Down, 5)], "ENTER");
        }
    }

    #[test]
    fn test_wrong_lengths_fail_before_search() {
        let config = GridConfig::from_structure_str(STRUCTURE).unwrap();
        let word_list = WordList::new(["one", "two", "three", "four"]);

        let failure = solve(&config, &word_list, SolverConfig::default()).expect_err("Filled a 5-slot?");
        assert_eq!(failure, SolveFailure::StructuralInconsistency {
            variable: Variable::new(0, 1, Direction::Down, 5),
        });
    }

    #[test]
    fn test_grid_without_variables_is_trivially_filled() {
        let config = GridConfig::from_structure_str("_#_\n#_#").unwrap();
        let word_list = WordList::new(["cat"]);

        let solution = solve(&config, &word_list, SolverConfig::default()).expect("Failed to find a fill");
        assert!(solution.assignment.is_empty());
    }

    #[test]
    fn test_consistent() {
        let config = GridConfig::from_structure_str(STRUCTURE).unwrap();
        let word_list = WordList::new(WORDS);
        let solver = Solver::new(&config, &word_list, plain());
        let id = |word: &str| word_list.find(word).unwrap();

        let mut assignment = Assignment::new(config.variable_count());
        assert!(solver.consistent(&assignment));

        assignment.assign(0, id("six"));
        assignment.assign(1, id("seven"));
        assert!(solver.consistent(&assignment));

        // Letters clash in the shared cell.
        assignment.assign(1, id("three"));
        assert!(!solver.consistent(&assignment));

        // Wrong length.
        assignment.assign(1, id("nine"));
        assert!(!solver.consistent(&assignment));

        // Same word twice.
        assignment.assign(1, id("seven"));
        assignment.assign(2, id("five"));
        assignment.assign(3, id("five"));
        assert!(!solver.consistent(&assignment));

        assignment.assign(3, id("nine"));
        assert!(solver.consistent(&assignment));
        assert!(solver.assignment_complete(&assignment));
    }

    #[test]
    fn test_select_unassigned_variable() {
        let config = GridConfig::from_structure_str(STRUCTURE).unwrap();
        let word_list = WordList::new(WORDS);
        let mut solver = Solver::new(&config, &word_list, plain());
        solver.domains.enforce_node_consistency();

        // Variables 1, 2, and 3 each have three words; 1 and 3 both have two neighbors, and 1
        // comes first.
        let mut assignment = Assignment::new(config.variable_count());
        assert_eq!(solver.select_unassigned_variable(&assignment), Some(1));

        assignment.assign(1, word_list.find("seven").unwrap());
        assert_eq!(solver.select_unassigned_variable(&assignment), Some(3));

        assignment.assign(0, word_list.find("six").unwrap());
        assignment.assign(2, word_list.find("five").unwrap());
        assignment.assign(3, word_list.find("nine").unwrap());
        assert_eq!(solver.select_unassigned_variable(&assignment), None);
    }

    /// ___
    /// _##
    /// _##
    #[test]
    fn test_order_domain_values_prefers_least_constraining() {
        let config = GridConfig::from_structure_str("___\n_##\n_##").unwrap();
        let word_list = WordList::new(["dot", "cat", "cow", "cup"]);
        let mut solver = Solver::new(&config, &word_list, plain());
        solver.domains.enforce_node_consistency();
        let words = |word_ids: Vec<usize>| -> Vec<String> {
            word_ids.into_iter().map(|word_id| word_list.get(word_id).string.clone()).collect()
        };

        // DOT rules out every other word for the crossing slot; the C words rule out just one.
        let mut assignment = Assignment::new(config.variable_count());
        assert_eq!(words(solver.order_domain_values(0, &assignment)), vec!["CAT", "COW", "CUP", "DOT"]);

        // Assigned neighbors don't count.
        assignment.assign(1, word_list.find("cow").unwrap());
        assert_eq!(words(solver.order_domain_values(0, &assignment)), vec!["DOT", "CAT", "COW", "CUP"]);
    }

    /// __
    /// ##
    /// __
    #[test]
    fn test_failed_search_rolls_back_domains() {
        let config = GridConfig::from_structure_str("__\n##\n__").unwrap();
        let word_list = WordList::new(["ox"]);

        for settings in both_inference_modes() {
            let mut solver = Solver::new(&config, &word_list, settings);
            solver.prepare().expect("Nothing should be inconsistent yet");
            let checkpoint = solver.domains().checkpoint();

            let result = solver.backtrack(Assignment::new(config.variable_count()));

            assert_eq!(result, Err(SolveFailure::SearchExhausted));
            assert_eq!(solver.domains().checkpoint(), checkpoint);
            assert_eq!(solver.domains().len(0), 1);
            assert_eq!(solver.domains().len(1), 1);
            assert!(solver.statistics().backtracks > 0);
        }
    }

    #[test]
    fn test_backtrack_limit() {
        let config = GridConfig::from_structure_str("__\n##\n__").unwrap();
        let word_list = WordList::new(["ox"]);
        let settings = SolverConfig { inference: Inference::None, max_backtracks: Some(0) };

        let failure = solve(&config, &word_list, settings).expect_err("Filled two slots with one word?");
        assert_eq!(failure, SolveFailure::BacktrackLimitReached);
    }
}
