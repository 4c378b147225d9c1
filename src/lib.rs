pub mod arc_consistency;
pub mod backtracking_search;
pub mod domains;
pub mod grid_config;
pub mod word_list;

pub use backtracking_search::{solve, Assignment, Inference, Solution, SolveFailure, Solver, SolverConfig, Statistics};
pub use grid_config::{render_grid, Direction, GridConfig, Overlap, StructureError, Variable, VariableId};
pub use word_list::{Word, WordId, WordList};

/// Should we re-verify the search state after every step? This can be enabled with
/// `--features check_invariants` when debugging or making risky algorithm changes.
pub const CHECK_INVARIANTS: bool = cfg!(feature = "check_invariants");

/// The expected maximum number of slots appearing in a grid.
pub const MAX_SLOT_COUNT: usize = 256;

/// The expected maximum length for a single slot.
pub const MAX_SLOT_LENGTH: usize = 21;
