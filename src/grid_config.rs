use smallvec::SmallVec;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::word_list::{WordId, WordList};
use crate::{MAX_SLOT_COUNT, MAX_SLOT_LENGTH};

/// An identifier for a given variable (slot), based on its index in the GridConfig's
/// `variables` field. Variables are stored in their natural order, so ids are stable for a given
/// structure.
pub type VariableId = usize;

/// Zero-indexed row and column for a cell in the grid, where row 0 is the top row.
pub type GridCoord = (usize, usize);

/// Direction that a variable is facing. `Across` sorts before `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A word slot in the grid. Equality, hashing, and ordering all use the (row, col, direction,
/// length) tuple; the ordering is the final tie-break when choosing which variable to fill next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Variable {
        Variable { row, col, direction, length }
    }

    /// Generate the coords for each cell of this variable.
    pub fn cell_coords(&self) -> Vec<GridCoord> {
        (0..self.length).map(|cell_idx| {
            match self.direction {
                Direction::Across => (self.row, self.col + cell_idx),
                Direction::Down => (self.row + cell_idx, self.col),
            }
        }).collect()
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) {} : {}", self.row, self.col, self.direction, self.length)
    }
}

/// The shared cell between two variables, as an index into each of them. For the ordered pair
/// (x, y), `x_cell` indexes into x and `y_cell` indexes into y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    pub x_cell: usize,
    pub y_cell: usize,
}

impl Overlap {
    /// The same overlap seen from the other variable.
    pub fn flipped(&self) -> Overlap {
        Overlap { x_cell: self.y_cell, y_cell: self.x_cell }
    }
}

/// A struct recording a word assigned to a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub variable_id: VariableId,
    pub word_id: WordId,
}

/// Problems with a structure definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// The structure has no rows or no columns.
    Empty,

    /// A variable has zero length or runs off the edge of the grid.
    InvalidVariable(Variable),

    /// Two variables share more than one cell, so there's no single overlap between them.
    AmbiguousOverlap(Variable, Variable),
}

impl Display for StructureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StructureError::Empty => write!(f, "structure is empty"),
            StructureError::InvalidVariable(variable) => {
                write!(f, "variable {} doesn't fit in the grid", variable)
            }
            StructureError::AmbiguousOverlap(x, y) => {
                write!(f, "variables {} and {} share more than one cell", x, y)
            }
        }
    }
}

impl Error for StructureError {}

/// A struct representing the aspects of a grid that are static during solving: its cells, its
/// variables, and the overlaps between them.
pub struct GridConfig {
    pub width: usize,
    pub height: usize,

    /// `cells[row][col]` is true for open (fillable) cells.
    pub cells: Vec<Vec<bool>>,

    pub variables: Vec<Variable>,

    /// Square matrix indexed by `[x][y]`.
    overlaps: Vec<Vec<Option<Overlap>>>,

    /// For each variable, the ids of the variables it shares a cell with, in ascending order.
    neighbors: Vec<SmallVec<[VariableId; MAX_SLOT_LENGTH]>>,
}

impl Debug for GridConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridConfig")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("variables", &self.variables)
            .finish()
    }
}

impl GridConfig {
    /// Generate a GridConfig from a list of variables. Every cell covered by a variable is open;
    /// everything else is blocked.
    pub fn new(
        width: usize,
        height: usize,
        variables: Vec<Variable>,
    ) -> Result<GridConfig, StructureError> {
        if width == 0 || height == 0 {
            return Err(StructureError::Empty);
        }

        let mut cells = vec![vec![false; width]; height];
        for variable in &variables {
            let fits = variable.length > 0 && match variable.direction {
                Direction::Across => variable.row < height && variable.col + variable.length <= width,
                Direction::Down => variable.col < width && variable.row + variable.length <= height,
            };
            if !fits {
                return Err(StructureError::InvalidVariable(*variable));
            }

            for (row, col) in variable.cell_coords() {
                cells[row][col] = true;
            }
        }

        GridConfig::build(width, height, cells, variables)
    }

    /// Generate a GridConfig from a structure string, with `_` representing open cells and any
    /// other character representing blocks. Lines shorter than the longest line are padded with
    /// blocks. Every horizontal or vertical run of two or more open cells becomes a variable.
    pub fn from_structure_str(structure: &str) -> Result<GridConfig, StructureError> {
        let mut lines: Vec<Vec<char>> = structure.lines().map(|line| line.chars().collect()).collect();
        while lines.last().map(|line| line.is_empty()).unwrap_or(false) {
            lines.pop();
        }

        let height = lines.len();
        let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(StructureError::Empty);
        }

        let cells: Vec<Vec<bool>> = lines.iter().map(|line| {
            (0..width).map(|col| line.get(col) == Some(&'_')).collect()
        }).collect();

        // Returns (row, col, length) for each run of open cells along the rows of `cells`.
        fn find_runs(cells: &[Vec<bool>]) -> Vec<(usize, usize, usize)> {
            let mut result = vec![];

            for (row, line) in cells.iter().enumerate() {
                let mut run_start: Option<usize> = None;

                for col in 0..=line.len() {
                    let open = line.get(col).cloned().unwrap_or(false);
                    match (open, run_start) {
                        (true, None) => run_start = Some(col),
                        (false, Some(start)) => {
                            if col - start > 1 {
                                result.push((row, start, col - start));
                            }
                            run_start = None;
                        }
                        _ => {}
                    }
                }
            }

            result
        }

        let mut variables: Vec<Variable> = find_runs(&cells).into_iter()
            .map(|(row, col, length)| Variable::new(row, col, Direction::Across, length))
            .collect();

        let transposed_cells: Vec<Vec<bool>> =
            (0..width).map(|col| {
                (0..height).map(|row| {
                    cells[row][col]
                }).collect()
            }).collect();

        variables.extend(
            find_runs(&transposed_cells).into_iter()
                .map(|(col, row, length)| Variable::new(row, col, Direction::Down, length))
        );

        GridConfig::build(width, height, cells, variables)
    }

    fn build(
        width: usize,
        height: usize,
        cells: Vec<Vec<bool>>,
        mut variables: Vec<Variable>,
    ) -> Result<GridConfig, StructureError> {
        variables.sort();
        variables.dedup();

        if variables.len() > MAX_SLOT_COUNT {
            log::warn!(
                "Grid has {} variables, more than the expected maximum of {}",
                variables.len(),
                MAX_SLOT_COUNT,
            );
        }

        // Build a map from cell location to the variables covering it, which we can then use to
        // calculate overlaps.
        let mut variables_by_loc: HashMap<GridCoord, Vec<(VariableId, usize)>> = HashMap::new();
        for (variable_id, variable) in variables.iter().enumerate() {
            for (cell_idx, loc) in variable.cell_coords().into_iter().enumerate() {
                variables_by_loc.entry(loc).or_default().push((variable_id, cell_idx));
            }
        }

        let variable_count = variables.len();
        let mut overlaps: Vec<Vec<Option<Overlap>>> = vec![vec![None; variable_count]; variable_count];

        for sharing in variables_by_loc.values() {
            for &(x, x_cell) in sharing {
                for &(y, y_cell) in sharing {
                    if x == y {
                        continue;
                    }
                    if overlaps[x][y].is_some() {
                        return Err(StructureError::AmbiguousOverlap(variables[x], variables[y]));
                    }
                    overlaps[x][y] = Some(Overlap { x_cell, y_cell });
                }
            }
        }

        let neighbors = (0..variable_count).map(|x| {
            (0..variable_count).filter(|&y| overlaps[x][y].is_some()).collect()
        }).collect();

        Ok(GridConfig { width, height, cells, variables, overlaps, neighbors })
    }

    /// Asking about a variable that isn't part of this grid is a programming error, not a
    /// missing constraint.
    fn check_variable_id(&self, variable_id: VariableId) {
        assert!(
            variable_id < self.variables.len(),
            "Variable id {} is not part of this grid ({} variables)",
            variable_id,
            self.variables.len(),
        );
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn variable(&self, variable_id: VariableId) -> &Variable {
        self.check_variable_id(variable_id);
        &self.variables[variable_id]
    }

    /// Look up the id of a variable by its identity.
    pub fn variable_id(&self, variable: &Variable) -> Option<VariableId> {
        self.variables.binary_search(variable).ok()
    }

    /// The variables sharing a cell with the given one.
    pub fn neighbors(&self, variable_id: VariableId) -> &[VariableId] {
        self.check_variable_id(variable_id);
        &self.neighbors[variable_id]
    }

    /// The shared cell between `x` and `y`, if there is one.
    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.check_variable_id(x);
        self.check_variable_id(y);
        self.overlaps[x][y]
    }

    /// Every ordered pair of variables with a defined overlap.
    pub fn arcs(&self) -> impl Iterator<Item = (VariableId, VariableId)> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(x, neighbors)| {
            neighbors.iter().map(move |&y| (x, y))
        })
    }
}

/// Turn the given grid config and choices into a rendered string. Blocked cells are drawn as
/// `█` and open cells without a letter as spaces.
pub fn render_grid(config: &GridConfig, word_list: &WordList, choices: &[Choice]) -> String {
    let mut letters: Vec<Vec<Option<char>>> = vec![vec![None; config.width]; config.height];

    for &Choice { variable_id, word_id } in choices {
        let variable = config.variable(variable_id);
        let word = word_list.get(word_id);

        for (cell_idx, (row, col)) in variable.cell_coords().into_iter().enumerate() {
            letters[row][col] = word.chars.get(cell_idx).cloned();
        }
    }

    config.cells.iter().zip(&letters).map(|(cell_row, letter_row)| {
        cell_row.iter().zip(letter_row).map(|(&open, letter)| {
            if open { letter.unwrap_or(' ') } else { '█' }
        }).collect::<String>()
    }).collect::<Vec<_>>().join("\n")
}
