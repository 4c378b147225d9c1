//! An implementation of the AC-3 algorithm for crossword grids. A grid is arc-consistent when,
//! for every pair of variables sharing a cell, each word left in one variable's domain has at
//! least one word in the other's domain with the same letter in the shared cell.
//!
//! We keep revising arcs until nothing else can be removed or some domain runs dry. Success
//! doesn't mean a fill exists; it just means search can start from smaller domains.

use bit_set::BitSet;
use log::debug;
use std::collections::VecDeque;

use crate::domains::DomainStore;
use crate::grid_config::VariableId;

/// An ordered pair (x, y), meaning "x must stay consistent with y".
pub type Arc = (VariableId, VariableId);

/// Result from a successful call to `ac3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcConsistencySuccess {
    /// How many arcs were revised.
    pub revisions: usize,

    /// How many words were removed across all domains.
    pub removals: usize,
}

/// Result from a failed call to `ac3`, naming the variable whose domain was wiped out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcConsistencyFailure {
    pub variable_id: VariableId,
}

pub type ArcConsistencyResult = Result<ArcConsistencySuccess, ArcConsistencyFailure>;

/// Work queue of arcs waiting to be revised. An arc that's already waiting isn't added again.
#[derive(Debug)]
struct ArcQueue {
    queue: VecDeque<Arc>,
    queued: BitSet,
    variable_count: usize,
}

impl ArcQueue {
    fn new(variable_count: usize) -> ArcQueue {
        ArcQueue {
            queue: VecDeque::new(),
            queued: BitSet::with_capacity(variable_count * variable_count),
            variable_count,
        }
    }

    fn with_initial_arcs<Arcs>(variable_count: usize, arcs: Arcs) -> ArcQueue
        where
            Arcs: IntoIterator<Item=Arc>
    {
        let mut queue = ArcQueue::new(variable_count);
        for (x, y) in arcs {
            queue.enqueue(x, y);
        }
        queue
    }

    fn enqueue(&mut self, x: VariableId, y: VariableId) {
        if self.queued.insert(x * self.variable_count + y) {
            self.queue.push_back((x, y));
        }
    }

    fn pop_front(&mut self) -> Option<Arc> {
        let (x, y) = self.queue.pop_front()?;
        self.queued.remove(x * self.variable_count + y);
        Some((x, y))
    }
}

/// Shrink the domains in `domains` until they're arc-consistent. If `arcs` is None, we begin with
/// every arc in the grid; otherwise only with the given ones (plus whatever they cause to be
/// requeued).
///
/// Removals are made through the store, so a caller can undo them with a checkpoint. On failure
/// the removals made up to that point are left in place.
pub fn ac3(domains: &mut DomainStore, arcs: Option<&[Arc]>) -> ArcConsistencyResult {
    let config = domains.config();
    let variable_count = config.variable_count();

    let mut queue = match arcs {
        Some(arcs) => ArcQueue::with_initial_arcs(variable_count, arcs.iter().cloned()),
        None => ArcQueue::with_initial_arcs(variable_count, config.arcs()),
    };

    let removals_before = domains.removal_count();
    let mut revisions = 0;

    while let Some((x, y)) = queue.pop_front() {
        revisions += 1;

        if !domains.revise(x, y) {
            continue;
        }

        if domains.is_empty(x) {
            debug!(
                "Arc consistency wiped out {} after {} revisions",
                config.variable(x),
                revisions,
            );
            return Err(ArcConsistencyFailure { variable_id: x });
        }

        // Anything crossing x may have just lost its support in x.
        for &z in config.neighbors(x) {
            if z != y {
                queue.enqueue(z, x);
            }
        }
    }

    let removals = domains.removal_count() - removals_before;
    debug!("Arc consistency reached after {} revisions, {} removals", revisions, removals);

    Ok(ArcConsistencySuccess { revisions, removals })
}
