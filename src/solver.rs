use crate::board::Board;
use crate::config::SolverConfig;
use crate::error::{BoardError, Result};
use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// One entry in a track's arena. `parent` indexes the node that generated it.
#[derive(Debug)]
struct Node {
    board: Board,
    moves: usize,
    priority: usize,
    parent: Option<usize>,
}

/// A single best-first search: an arena of every node created so far plus
/// the frontier of arena indices still waiting to be expanded.
///
/// The frontier is keyed on `(priority, index)`. Indices only grow, so nodes
/// of equal priority come out in the order they were pushed.
struct Track {
    nodes: Vec<Node>,
    frontier: BinaryHeap<Reverse<(usize, usize)>>,
    closed: Option<FxHashSet<Board>>,
}

impl Track {
    fn new(root: Board, config: &SolverConfig) -> Self {
        let mut track = Self {
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            closed: config.closed_set.then(FxHashSet::default),
        };
        track.push(root, 0, None);
        track
    }

    fn push(&mut self, board: Board, moves: usize, parent: Option<usize>) {
        let priority = moves + board.manhattan();
        let index = self.nodes.len();
        self.nodes.push(Node {
            board,
            moves,
            priority,
            parent,
        });
        self.frontier.push(Reverse((priority, index)));
    }

    /// Cheapest pending node. With a closed set, nodes whose board was
    /// already expanded are discarded on the way.
    fn pop(&mut self) -> Option<usize> {
        while let Some(Reverse((_, index))) = self.frontier.pop() {
            match &mut self.closed {
                Some(closed) => {
                    if closed.insert(self.nodes[index].board.clone()) {
                        return Some(index);
                    }
                }
                None => return Some(index),
            }
        }
        None
    }

    fn is_goal(&self, index: usize) -> bool {
        self.nodes[index].board.is_goal()
    }

    /// Pushes every successor of `index` except a step straight back to its parent.
    fn expand(&mut self, index: usize) {
        let node = &self.nodes[index];
        let moves = node.moves + 1;
        let previous = node.parent.map(|p| &self.nodes[p].board);

        let children: Vec<Board> = node
            .board
            .neighbors()
            .into_iter()
            .filter(|next| Some(next) != previous)
            .filter(|next| {
                self.closed
                    .as_ref()
                    .map_or(true, |closed| !closed.contains(next))
            })
            .collect();

        for child in children {
            self.push(child, moves, Some(index));
        }
    }

    fn path_to(&self, index: usize) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.nodes[index].moves + 1);
        let mut cursor = Some(index);
        while let Some(i) = cursor {
            let node = &self.nodes[i];
            path.push(node.board.clone());
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}

/// Counters collected while the solver ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Loop iterations; each one pops from both tracks.
    pub iterations: usize,
    /// Nodes created by the search over the initial board.
    pub primary_nodes: usize,
    /// Nodes created by the search over its twin.
    pub shadow_nodes: usize,
}

/// Optimal solver for a sliding puzzle.
///
/// Runs A* (priority = moves so far + manhattan distance) on the initial
/// board and on its [`twin`](Board::twin) in lockstep. Exactly one of the two
/// can reach the goal, so whichever track gets there first decides
/// solvability. All work happens in the constructor.
#[derive(Debug, Clone)]
pub struct Solver {
    solution: Vec<Board>,
    moves: Option<usize>,
    stats: SearchStats,
}

impl Solver {
    /// Solves `initial` with the default configuration.
    ///
    /// # Panics
    ///
    /// If `initial` is smaller than 2x2, since it has no twin.
    pub fn new(initial: Board) -> Self {
        Self::with_config(initial, SolverConfig::default())
    }

    /// Validates `rows` and solves them.
    pub fn try_new(rows: Vec<Vec<u32>>) -> Result<Self> {
        let board = Board::new(rows)?;
        if board.dimension() < 2 {
            return Err(BoardError::TooSmall {
                dimension: board.dimension(),
            });
        }
        Ok(Self::new(board))
    }

    pub fn with_config(initial: Board, config: SolverConfig) -> Self {
        debug!(
            "solving {}x{} board, manhattan {}, closed set {}",
            initial.dimension(),
            initial.dimension(),
            initial.manhattan(),
            config.closed_set
        );

        let twin = initial.twin();
        let mut primary = Track::new(initial, &config);
        let mut shadow = Track::new(twin, &config);
        let mut iterations = 0;

        let found = loop {
            iterations += 1;
            let min = primary.pop();
            let par_min = shadow.pop();

            if let Some(i) = min {
                trace!(
                    "iteration {}: primary priority {} moves {}",
                    iterations,
                    primary.nodes[i].priority,
                    primary.nodes[i].moves
                );
                if primary.is_goal(i) {
                    break Some(i);
                }
            }

            if let Some(i) = par_min {
                if shadow.is_goal(i) {
                    break None;
                }
            }

            // A frontier only drains when a closed set has exhausted that
            // track's half of the state space, so the other half holds the goal.
            match (min, par_min) {
                (None, _) => break None,
                (Some(i), Some(j)) => {
                    primary.expand(i);
                    shadow.expand(j);
                }
                (Some(i), None) => primary.expand(i),
            }
        };

        let stats = SearchStats {
            iterations,
            primary_nodes: primary.nodes.len(),
            shadow_nodes: shadow.nodes.len(),
        };

        let (solution, moves) = match found {
            Some(goal) => (primary.path_to(goal), Some(primary.nodes[goal].moves)),
            None => (Vec::new(), None),
        };

        debug!(
            "search finished after {} iterations: {} (primary nodes {}, shadow nodes {})",
            stats.iterations,
            moves.map_or_else(|| "unsolvable".to_string(), |m| format!("{} moves", m)),
            stats.primary_nodes,
            stats.shadow_nodes
        );

        Self {
            solution,
            moves,
            stats,
        }
    }

    pub fn is_solvable(&self) -> bool {
        self.moves.is_some()
    }

    /// Fewest moves that solve the initial board, `None` when it cannot be solved.
    pub fn moves(&self) -> Option<usize> {
        self.moves
    }

    /// Boards from the initial one to the goal; empty when unsolvable.
    pub fn solution(&self) -> &[Board] {
        &self.solution
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
