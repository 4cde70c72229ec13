//! An agent choosing Connect 4 moves with depth-limited game tree search

use log::{debug, trace};

use crate::{
    board::{Board, Player},
    config::SearchConfig,
    evaluation::evaluate,
};

/// Which side of the minimax tree a node belongs to
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Role {
    /// The agent is to move and picks the highest value
    Maximising,
    /// The opponent is to move and picks the lowest value
    Minimising,
}

impl Role {
    pub fn other(self) -> Self {
        match self {
            Role::Maximising => Role::Minimising,
            Role::Minimising => Role::Maximising,
        }
    }

    /// Value a node starts from before any child is searched
    fn worst(self) -> f64 {
        match self {
            Role::Maximising => f64::NEG_INFINITY,
            Role::Minimising => f64::INFINITY,
        }
    }

    /// Strict comparison, so the first of several equal children is kept
    fn improves(self, value: f64, best: f64) -> bool {
        match self {
            Role::Maximising => value > best,
            Role::Minimising => value < best,
        }
    }

    /// The player whose token is dropped at a node of this role
    fn mover(self, agent: Player) -> Player {
        match self {
            Role::Maximising => agent,
            Role::Minimising => agent.other(),
        }
    }
}

/// Result of a single decision
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Minimax value of the position from the agent's point of view
    pub score: f64,
    /// Column to play, `None` if the position offered no move to search
    pub best_move: Option<usize>,
    /// Number of positions visited
    pub node_count: usize,
}

/// An agent for one side of a Connect 4 game
///
/// # Notes
/// The agent runs minimax with alpha-beta pruning to a fixed depth and scores
/// the positions it reaches with [`evaluate`]. Nothing is kept between
/// decisions; every call searches the given position from scratch.
#[derive(Clone, Debug)]
pub struct Engine {
    agent: Player,
    config: SearchConfig,

    /// The number of nodes searched by the last decision (for diagnostics only)
    pub node_count: usize,
    best_move: Option<usize>,
}

impl Engine {
    /// Creates a new `Engine` playing as `agent` with the default settings
    pub fn new(agent: Player) -> Self {
        Self::with_config(agent, SearchConfig::default())
    }

    /// Creates a new `Engine` playing as `agent` with the given settings
    pub fn with_config(agent: Player, config: SearchConfig) -> Self {
        Self {
            agent,
            config,
            node_count: 0,
            best_move: None,
        }
    }

    pub fn agent(&self) -> Player {
        self.agent
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Picks the column to play in `board`
    ///
    /// Returns `None` only when there is nothing to choose, i.e. the game has
    /// already ended or the depth limit is zero. The board is not modified.
    pub fn choose_move<B: Board>(&mut self, board: &B) -> Option<usize> {
        self.analyse(board).best_move
    }

    /// Picks the column to play in `board`, also reporting its value and the
    /// work done to find it
    pub fn analyse<B: Board>(&mut self, board: &B) -> SearchOutcome {
        self.best_move = None;
        self.node_count = 0;

        let score = self.search(
            board,
            Role::Maximising,
            f64::NEG_INFINITY,
            f64::INFINITY,
            0,
        );

        debug!(
            "player {} chose {:?} (score {}, {} nodes, depth {})",
            self.agent.number(),
            self.best_move,
            score,
            self.node_count,
            self.config.depth_limit
        );

        SearchOutcome {
            score,
            best_move: self.best_move,
            node_count: self.node_count,
        }
    }

    /// Static score of `board` from this agent's point of view
    pub fn evaluate<B: Board>(&self, board: &B) -> i32 {
        evaluate(board, self.agent, &self.config.payoffs)
    }

    /// Performs game tree search
    ///
    /// Returns the value of `board` for the agent, exact whenever it lies
    /// strictly between `alpha` and `beta`. At the root of a maximising
    /// search the best column is recorded in `self.best_move`.
    fn search<B: Board>(
        &mut self,
        board: &B,
        role: Role,
        mut alpha: f64,
        mut beta: f64,
        depth: usize,
    ) -> f64 {
        self.node_count += 1;

        if board.has_game_ended() || depth >= self.config.depth_limit {
            return self.evaluate(board) as f64;
        }

        let mover = role.mover(self.agent);
        let mut best = role.worst();
        for column in board.legal_columns() {
            let child = board.apply_move(mover, column);
            let value = self.search(&child, role.other(), alpha, beta, depth + 1);

            if depth == 0 && role == Role::Maximising {
                trace!("column {} scores {}", column, value);
            }

            if role.improves(value, best) {
                best = value;
                if depth == 0 && role == Role::Maximising {
                    self.best_move = Some(column);
                }
            }

            match role {
                Role::Maximising => {
                    alpha = alpha.max(best);
                    // the opponent already has a better option elsewhere
                    if self.config.pruning && best >= beta {
                        break;
                    }
                }
                Role::Minimising => {
                    beta = beta.min(best);
                    // the agent already has a better option elsewhere
                    if self.config.pruning && alpha >= best {
                        break;
                    }
                }
            }
        }
        best
    }
}
