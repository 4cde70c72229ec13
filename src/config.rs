//! Tunables for the search and the board

use anyhow::{anyhow, Result};

use crate::{evaluation::Payoffs, CONNECT, DEPTH_LIMIT, HEIGHT, WIDTH};

/// Settings for one [`Engine`](crate::engine::Engine)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Plies searched before positions are scored statically
    pub depth_limit: usize,
    /// Weights given to runs by the static evaluator
    pub payoffs: Payoffs,
    /// Whether alpha-beta cutoffs are taken. Disabling this gives plain
    /// minimax, which returns the same results while visiting more nodes
    pub pruning: bool,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            depth_limit: DEPTH_LIMIT,
            payoffs: Payoffs::default(),
            pruning: true,
        }
    }

    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_payoffs(mut self, payoffs: Payoffs) -> Self {
        self.payoffs = payoffs;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Dimensions and win condition of an [`ArrayBoard`](crate::arrayboard::ArrayBoard)
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Number of aligned tokens needed to win
    pub connect: usize,
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize, connect: usize) -> Result<Self> {
        let config = Self {
            rows,
            cols,
            connect,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(anyhow!(
                "Invalid board size {}x{}, both dimensions must be at least 1",
                self.cols,
                self.rows
            ));
        }
        if self.connect < 2 {
            return Err(anyhow!(
                "Invalid connect length {}, must be at least 2",
                self.connect
            ));
        }
        if self.connect > self.rows && self.connect > self.cols {
            return Err(anyhow!(
                "Invalid connect length {}, cannot fit on a {}x{} board",
                self.connect,
                self.cols,
                self.rows
            ));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: HEIGHT,
            cols: WIDTH,
            connect: CONNECT,
        }
    }
}
