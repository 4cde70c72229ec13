//! Static scoring of positions at the search horizon

use crate::board::{Board, Player};

/// Number of cells inspected from each starting cell
pub const RUN_WINDOW: usize = 4;

// (row, column) steps: horizontal, vertical, and the two diagonals
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Score awarded to a run of a given length
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Payoffs {
    pub four: i32,
    pub three: i32,
    pub two: i32,
}

impl Payoffs {
    pub fn for_run(&self, length: usize) -> i32 {
        match length {
            4 => self.four,
            3 => self.three,
            2 => self.two,
            _ => 0,
        }
    }
}

impl Default for Payoffs {
    fn default() -> Self {
        Self {
            four: 10000,
            three: 100,
            two: 10,
        }
    }
}

/// Scores a position from `agent`'s point of view
///
/// Every occupied cell is treated as the start of a run in each of the four
/// directions, and each run is paid out on its own. Runs are not
/// deduplicated: a four-in-a-row also pays for the three and the two that
/// start inside it. Agent runs add to the score, opponent runs subtract.
pub fn evaluate<B: Board>(board: &B, agent: Player, payoffs: &Payoffs) -> i32 {
    let mut score = 0;
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let owner = match board.cell(row, col).owner() {
                Some(owner) => owner,
                None => continue,
            };
            let sign = if owner == agent { 1 } else { -1 };
            for &(d_row, d_col) in DIRECTIONS.iter() {
                score += sign * payoffs.for_run(run_length(board, row, col, d_row, d_col));
            }
        }
    }
    score
}

/// Length of the run of identical tokens starting at (`row`, `col`),
/// capped at [`RUN_WINDOW`]
pub fn run_length<B: Board>(board: &B, row: usize, col: usize, d_row: isize, d_col: isize) -> usize {
    let token = board.cell(row, col);
    let mut length = 1;
    for step in 1..RUN_WINDOW as isize {
        let r = row as isize + step * d_row;
        let c = col as isize + step * d_col;
        if r < 0
            || r >= board.rows() as isize
            || c < 0
            || c >= board.cols() as isize
            || board.cell(r as usize, c as usize) != token
        {
            break;
        }
        length += 1;
    }
    length
}
