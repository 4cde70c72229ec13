//! The board contract consumed by the search engine

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing side
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The token this player drops into the grid
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// One-based number used when talking to people
    pub fn number(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The player owning this cell, if any
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

/// A game position as seen by the search
///
/// Implementations must behave as values: [`apply_move`] hands back a fresh
/// position and leaves the receiver untouched, so the search can explore
/// sibling moves from the same parent.
///
/// [`apply_move`]: Board::apply_move
pub trait Board: Sized {
    /// Number of rows in the grid
    fn rows(&self) -> usize;

    /// Number of columns in the grid
    fn cols(&self) -> usize;

    /// Occupant of a cell, row 0 being the bottom of the grid
    fn cell(&self, row: usize, col: usize) -> Cell;

    /// True once either player has won or the grid is full
    fn has_game_ended(&self) -> bool;

    /// Columns that can still take a token, in a stable order
    ///
    /// The order decides which move wins a tie in the search.
    fn legal_columns(&self) -> Vec<usize>;

    /// Drops a token for `player` into `column`, returning the new position
    fn apply_move(&self, player: Player, column: usize) -> Self;
}
