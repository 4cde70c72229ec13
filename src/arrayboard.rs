use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use crate::{
    board::{Board, Cell, Player},
    config::BoardConfig,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameState {
    fn win_for(player: Player) -> Self {
        match player {
            Player::One => GameState::PlayerOneWin,
            Player::Two => GameState::PlayerTwoWin,
        }
    }
}

/// A grid board of configurable size stored cell by cell
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayBoard {
    config: BoardConfig,
    cells: Vec<Cell>, // cells are stored left-to-right, bottom-to-top
    heights: Vec<usize>,
    /// The side to move next in a played game
    pub to_move: Player,
    /// One-indexed columns of the moves played through `play_checked`
    pub game: String,
    num_moves: usize,
    pub state: GameState,
}

impl ArrayBoard {
    /// An empty board of the default size
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            config,
            cells: vec![Cell::Empty; config.rows * config.cols],
            heights: vec![0; config.cols],
            to_move: Player::One,
            game: String::new(),
            num_moves: 0,
            state: GameState::Playing,
        }
    }

    /// Replays a string of one-indexed column digits, starting with player one
    pub fn from_str(moves: &str) -> Result<Self> {
        Self::from_str_with_config(moves, BoardConfig::default())
    }

    pub fn from_str_with_config(moves: &str, config: BoardConfig) -> Result<Self> {
        config.validate()?;
        let mut board = Self::with_config(config);

        for column_char in moves.chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    if let GameState::Playing = board.state {
                        let _ = board.play_checked(column as usize)?;
                    } else {
                        return Err(anyhow!(
                            "Invalid position, game is over before move '{}'",
                            column_char
                        ));
                    }
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// Plays a move for the side to move, checking it first
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > self.config.cols {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                self.config.cols
            ));
        }
        let column = column_one_indexed - 1;
        if !self.playable(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        self.place(self.to_move, column);
        self.to_move = self.to_move.other();
        self.game.push_str(&column_one_indexed.to_string());

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();
        let (width, height) = (self.config.cols, self.config.rows);

        let cols: String = (1..=width).map(|x| (x % 10).to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..height {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for (idx, cell) in self.cells.iter().enumerate() {
            let (pos_x, pos_y) = (
                origin_x + (idx % width) as u16,
                origin_y - (idx / width) as u16,
            );

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
        stdout
            .queue(MoveTo(origin_x + width as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }

    fn playable(&self, column: usize) -> bool {
        self.heights[column] < self.config.rows
    }

    // drops a token without checking the column, then updates the game state
    fn place(&mut self, player: Player, column: usize) {
        let row = self.heights[column];
        self.cells[column + self.config.cols * row] = player.cell();
        self.heights[column] += 1;
        self.num_moves += 1;

        self.state = if self.check_winning_move(player, row, column) {
            GameState::win_for(player)
        } else if self.num_moves == self.cells.len() {
            GameState::Draw
        } else {
            GameState::Playing
        };
    }

    // check for an alignment through the token just placed at (row, column)
    fn check_winning_move(&self, player: Player, row: usize, column: usize) -> bool {
        let token = player.cell();
        let (width, height) = (self.config.cols as isize, self.config.rows as isize);

        for &(d_row, d_col) in [(0isize, 1isize), (1, 0), (1, 1), (1, -1)].iter() {
            // the placed token counts once, then walk both ways along the line
            let mut run = 1;
            for &sign in [-1isize, 1].iter() {
                let mut r = row as isize + sign * d_row;
                let mut c = column as isize + sign * d_col;
                while r >= 0
                    && r < height
                    && c >= 0
                    && c < width
                    && self.cells[(c + width * r) as usize] == token
                {
                    run += 1;
                    r += sign * d_row;
                    c += sign * d_col;
                }
            }
            if run >= self.config.connect {
                return true;
            }
        }
        false
    }
}

impl Default for ArrayBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for ArrayBoard {
    fn rows(&self) -> usize {
        self.config.rows
    }

    fn cols(&self) -> usize {
        self.config.cols
    }

    fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[col + self.config.cols * row]
    }

    fn has_game_ended(&self) -> bool {
        self.state != GameState::Playing
    }

    fn legal_columns(&self) -> Vec<usize> {
        (0..self.config.cols).filter(|&c| self.playable(c)).collect()
    }

    fn apply_move(&self, player: Player, column: usize) -> Self {
        let mut next = self.clone();
        next.place(player, column);
        next.to_move = player.other();
        next
    }
}
