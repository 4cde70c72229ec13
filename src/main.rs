use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Stdin, Write};

use connect4_minimax::{
    arrayboard::{ArrayBoard, GameState},
    board::Player,
    config::SearchConfig,
    engine::Engine,
    DEPTH_LIMIT,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut board = ArrayBoard::new();
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let ai_players = (
        ask_yes_no(&stdin, "Is player 1 AI controlled? y/n: ")?,
        ask_yes_no(&stdin, "Is player 2 AI controlled? y/n: ")?,
    );

    let mut config = SearchConfig::default();
    if ai_players.0 || ai_players.1 {
        config = config.with_depth_limit(ask_depth(&stdin)?);
    }
    info!("starting game, AI players: {:?}, {:?}", ai_players, config);

    // game loop
    loop {
        board.display()?;

        match board.state {
            GameState::Playing => {
                let player = board.to_move;
                let ai_controlled = match player {
                    Player::One => ai_players.0,
                    Player::Two => ai_players.1,
                };
                let next_move =
                    // AI player
                    if ai_controlled {
                        let mut engine = Engine::with_config(player, config);

                        let spinner = ProgressBar::new_spinner();
                        spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
                        spinner.set_message("AI is thinking...");
                        spinner.enable_steady_tick(100);
                        let outcome = engine.analyse(&board);
                        spinner.finish_and_clear();

                        let best_move = match outcome.best_move {
                            Some(column) => column,
                            None => {
                                println!("AI found no move to play");
                                break;
                            }
                        };

                        match outcome.score.partial_cmp(&0.0) {
                            Some(Ordering::Greater) => println!(
                                "Player {} expects the advantage (score {}).",
                                player.number(),
                                outcome.score
                            ),
                            Some(Ordering::Less) => println!(
                                "Player {} expects the advantage (score {}).",
                                player.other().number(),
                                -outcome.score
                            ),
                            _ => println!("The position looks level."),
                        }
                        println!(
                            "Best move: {} ({} positions searched)",
                            best_move + 1,
                            outcome.node_count
                        );
                        best_move + 1

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush()?;
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = board.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    info!("game over after moves {}", board.game);
    Ok(())
}

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{}", question);
        stdout().flush()?;
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn ask_depth(stdin: &Stdin) -> Result<usize> {
    loop {
        let mut buffer = String::new();
        print!("AI search depth (default {}): ", DEPTH_LIMIT);
        stdout().flush()?;
        stdin.read_line(&mut buffer)?;
        let answer = buffer.trim();
        if answer.is_empty() {
            return Ok(DEPTH_LIMIT);
        }
        match answer.parse::<usize>() {
            Ok(depth) if depth > 0 => return Ok(depth),
            _ => println!("Depth must be a positive whole number"),
        }
    }
}
