//! Four-in-a-row CLI
//!
//! Interactive terminal driver for the engine: either side can be played
//! by a human or by the AI. Presentation only; all game logic lives in
//! the library.

use anyhow::{anyhow, Result};

use std::io::{stdin, stdout, Write};

use fourline::{outcome, AIEngine, Board, Cell, GameOutcome, Player, Pos, COLS, ROWS};

fn main() -> Result<()> {
    println!("Welcome to four-in-a-row (free placement)\n");

    let ai_players = (
        ask_yes_no("Is player X AI controlled? y/n: ")?,
        ask_yes_no("Is player O AI controlled? y/n: ")?,
    );

    // X searches shallower than O, matching the bundled handicap match
    let engine = AIEngine::with_depths(2, 4);
    let mut board = Board::new();

    loop {
        render(&board);

        match outcome(&board) {
            Some(GameOutcome::Winner(player)) => {
                println!("Player {} wins!", player.name());
                break;
            }
            Some(GameOutcome::Draw) => {
                println!("It's a draw!");
                break;
            }
            None => {}
        }

        let player = board.current_player();
        let is_ai = match player {
            Player::X => ai_players.0,
            Player::O => ai_players.1,
        };

        let next_move = if is_ai {
            println!("AI ({}) is thinking...", player.name());
            stdout().flush()?;

            let result = engine.get_move_with_stats(&mut board, player);
            match result.best_move {
                Some(pos) => {
                    println!("{} plays at ({}, {})", player.name(), pos.row, pos.col);
                    println!("Nodes visited: {}", result.nodes);
                    println!("Search time: {}ms", result.time_ms);
                    pos
                }
                None => {
                    println!("No moves left. It's a draw!");
                    break;
                }
            }
        } else {
            match read_move(&board) {
                Ok(pos) => pos,
                Err(err) => {
                    println!("{err}");
                    // try the move again
                    continue;
                }
            }
        };

        board.place(next_move);
    }

    Ok(())
}

/// Ask a yes/no question until the answer parses.
fn ask_yes_no(prompt: &str) -> Result<bool> {
    let stdin = stdin();
    loop {
        print!("{prompt}");
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Read a `row col` move from stdin and validate it against the board.
fn read_move(board: &Board) -> Result<Pos> {
    print!("Move input (row col) > ");
    stdout().flush()?;

    let mut input = String::new();
    stdin().read_line(&mut input)?;

    let mut parts = input.split_whitespace();
    let (Some(row), Some(col)) = (parts.next(), parts.next()) else {
        return Err(anyhow!(
            "Expected two numbers: row 0-{} and column 0-{}",
            ROWS - 1,
            COLS - 1
        ));
    };

    let row: usize = row
        .parse()
        .map_err(|_| anyhow!("Invalid row number: {row}"))?;
    let col: usize = col
        .parse()
        .map_err(|_| anyhow!("Invalid column number: {col}"))?;

    if row >= ROWS || col >= COLS {
        return Err(anyhow!(
            "Move ({row}, {col}) out of range: rows go 0-{}, columns 0-{}",
            ROWS - 1,
            COLS - 1
        ));
    }

    let pos = Pos::new(row as u8, col as u8);
    if !board.is_legal(pos) {
        return Err(anyhow!(
            "Illegal move: the cell must be empty and touch an existing mark"
        ));
    }

    Ok(pos)
}

/// Print the grid in `|X| |O|` row format with a coordinate footer.
fn render(board: &Board) {
    for row in 0..ROWS {
        let mut line = String::new();
        for col in 0..COLS {
            line.push('|');
            line.push(match board.cell(row, col) {
                Cell::X => 'X',
                Cell::O => 'O',
                Cell::Empty => ' ',
            });
        }
        line.push('|');
        println!("{line}");
    }
    println!("{}", "-".repeat(2 * COLS + 1));

    let footer: String = (0..COLS).map(|col| format!(" {col}")).collect();
    println!("{footer}");
}
