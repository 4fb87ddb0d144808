//! Hot-seat CLI tic-tac-toe example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardtac::{
    Card, CardView, Color, Game, GameOptions, Move, MoveOutcome, Outcome, SessionError, Snapshot,
    Transition,
};

fn main() {
    println!("Tic-tac-toe CLI example (0-8 to mark, 'd' to draw, 'h' for hints, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    loop {
        let player = game.current_player();
        let snapshot = game.snapshot();
        print_table(&game, &snapshot, player);

        let input = prompt_line(&format!("Player {player} > "));
        let mv = match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "h" | "hint" => {
                let cells: Vec<String> = game
                    .enumerate()
                    .iter()
                    .map(|mv| mv.args[0].to_string())
                    .collect();
                println!("Open cells: {}", cells.join(" "));
                continue;
            }
            "d" | "draw" => Move::draw(player),
            other => match other.parse::<usize>() {
                Ok(cell) => Move::click_cell(player, cell),
                Err(_) => {
                    println!("Enter a cell number, 'd', 'h' or 'q'.");
                    continue;
                }
            },
        };

        match game.submit(&mv) {
            Ok(MoveOutcome::Accepted(Transition::GameOver(outcome))) => {
                print_board(&game.snapshot());
                match outcome {
                    Outcome::Winner(winner) => println!("Player {winner} wins!"),
                    Outcome::Draw => println!("It's a draw."),
                }
                break;
            }
            Ok(MoveOutcome::Accepted(_)) => {}
            Ok(MoveOutcome::Rejected(err)) => println!("Invalid move: {err}"),
            Err(SessionError::DeckUnderflow(err)) => {
                println!("Session halted: {err}");
                break;
            }
            Err(err) => {
                println!("Session error: {err}");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game, snapshot: &Snapshot, player: u8) {
    println!();
    print_board(snapshot);
    println!("Deck: {} cards", snapshot.deck_size);

    for seat in 0..game.options().player_count() {
        let Ok(owner) = u8::try_from(seat) else {
            break;
        };
        let views = snapshot.hand_view(Some(player), owner).unwrap_or_default();
        let label = if owner == player { "Your hand" } else { "Opponent" };
        println!("{label} ({owner}): {}", format_views(&views));
    }
}

fn print_board(snapshot: &Snapshot) {
    println!("{}", snapshot.board());
}

fn format_views(views: &[CardView]) -> String {
    if views.is_empty() {
        return "(empty)".to_string();
    }
    views
        .iter()
        .map(|view| match view {
            CardView::Visible(card) => format_card(card),
            CardView::Hidden(_) => "??".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (name, color_code) = match card.color {
        Color::Yellow => ("Y", "33"),
        Color::Blue => ("B", "34"),
        Color::Red => ("R", "31"),
        Color::Green => ("G", "32"),
        Color::White => ("W", "37"),
    };
    colorize(&format!("{name}{}", card.rank), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
