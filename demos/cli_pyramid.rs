//! CLI pyramid game example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pyramid_game::{Card, Game, Suit, load_game, save_game};

const SAVE_FILE: &str = "pyramid-save.json";

fn main() {
    println!("Pyramid drinking game CLI example (type 'q' to quit, 's' to save)");

    let Some(mut game) = start_game() else {
        return;
    };

    loop {
        let Some(card) = game.peek_next_card() else {
            println!("The pyramid is empty. Game over!");
            break;
        };
        println!(
            "\nPyramid card ({}, {} left): {}",
            position_label(&game),
            game.cards_remaining(),
            format_card(&card)
        );

        let claimer = prompt_line("Claimer (enter for no claim): ");
        match claimer.as_str() {
            input if answer_is(input, &["q", "quit"]) => break,
            input if answer_is(input, &["s", "save"]) => {
                match save_game(&game, SAVE_FILE) {
                    Ok(()) => println!("Saved to {SAVE_FILE}."),
                    Err(err) => println!("Save error: {err}"),
                }
                continue;
            }
            "" => {
                if let Err(err) = game.play_turn(None, None, None, true) {
                    println!("Turn error: {err}");
                }
                continue;
            }
            _ => {}
        }

        let Some(claimer) = game.find_player(&claimer) else {
            println!("Unknown player.");
            continue;
        };

        let target = prompt_line("Target: ");
        let target = match game.find_player(&target) {
            Some(target) if target != claimer => target,
            _ => {
                println!("Invalid target.");
                continue;
            }
        };

        let Some(index) = prompt_usize("Which hand card (0-3): ") else {
            continue;
        };

        let answer = prompt_line("Does the target believe it? (y/n): ");
        let believes = !answer_is(&answer, &["n", "no"]);

        match game.play_turn(Some(claimer), Some(target), Some(index), believes) {
            Ok(turn) => {
                if let Some(outcome) = turn.outcome {
                    if let Some(shown) = outcome.shown {
                        println!("Claimer shows {}.", format_card(&shown));
                    }
                    println!("{outcome}");
                }
            }
            Err(err) => println!("Turn error: {err}"),
        }
    }

    print_standings(&game);
}

fn start_game() -> Option<Game> {
    if std::path::Path::new(SAVE_FILE).exists()
        && answer_is(&prompt_line("Resume saved game? (y/n): "), &["y", "yes"])
    {
        match load_game(SAVE_FILE) {
            Ok(game) => return Some(game),
            Err(err) => println!("Load error: {err}"),
        }
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    loop {
        let input = prompt_line("Players (comma separated): ");
        if answer_is(&input, &["q", "quit"]) {
            return None;
        }
        let names: Vec<&str> = input
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();

        match Game::new(names, seed) {
            Ok(game) => return Some(game),
            Err(err) => println!("Setup error: {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

/// Matches a yes/no or command answer regardless of case. Player names are
/// compared exactly elsewhere.
fn answer_is(input: &str, answers: &[&str]) -> bool {
    answers.iter().any(|answer| input.eq_ignore_ascii_case(answer))
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    match prompt_line(prompt).parse::<usize>() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("Invalid index.");
            None
        }
    }
}

fn position_label(game: &Game) -> String {
    let pos = game.pyramid().position();
    format!("row {}, card {}", pos.row + 1, pos.col + 1)
}

fn print_standings(game: &Game) {
    println!("\nDrinks taken:");
    for index in game.standings() {
        if let Some(player) = game.player(index) {
            println!("  {:<12} {}", player.name(), player.drinks_taken());
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };
    colorize(&format!("{}{suit}", card.symbol()), color_code)
}

#[cfg(test)]
mod tests {
    use super::answer_is;

    #[test]
    fn answers_ignore_case() {
        assert!(answer_is("N", &["n", "no"]));
        assert!(answer_is("Yes", &["y", "yes"]));
        assert!(answer_is("Q", &["q", "quit"]));
        assert!(!answer_is("Quinn", &["q", "quit"]));
        assert!(!answer_is("", &["n", "no"]));
    }
}
