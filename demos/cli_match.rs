//! CLI matching game example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use colormatch::{
    Card, Clock, Color, Command, ComputerScheduler, Game, GameOptions, GameState, MemoryStore,
    Snapshot, SystemClock,
};
use flexi_logger::Logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str("warn")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    println!("Color match CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut scheduler = ComputerScheduler::from_options(&options);
    let mut game = Game::new(options, seed)?;
    let mut best = MemoryStore::new();

    let mut view = game.start_round();

    loop {
        while game.state() == GameState::ComputerTurn {
            thread::sleep(scheduler.delay());
            if let Some(turn) = scheduler.poll(&mut game) {
                match (turn.drawn, turn.played) {
                    (Some(_), Some(card)) => {
                        println!("Computer draws and plays {}.", format_card(&card));
                    }
                    (Some(_), None) => println!("Computer draws and passes."),
                    (None, Some(card)) => println!("Computer plays {}.", format_card(&card)),
                    (None, None) => println!("Computer passes."),
                }
                view = game.snapshot();
            }
        }

        if view.state.is_terminal() {
            report_round(&game, &mut best);
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    scheduler.cancel();
                    view = game.start_round();
                    continue;
                }
                _ => break,
            }
        }

        print_table(&view);
        let input = prompt_line("Card number, 'd' to draw, 'r' to restart: ");
        let command = match input.as_str() {
            "q" | "quit" => break,
            "d" | "draw" => Command::Draw,
            "r" | "restart" => Command::Restart,
            other => match other.parse::<usize>() {
                Ok(number) if number > 0 => Command::PlayCard(number - 1),
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            },
        };

        match game.dispatch(command) {
            Ok(next) => {
                if next.state == GameState::ComputerTurn {
                    scheduler.arm(game.clock().now());
                } else {
                    scheduler.cancel();
                }
                view = next;
            }
            Err(err) => println!("Can't do that: {err}"),
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn report_round(game: &Game<SystemClock>, best: &mut MemoryStore) {
    let elapsed = game.elapsed_secs();
    match game.state() {
        GameState::PlayerWon => println!("You win! Time: {elapsed:.1}s"),
        GameState::ComputerWon => println!("Computer wins. Time: {elapsed:.1}s"),
        _ => return,
    }

    if let Some(result) = game.record_best(best) {
        if result.improved() {
            println!("New best time!");
        } else {
            println!("Best time: {:.1}s", result.best().as_secs_f64());
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
    input.trim().to_lowercase()
}

fn print_table(view: &Snapshot) {
    println!();
    println!(
        "Deck: {} | Computer holds {} card(s) | {:.1}s",
        view.deck_remaining,
        view.computer_cards,
        view.elapsed.as_secs_f64()
    );
    if let Some(top) = view.top {
        println!("Top card: {}", format_card(&top));
    }

    let hand = view
        .player_hand
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}:{}", index + 1, format_card(card)))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Your hand: {hand}");
}

fn format_card(card: &Card) -> String {
    let color_code = match card.color {
        Color::Red => "31",
        Color::Yellow => "33",
        Color::Green => "32",
        Color::Blue => "34",
    };
    colorize(&format!("{}{}", card.color.name(), card.value), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
