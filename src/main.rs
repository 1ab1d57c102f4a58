//! Terminal front end for pixguess
//!
//! Reads guesses line by line from stdin and drives the game controller.
//! The console surface has no real image loader, so each round's
//! asset-ready confirmation fires immediately after the round starts.

use std::io::{self, BufRead, Write};

use pixguess::input::{PlayerAction, parse_action};
use pixguess::{Catalog, ConsoleSurface, GameController, RevealConfig, RoundPhase};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("pixguess: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = RevealConfig::default();
    let surface = ConsoleSurface::new(config);
    let mut game = GameController::new(Catalog::builtin(), config, surface);

    println!("=== pixguess ===");
    println!("Name the card hidden behind the pixels.");
    println!("Type a guess and press Enter. /new starts over, /quit leaves.");
    println!();

    start_round(&mut game)?;
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_action(&line) {
            PlayerAction::Quit => break,
            PlayerAction::NewRound => start_round(&mut game)?,
            PlayerAction::Guess(text) => {
                game.submit_guess(&text);
                if matches!(game.phase(), RoundPhase::Won | RoundPhase::Lost) {
                    println!("(/new for another card, /quit to leave)");
                }
            }
        }
        prompt()?;
    }

    println!("Thanks for playing!");
    Ok(())
}

fn start_round<S: pixguess::PresentationSurface>(
    game: &mut GameController<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    let token = game.start_round()?;
    // No asynchronous loader on a terminal: the asset is ready at once
    let _ = game.asset_ready(token);
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
