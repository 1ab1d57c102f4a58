//! Terminal command parsing
//!
//! Every submitted line is either a slash command or a guess. Commands
//! are slash-prefixed so they can never collide with a card name.

/// Action derived from one line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    /// Treat the line as a guess; passed through untrimmed, the
    /// evaluator owns normalization
    Guess(String),
    /// Start a new round (the page's "Start New Game" button)
    NewRound,
    /// Leave the game
    Quit,
}

/// Parses one input line into a player action
///
/// Commands are matched case-insensitively after trimming; anything that
/// is not a known command is a guess, including the empty line (the
/// evaluator answers those with its own feedback).
pub fn parse_action(line: &str) -> PlayerAction {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("/new") {
        PlayerAction::NewRound
    } else if trimmed.eq_ignore_ascii_case("/quit") || trimmed.eq_ignore_ascii_case("/exit") {
        PlayerAction::Quit
    } else {
        PlayerAction::Guess(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_commands_are_recognized() {
        assert_eq!(parse_action("/new"), PlayerAction::NewRound);
        assert_eq!(parse_action("/quit"), PlayerAction::Quit);
        assert_eq!(parse_action("/exit"), PlayerAction::Quit);
    }

    #[test]
    fn commands_are_case_insensitive_and_trimmed() {
        assert_eq!(parse_action("  /NEW "), PlayerAction::NewRound);
        assert_eq!(parse_action("/Quit"), PlayerAction::Quit);
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(
            parse_action("Hog Rider"),
            PlayerAction::Guess("Hog Rider".to_string())
        );
        // Unknown slash words are still guesses, not silent no-ops
        assert_eq!(
            parse_action("/help"),
            PlayerAction::Guess("/help".to_string())
        );
    }

    #[test]
    fn empty_line_is_an_empty_guess() {
        assert_eq!(parse_action(""), PlayerAction::Guess(String::new()));
        assert_eq!(parse_action("   "), PlayerAction::Guess("   ".to_string()));
    }
}
