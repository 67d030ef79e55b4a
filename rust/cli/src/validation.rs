//! Input parsing and validation for interactive commands.
//!
//! Parsing only checks the shape of what was typed. Whether a bid or card is
//! allowed right now is the engine's call; its rejection is shown and the
//! player is asked again.

use callbreak_engine::cards::Card;
use callbreak_engine::rules::{MAX_BID, MIN_BID};

/// Result type for parsing one line of user input.
#[derive(Debug, PartialEq)]
pub enum ParseResult<T> {
    /// Well-formed value parsed from input
    Value(T),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}

/// Parse a bid between 1 and 8, or a quit command.
///
/// # Example
///
/// ```rust
/// # use callbreak_cli::validation::{parse_bid_input, ParseResult};
/// assert_eq!(parse_bid_input("4"), ParseResult::Value(4));
/// assert_eq!(parse_bid_input("q"), ParseResult::Quit);
/// assert!(matches!(parse_bid_input("9"), ParseResult::Invalid(_)));
/// ```
pub fn parse_bid_input(input: &str) -> ParseResult<u8> {
    let input = input.trim();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if is_quit(input) {
        return ParseResult::Quit;
    }
    match input.parse::<u8>() {
        Ok(bid) if (MIN_BID..=MAX_BID).contains(&bid) => ParseResult::Value(bid),
        Ok(_) | Err(_) => ParseResult::Invalid(format!(
            "Bid must be a number from {} to {}",
            MIN_BID, MAX_BID
        )),
    }
}

/// Parse a card choice against the player's hand.
///
/// Accepts the card text (`AS`, `10h`, `Td`), the same with a suit symbol
/// (`A♠`), or the card's 1-based position in `hand`.
///
/// # Example
///
/// ```rust
/// # use callbreak_cli::validation::{parse_card_input, ParseResult};
/// use callbreak_engine::cards::Card;
///
/// let hand: Vec<Card> = vec!["AS".parse().unwrap(), "10H".parse().unwrap()];
/// assert_eq!(parse_card_input("10h", &hand), ParseResult::Value(hand[1]));
/// assert_eq!(parse_card_input("1", &hand), ParseResult::Value(hand[0]));
/// assert_eq!(parse_card_input("A♠", &hand), ParseResult::Value(hand[0]));
/// ```
pub fn parse_card_input(input: &str, hand: &[Card]) -> ParseResult<Card> {
    let input = input.trim();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if is_quit(input) {
        return ParseResult::Quit;
    }

    if input.chars().all(|c| c.is_ascii_digit()) {
        return match input.parse::<usize>() {
            Ok(n) if (1..=hand.len()).contains(&n) => ParseResult::Value(hand[n - 1]),
            _ => ParseResult::Invalid(format!(
                "Card number must be from 1 to {}",
                hand.len()
            )),
        };
    }

    let text: String = input
        .chars()
        .map(|c| match c {
            '♠' => 'S',
            '♥' => 'H',
            '♦' => 'D',
            '♣' => 'C',
            other => other,
        })
        .collect();
    match text.parse::<Card>() {
        Ok(card) => ParseResult::Value(card),
        Err(e) => ParseResult::Invalid(format!("{}, or a card number", e)),
    }
}
