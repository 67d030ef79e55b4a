//! Card, hand, trick and scoreboard formatters for terminal display.
//!
//! Pure functions from engine types to strings. Suits are drawn with Unicode
//! symbols where the terminal is known to render them, and with the same
//! letters the card parser accepts otherwise.
//!
//! - **Unicode mode**: Uses ♠ ♥ ♦ ♣ symbols
//! - **ASCII mode**: Uses S H D C letters
//!
//! ## Example
//!
//! ```rust
//! use callbreak_engine::cards::{Card, Rank, Suit};
//! use callbreak_cli::formatters::format_card;
//!
//! let ten = Card::new(Suit::Hearts, Rank::Ten);
//! assert!(format_card(&ten) == "10♥" || format_card(&ten) == "10H");
//! ```

use callbreak_engine::cards::{Card, Suit};
use callbreak_engine::game::{CompletedTrick, RoundSummary, SeatView};
use callbreak_engine::player::Player;
use callbreak_engine::rules::Play;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
        .to_string()
    } else {
        suit.code().to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Cards in hand order, space separated; an empty hand shows as `-`.
pub fn format_hand(hand: &[Card]) -> String {
    if hand.is_empty() {
        return "-".to_string();
    }
    hand.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// Hand with 1-based positions, for picking a card by number.
///
/// ```rust
/// use callbreak_cli::formatters::format_numbered_hand;
///
/// let hand = vec!["AS".parse().unwrap(), "3C".parse().unwrap()];
/// let line = format_numbered_hand(&hand);
/// assert!(line.starts_with("1:A"));
/// assert!(line.contains(" 2:3"));
/// ```
pub fn format_numbered_hand(hand: &[Card]) -> String {
    hand.iter()
        .enumerate()
        .map(|(i, c)| format!("{}:{}", i + 1, format_card(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_play(play: &Play, names: &[&str]) -> String {
    let name = names.get(play.seat).copied().unwrap_or("?");
    format!("{} played {}", name, format_card(&play.card))
}

pub fn format_trick(plays: &[Play], names: &[&str]) -> String {
    if plays.is_empty() {
        return "(empty)".to_string();
    }
    plays
        .iter()
        .map(|p| {
            let name = names.get(p.seat).copied().unwrap_or("?");
            format!("{}: {}", name, format_card(&p.card))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_completed_trick(trick: &CompletedTrick, names: &[&str]) -> String {
    let winner = names.get(trick.winner).copied().unwrap_or("?");
    format!("{} -> {} wins", format_trick(&trick.plays, names), winner)
}

/// One line per seat: bids and tricks taken so far this round.
pub fn format_bids(seats: &[SeatView]) -> Vec<String> {
    seats
        .iter()
        .map(|s| {
            let bid = s.bid.map_or_else(|| "-".to_string(), |b| b.to_string());
            format!("{:<10} bid {:>2}  won {:>2}", s.name, bid, s.tricks_won)
        })
        .collect()
}

/// Round scoreboard rows: bid, tricks, round score and running total.
pub fn format_round_summary(summary: &RoundSummary, players: &[Player]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<10} {:>3} {:>5} {:>6} {:>6}",
        "Round", "Bid", "Won", "Score", "Total"
    )];
    for line in &summary.seats {
        let name = players.get(line.seat).map_or("?", Player::name);
        lines.push(format!(
            "{:<10} {:>3} {:>5} {:>6} {:>6}",
            name, line.bid, line.tricks_won, line.round_score, line.total_score
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use callbreak_engine::game::SeatResult;
    use callbreak_engine::scoring::Score;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_card_uses_digits_for_ten() {
        assert!(format_card(&card("10D")).starts_with("10"));
        assert!(format_card(&card("2C")).starts_with('2'));
        assert!(format_card(&card("QS")).starts_with('Q'));
    }

    #[test]
    fn test_format_card_ends_with_suit() {
        let s = format_card(&card("QD"));
        assert!(s == "Q♦" || s == "QD", "got {}", s);
    }

    #[test]
    fn test_format_hand_empty() {
        assert_eq!(format_hand(&[]), "-");
        assert_eq!(format_hand(&[card("AS"), card("2C")]).split(' ').count(), 2);
    }

    #[test]
    fn test_format_trick_names_each_seat() {
        let names = ["You", "Sita (AI)", "Ram (AI)", "Gita (AI)"];
        let plays = vec![Play::new(2, card("AH")), Play::new(3, card("5S"))];
        let s = format_trick(&plays, &names);
        assert!(s.starts_with("Ram (AI): A"));
        assert!(s.contains("Gita (AI): 5"));
        assert_eq!(format_trick(&[], &names), "(empty)");

        let done = CompletedTrick {
            plays,
            winner: 3,
        };
        assert!(format_completed_trick(&done, &names).ends_with("Gita (AI) wins"));
    }

    #[test]
    fn test_round_summary_has_header_and_one_row_per_seat() {
        let players: Vec<Player> = (0..4).map(Player::new).collect();
        let summary = RoundSummary {
            round: 1,
            seats: (0..4)
                .map(|seat| SeatResult {
                    seat,
                    bid: 3,
                    tricks_won: 4,
                    round_score: Score::from_tenths(31),
                    total_score: Score::from_tenths(31),
                })
                .collect(),
        };
        let lines = format_round_summary(&summary, &players);
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("You"));
        assert!(lines[1].contains("3.1"));
    }
}
