//! CLI blackjack round example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{Card, Hand, Outcome, Phase, RoundState, Suit};

fn main() {
    println!("Blackjack round CLI example (type 'q' to quit)");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    loop {
        let mut round = match RoundState::start(seed) {
            Ok(round) => round,
            Err(err) => {
                println!("Deal error: {err:?}");
                return;
            }
        };
        seed = seed.wrapping_add(1);

        if round.phase() == Phase::Resolved {
            print_showdown(&round);
            if !prompt_again() {
                return;
            }
            continue;
        }

        while round.phase() == Phase::PlayerTurn {
            print_table(&round);

            let action = prompt_line("Action (h)it / (s)tand / (q)uit: ");
            let result = match action.as_str() {
                "h" | "hit" => round.hit().map(|card| {
                    println!("You draw {}.", format_card(card));
                }),
                "s" | "stand" => round.stand().map(|drawn| {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err:?}");
            }
        }

        print_showdown(&round);
        if !prompt_again() {
            return;
        }
    }
}

fn print_table(round: &RoundState) {
    println!(
        "Your hand: {} ({}{})",
        format_hand(round.player()),
        round.player().value(),
        if round.player().is_soft() { " soft" } else { "" },
    );
    if let Some(upcard) = round.dealer_upcard() {
        println!("Dealer shows: {} [?]", format_card(*upcard));
    }
}

fn print_showdown(round: &RoundState) {
    println!(
        "Your hand:   {} ({})",
        format_hand(round.player()),
        round.player().value(),
    );
    println!(
        "Dealer hand: {} ({})",
        format_hand(round.dealer()),
        round.dealer().value(),
    );

    match round.outcome() {
        Some(Outcome::PlayerBlackjack) => println!("Blackjack! You win."),
        Some(Outcome::PlayerWin) => println!("You win."),
        Some(Outcome::DealerWin) => println!("Dealer wins."),
        Some(Outcome::Push) => println!("Push."),
        None => println!("Round still in progress."),
    }
}

fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(|&card| format_card(card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    };
    let suit = match card.suit {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
        Suit::Spades => '♠',
    };
    format!("{rank}{suit}")
}

fn prompt_again() -> bool {
    matches!(prompt_line("Play again? (y/n): ").as_str(), "y" | "yes")
}

fn prompt_line(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return "q".to_string();
    }
    line.trim().to_lowercase()
}
