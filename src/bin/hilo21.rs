//! Interactive CLI front end for the blackjack engine.
//!
//! This binary is a pure display layer: it reads the engine's projections and
//! invokes the action surface, nothing more.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use hilo21::{Card, DealerHand, GameRound, Hand, RoundState, Suit};

fn main() {
    println!("Blackjack with a Hi-Lo count readout (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = GameRound::new(seed);

    loop {
        if game.start_new_game() {
            println!("Deck shuffled!");
        }

        let Some(bet) = prompt_usize("Bet amount (0 to quit): ") else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        if let Err(err) = game.deal_initial_cards() {
            println!("Deal error: {err}");
            continue;
        }

        while game.state() == RoundState::PlayerTurn {
            print_table(&game);
            println!("{}", format_actions(&game));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double().map(|_| ()),
                "p" | "split" => game.split(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        print_table(&game);
        print_summary(&game);
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

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &GameRound) {
    let shoe = game.shoe();
    println!(
        "\nShoe: {} cards ({:.0}%) | running count {:+} | true count {:+.1}",
        shoe.remaining(),
        shoe.remaining_percentage(),
        shoe.running_count(),
        shoe.true_count()
    );

    let dealer = game.dealer_hand();
    println!(
        "Dealer: {} (value {})",
        format_dealer(dealer),
        dealer.visible_value()
    );

    let hands = game.player_hands();
    for (index, hand) in hands.hands().iter().enumerate() {
        let marker = if index == hands.active_index() && !game.round_over() {
            "*"
        } else {
            " "
        };
        println!(
            "{} Hand {}: {} | value {} | bet {} | {:?}",
            marker,
            index + 1,
            format_hand(hand),
            hand.value(),
            hand.wager(),
            hand.status()
        );
    }
}

fn print_summary(game: &GameRound) {
    let Some(result) = game.last_round() else {
        return;
    };

    let labels: Vec<String> = result
        .hands
        .iter()
        .map(|hand| format!("Hand {}: {}", hand.hand_index + 1, hand.outcome))
        .collect();
    println!("\nResult: {}", labels.join(" | "));
    println!("Payout: {:+}", result.total_payout);

    let stats = game.stats();
    println!(
        "Session: {} won / {} lost / {} tied | bankroll {:+}",
        stats.player_wins, stats.dealer_wins, stats.ties, stats.bankroll
    );
}

fn format_actions(game: &GameRound) -> String {
    let mut parts = vec![
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", game.can_double()),
        format_action("split", "p", game.can_split()),
    ];
    parts.push(colorize("[q]quit", "90"));
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    if !dealer.is_hole_revealed() {
        parts.push("??".to_string());
    }
    parts.extend(dealer.visible_cards().iter().map(format_card));
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = card.rank_label();
    format!("{}{}", colorize(rank, color_code), colorize(suit, color_code))
}
