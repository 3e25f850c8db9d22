//! Drives whole sessions through the shell with scripted input.

use blackjack_cli::{GameConfig, Shell};

fn quiet_config(seed: u64) -> GameConfig {
    GameConfig::new()
        .typing_delay_ms(0)
        .clear_screen(false)
        .seed(seed)
        .build()
}

fn play(script: &str, config: GameConfig) -> String {
    let mut out = Vec::new();
    Shell::new(script.as_bytes(), &mut out, config)
        .run()
        .expect("session should end cleanly");
    String::from_utf8(out).unwrap()
}

const OUTCOMES: [&str; 4] = [
    "Dealer busts. Player wins.",
    "Player loses.",
    "Player wins.",
    "Tie.",
];

fn outcome_count(output: &str) -> usize {
    output
        .lines()
        .filter(|line| OUTCOMES.contains(&line.trim()))
        .count()
}

// Blank lines after the stand answer the dealer's pauses, any left over are
// rejected by the "New game?" question before the final "n".
const DEALER_PAUSES: &str = "\n\n\n\n\n\n\n\n\n\n\n\n";

#[test]
fn standing_player_plays_one_round() {
    let script = format!("\nn\n\nAnn\nx\ns\n{}n\n", DEALER_PAUSES);
    let output = play(&script, quiet_config(1));

    assert!(output.starts_with("Loading\n"));
    assert!(output.contains("Here are the rules of blackjack: http://en.wikipedia.org/wiki/Blackjack"));
    assert!(output.contains("Hi Ann! Your turn begins now..."));
    assert!(output.contains("Please respond with H to HIT or S to STAND."));
    assert!(output.contains("You stand!"));
    assert!(output.contains("Player turn finished."));
    assert!(output.contains("Dealer turn begins now..."));
    assert!(output.contains("Showing both hands..."));
    assert!(output.contains("Dealer\n"));
    assert!(output.contains("New game? Please respond with yes or no."));
    assert_eq!(outcome_count(&output), 1);
}

#[test]
fn experienced_player_skips_the_rules() {
    let script = format!("\nyes\n\ns\n{}no\n", DEALER_PAUSES);
    let output = play(&script, quiet_config(2));

    assert!(!output.contains("rules of blackjack"));
    // an empty name keeps the default
    assert!(output.contains("Hi Player!"));
    assert_eq!(outcome_count(&output), 1);
}

#[test]
fn hitting_player_eventually_busts_or_stops() {
    let hits = "h\n".repeat(12);
    let script = format!("\ny\nAnn\n{}{}n\n", hits, DEALER_PAUSES);
    let output = play(&script, quiet_config(3));

    assert!(output.contains("You hit!"));
    assert!(output.contains("Ann busts!"));
    assert_eq!(outcome_count(&output), 1);
}

#[test]
fn yes_starts_another_round() {
    let config = GameConfig::new()
        .typing_delay_ms(0)
        .clear_screen(false)
        .seed(4)
        .player_name("Sofia")
        .build();
    let round = format!("s\n{}", DEALER_PAUSES);
    let script = format!("\ny\n{}y\n{}n\n", round, round);
    let output = play(&script, config);

    assert_eq!(output.matches("Hi Sofia!").count(), 2);
    assert!(!output.contains("What is your name?"));
    assert_eq!(outcome_count(&output), 2);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let script = format!("\ny\nAnn\ns\n{}n\n", DEALER_PAUSES);
    assert_eq!(play(&script, quiet_config(8)), play(&script, quiet_config(8)));
}

#[test]
fn leaving_mid_round_is_not_an_error() {
    let output = play("\ny\nAnn\n", quiet_config(5));
    assert!(output.contains("Hi Ann!"));
    assert_eq!(outcome_count(&output), 0);
}
