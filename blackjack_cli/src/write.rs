use crate::game::{Event, HandView};
use blackjack_lib::Card;
use std::io::Write;

/// Number of text lines a single card takes up.
pub const CARD_HEIGHT: usize = 9;

const TOP: &str = "┌─────────┐";
const BOTTOM: &str = "└─────────┘";
const BLANK: &str = "│         │";

/// Draws `card` as a block of text. A hidden card shows its back instead of its face.
pub fn build_card(card: &Card, hidden: bool) -> [String; CARD_HEIGHT] {
    if hidden {
        return [
            TOP.to_string(),
            "│  * * *  │".to_string(),
            "│ *     * │".to_string(),
            "│       * │".to_string(),
            "│     *   │".to_string(),
            "│    *    │".to_string(),
            BLANK.to_string(),
            "│    *    │".to_string(),
            BOTTOM.to_string(),
        ];
    }
    [
        TOP.to_string(),
        format!("│ {:<2}      │", card.rank),
        BLANK.to_string(),
        BLANK.to_string(),
        format!("│    {}    │", card.suit.symbol()),
        BLANK.to_string(),
        BLANK.to_string(),
        format!("│      {:>2} │", card.rank),
        BOTTOM.to_string(),
    ]
}

/// Lays out a hand side by side, wrapping after `cards_per_row` cards.
/// With `hide_hole_cards` only the first card of the hand is drawn face up.
pub fn render_hand(cards: &[Card], hide_hole_cards: bool, cards_per_row: usize) -> Vec<String> {
    let built = cards
        .iter()
        .enumerate()
        .map(|(i, card)| build_card(card, hide_hole_cards && i > 0))
        .collect::<Vec<_>>();

    let mut lines = vec![];
    for row in built.chunks(cards_per_row.max(1)) {
        for line in 0..CARD_HEIGHT {
            lines.push(row.iter().map(|card| card[line].as_str()).collect::<String>());
        }
    }
    lines
}

fn render_view(view: &HandView, cards_per_row: usize) -> Vec<String> {
    let mut lines = render_hand(&view.cards, view.hide_hole_cards, cards_per_row);
    lines.push(view.score.to_string());
    lines
}

/// Turns a single game event into the lines printed for it.
pub fn render_event(event: &Event, cards_per_row: usize) -> Vec<String> {
    match event {
        Event::Hand(view) => render_view(view, cards_per_row),
        Event::Hit => vec!["\n\nYou hit!".to_string()],
        Event::Stood => vec!["\n\nYou stand!".to_string()],
        Event::Bust { name } => vec![format!("{} busts!", name)],
        Event::DeckExhausted => vec!["The deck is out of cards.".to_string()],
        Event::PlayerTurnFinished => vec!["\n\nPlayer turn finished.\n\n".to_string()],
        Event::DealerTurnBegins => vec!["\n\nDealer turn begins now...\n\n".to_string()],
        Event::DealerDraws => vec!["Dealer draws a card.".to_string()],
        Event::Showdown { player, dealer } => {
            let mut lines = vec!["\n\nShowing both hands...\n\n".to_string()];
            lines.push(player.name.clone());
            lines.extend(render_view(player, cards_per_row));
            lines.push(dealer.name.clone());
            lines.extend(render_view(dealer, cards_per_row));
            lines
        }
        Event::Outcome(outcome) => vec![outcome.to_string()],
    }
}

/// Writes every event in `events` to `writer`, one rendered line at a time.
pub fn write_events<'a, I: IntoIterator<Item = &'a Event>>(
    events: I,
    cards_per_row: usize,
    mut writer: impl Write,
) -> std::io::Result<()> {
    for event in events {
        for line in render_event(event, cards_per_row) {
            writeln!(writer, "{}", line)?;
        }
    }
    writer.flush()
}
