// src/tui/mod.rs  -  Flash-card rendering (ratatui widgets → text lines)
#[cfg(feature = "tui")]
mod inner;
#[cfg(feature = "tui")]
pub use inner::flash_card;

pub const CARD_WIDTH:  u16 = 15;
pub const CARD_HEIGHT: u16 = 5;

/// Plain box when built without ratatui.
#[cfg(not(feature = "tui"))]
pub fn flash_card(ch: char, title: &str) -> Vec<String> {
    let inner = CARD_WIDTH as usize - 2;
    let mut top: String = format!("+{title:-^inner$}+");
    if top.chars().count() != CARD_WIDTH as usize {
        top = format!("+{}+", "-".repeat(inner));
    }
    let blank = format!("|{}|", " ".repeat(inner));
    vec![
        top,
        blank.clone(),
        format!("|{:^inner$}|", ch),
        blank,
        format!("+{}+", "-".repeat(inner)),
    ]
}
