// src/tui/inner.rs  -  ratatui flash card
use super::{CARD_HEIGHT, CARD_WIDTH};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render a bordered card with `ch` in the middle, one string per row.
pub fn flash_card(ch: char, title: &str) -> Vec<String> {
    let area = Rect::new(0, 0, CARD_WIDTH, CARD_HEIGHT);
    let mut buf = Buffer::empty(area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(ch.to_string(), Style::default().add_modifier(Modifier::BOLD))),
    ];
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL))
        .render(area, &mut buf);

    (0..area.height)
        .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
        .collect()
}
