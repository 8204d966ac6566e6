use crate::tui::view::components::centered_rect;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const KEYS: [(&str, &str); 7] = [
    ("Tab / → / ↓ / d / s", "Next column"),
    ("Shift+Tab / ← / ↑ / a / w", "Previous column"),
    ("Home / End", "First / last column"),
    ("Enter / Space", "Sort by focused column"),
    ("j / k", "Move row cursor"),
    ("PgUp / PgDn", "Page rows"),
    ("q / Esc", "Quit"),
];

pub fn render_help_modal(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Keyboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (keys, action) in KEYS {
        text.push(Line::from(vec![
            Span::styled(format!("{:>26}", keys), Style::default().fg(Color::Yellow)),
            Span::raw("  "),
            Span::raw(action),
        ]));
    }

    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Sorting the same column again reverses it.",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(text)
        .block(Block::default().title(" Help ").borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
