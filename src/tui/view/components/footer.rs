use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_table_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("←→/ad", Style::default().fg(Color::Cyan)),
        Span::raw(" Column  "),
        Span::styled("Home/End", Style::default().fg(Color::Cyan)),
        Span::raw(" First/Last  "),
        Span::styled("Enter/Space", Style::default().fg(Color::Cyan)),
        Span::raw(" Sort  "),
        Span::styled("j/k", Style::default().fg(Color::Cyan)),
        Span::raw(" Rows  "),
        Span::styled("?", Style::default().fg(Color::Cyan)),
        Span::raw(" Help  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ]))
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}
