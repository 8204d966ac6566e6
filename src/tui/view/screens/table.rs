use crate::model::UserRecord;
use crate::tui::logic::{Column, SortState};
use crate::tui::state::{HeaderBar, LoadStatus};
use crate::tui::view::components::footer::render_table_footer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

const NO_DATA: &str = "No data available. Please try again later.";

pub struct TableViewData<'a> {
    pub records: &'a [UserRecord],
    pub header: &'a HeaderBar,
    pub sort_state: SortState,
    pub load_status: &'a LoadStatus,
    pub date_format: &'a str,
    pub session: &'a str,
}

pub fn render_table(f: &mut Frame, table_state: &mut TableState, data: &TableViewData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_title(f, chunks[0], data);
    render_body(f, chunks[1], table_state, data);
    render_table_footer(f, chunks[2]);
}

fn render_title(f: &mut Frame, area: Rect, data: &TableViewData) {
    let status = match data.load_status {
        LoadStatus::Loading => Span::styled("Loading users...", Style::default().fg(Color::Yellow)),
        LoadStatus::Ready { from_cache } => Span::styled(
            format!(
                "{} users{}",
                data.records.len(),
                if *from_cache {
                    format!(" (cached, session {})", data.session)
                } else {
                    String::new()
                }
            ),
            Style::default().fg(Color::Green),
        ),
        LoadStatus::Failed(_) => Span::styled("Load failed", Style::default().fg(Color::Red)),
    };

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " usertable ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Sortable Columns Table"),
        Span::raw("   "),
        status,
        Span::raw("   "),
        Span::styled(
            format!("Sort: {}", data.sort_state.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, area);
}

fn header_cell(data: &TableViewData, column: Column, disabled: bool) -> Cell<'static> {
    let mut text = column.label().to_string();
    if let Some(arrow) = data.sort_state.indicator(column) {
        text.push(' ');
        text.push_str(arrow);
    }

    let style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else if data.header.is_focused(column) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if data.sort_state.active == Some(column) {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    Cell::from(text).style(style)
}

fn column_width(column: Column) -> Constraint {
    match column {
        Column::Id => Constraint::Length(4),
        Column::Image => Constraint::Length(8),
        Column::Phone => Constraint::Length(15),
        Column::Address => Constraint::Min(18),
        Column::Zip => Constraint::Length(7),
        Column::MemberSince => Constraint::Length(14),
        _ => Constraint::Min(8),
    }
}

fn render_body(f: &mut Frame, area: Rect, table_state: &mut TableState, data: &TableViewData) {
    let header = Row::new(
        data.header
            .buttons
            .iter()
            .map(|b| header_cell(data, b.column, b.disabled)),
    )
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row> = data
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            Row::new(
                Column::ALL
                    .iter()
                    .map(|c| Cell::from(c.cell(record, i, data.date_format))),
            )
        })
        .collect();

    let widths: Vec<Constraint> = Column::ALL.iter().map(|c| column_width(*c)).collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::NONE))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    f.render_stateful_widget(table, area, table_state);

    if data.records.is_empty() && !data.load_status.is_loading() {
        let mut lines = vec![Line::from(Span::styled(
            NO_DATA,
            Style::default().fg(Color::Red),
        ))];
        if let LoadStatus::Failed(error) = data.load_status {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let message_area = Rect {
            y: area.y.saturating_add(2),
            height: area.height.saturating_sub(2),
            ..area
        };
        f.render_widget(Paragraph::new(lines), message_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_rows_and_indicator() {
        let mut record = UserRecord::default();
        record.name.first = "Jennie".into();
        record.location.street.number = Some(8929);
        record.location.street.name = "Valwood Pkwy".into();

        let records = vec![record];
        let mut header = HeaderBar::default();
        header.focused = Some(Column::Address);
        let data = TableViewData {
            records: &records,
            header: &header,
            sort_state: SortState {
                active: Some(Column::Address),
                ascending: true,
            },
            load_status: &LoadStatus::Ready { from_cache: false },
            date_format: "%m/%d/%Y",
            session: "default",
        };

        let mut terminal = Terminal::new(TestBackend::new(160, 16)).unwrap();
        let mut state = TableState::default();
        terminal
            .draw(|f| render_table(f, &mut state, &data))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("ADDRESS ▲"));
        assert!(text.contains("Jennie"));
        assert!(text.contains("8929 Valwood Pkwy"));
        assert!(!text.contains(NO_DATA));
    }

    #[test]
    fn test_renders_no_data_state() {
        let header = HeaderBar::default();
        let status = LoadStatus::Failed("unexpected status: 500".into());
        let data = TableViewData {
            records: &[],
            header: &header,
            sort_state: SortState::default(),
            load_status: &status,
            date_format: "%m/%d/%Y",
            session: "default",
        };

        let mut terminal = Terminal::new(TestBackend::new(160, 16)).unwrap();
        let mut state = TableState::default();
        terminal
            .draw(|f| render_table(f, &mut state, &data))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains(NO_DATA));
        assert!(text.contains("unexpected status: 500"));
    }
}
