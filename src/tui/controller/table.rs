use crate::model::UserRecord;
use crate::tui::logic::{
    apply_sort, focused_column, navigate, Direction, Edge, FocusMove, SortState,
};
use crate::tui::state::{AppMode, HeaderBar};
use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::widgets::TableState;

const PAGE_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Focus(FocusMove),
    Activate,
    RowUp(usize),
    RowDown(usize),
    Help,
    Quit,
}

pub fn intent_for_key(code: KeyCode) -> Option<Intent> {
    let intent = match code {
        KeyCode::Home => Intent::Focus(FocusMove::Jump(Edge::First)),
        KeyCode::End => Intent::Focus(FocusMove::Jump(Edge::Last)),
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
            Intent::Focus(FocusMove::Step(Direction::Next))
        }
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab => {
            Intent::Focus(FocusMove::Step(Direction::Previous))
        }
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'd' | 's' => Intent::Focus(FocusMove::Step(Direction::Next)),
            'a' | 'w' => Intent::Focus(FocusMove::Step(Direction::Previous)),
            ' ' => Intent::Activate,
            'j' => Intent::RowDown(1),
            'k' => Intent::RowUp(1),
            '?' => Intent::Help,
            'q' => Intent::Quit,
            _ => return None,
        },
        KeyCode::Enter => Intent::Activate,
        KeyCode::PageDown => Intent::RowDown(PAGE_ROWS),
        KeyCode::PageUp => Intent::RowUp(PAGE_ROWS),
        KeyCode::Esc => Intent::Quit,
        _ => return None,
    };
    Some(intent)
}

pub struct TableContext<'a> {
    pub header: &'a mut HeaderBar,
    pub records: &'a mut Vec<UserRecord>,
    pub sort_state: &'a mut SortState,
    pub table_state: &'a mut TableState,
    pub mode: &'a mut AppMode,
    pub prev_mode: &'a mut Option<AppMode>,
    pub should_quit: &'a mut bool,
}

pub fn handle_table_key(ctx: &mut TableContext, code: KeyCode) -> Result<()> {
    let Some(intent) = intent_for_key(code) else {
        return Ok(());
    };

    match intent {
        Intent::Focus(movement) => {
            let target = navigate(&*ctx.header, movement);
            ctx.header.focus(target);
        }
        Intent::Activate => {
            if let Some(column) = focused_column(&*ctx.header) {
                apply_sort(ctx.records, ctx.sort_state, column);
                tracing::debug!(
                    column = column.label(),
                    ascending = ctx.sort_state.ascending,
                    "sorted table"
                );
                if !ctx.records.is_empty() {
                    ctx.table_state.select(Some(0));
                }
            }
        }
        Intent::RowUp(step) => {
            if let Some(current) = ctx.table_state.selected() {
                ctx.table_state.select(Some(current.saturating_sub(step)));
            }
        }
        Intent::RowDown(step) => {
            let max = ctx.records.len().saturating_sub(1);
            if let Some(current) = ctx.table_state.selected() {
                ctx.table_state.select(Some((current + step).min(max)));
            }
        }
        Intent::Help => {
            *ctx.prev_mode = Some(*ctx.mode);
            *ctx.mode = AppMode::Help;
        }
        Intent::Quit => *ctx.should_quit = true,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::logic::Column;

    struct Fixture {
        header: HeaderBar,
        records: Vec<UserRecord>,
        sort_state: SortState,
        table_state: TableState,
        mode: AppMode,
        prev_mode: Option<AppMode>,
        should_quit: bool,
    }

    impl Fixture {
        fn new(numbers: &[i64]) -> Self {
            let records = numbers
                .iter()
                .map(|n| {
                    let mut r = UserRecord::default();
                    r.location.street.number = Some(*n);
                    r
                })
                .collect();
            Self {
                header: HeaderBar::default(),
                records,
                sort_state: SortState::default(),
                table_state: TableState::default().with_selected(Some(0)),
                mode: AppMode::Table,
                prev_mode: None,
                should_quit: false,
            }
        }

        fn press(&mut self, code: KeyCode) {
            let mut ctx = TableContext {
                header: &mut self.header,
                records: &mut self.records,
                sort_state: &mut self.sort_state,
                table_state: &mut self.table_state,
                mode: &mut self.mode,
                prev_mode: &mut self.prev_mode,
                should_quit: &mut self.should_quit,
            };
            handle_table_key(&mut ctx, code).unwrap();
        }

        fn numbers(&self) -> Vec<i64> {
            self.records
                .iter()
                .filter_map(|r| r.location.street.number)
                .collect()
        }
    }

    #[test]
    fn test_key_map() {
        let next = Some(Intent::Focus(FocusMove::Step(Direction::Next)));
        let prev = Some(Intent::Focus(FocusMove::Step(Direction::Previous)));

        for code in [
            KeyCode::Right,
            KeyCode::Down,
            KeyCode::Char('d'),
            KeyCode::Char('S'),
        ] {
            assert_eq!(intent_for_key(code), next);
        }
        for code in [
            KeyCode::Left,
            KeyCode::Up,
            KeyCode::Char('a'),
            KeyCode::Char('W'),
        ] {
            assert_eq!(intent_for_key(code), prev);
        }
        assert_eq!(
            intent_for_key(KeyCode::Home),
            Some(Intent::Focus(FocusMove::Jump(Edge::First)))
        );
        assert_eq!(
            intent_for_key(KeyCode::End),
            Some(Intent::Focus(FocusMove::Jump(Edge::Last)))
        );
        assert_eq!(intent_for_key(KeyCode::Enter), Some(Intent::Activate));
        assert_eq!(intent_for_key(KeyCode::Char(' ')), Some(Intent::Activate));
        assert_eq!(intent_for_key(KeyCode::Char('z')), None);
    }

    #[test]
    fn test_activate_without_focus_is_noop() {
        let mut fx = Fixture::new(&[42, 7, 100]);
        fx.press(KeyCode::Enter);
        assert_eq!(fx.numbers(), vec![42, 7, 100]);
        assert_eq!(fx.sort_state, SortState::default());
    }

    #[test]
    fn test_navigate_then_sort_address() {
        let mut fx = Fixture::new(&[42, 7, 100]);

        fx.press(KeyCode::Home);
        assert_eq!(fx.header.focused, Some(Column::Id));
        for _ in 0..5 {
            fx.press(KeyCode::Right);
        }
        assert_eq!(fx.header.focused, Some(Column::Address));

        fx.press(KeyCode::Enter);
        assert_eq!(fx.numbers(), vec![7, 42, 100]);
        assert!(fx.sort_state.ascending);

        fx.press(KeyCode::Char(' '));
        assert_eq!(fx.numbers(), vec![100, 42, 7]);
        assert!(!fx.sort_state.ascending);
    }

    #[test]
    fn test_wraps_between_ends() {
        let mut fx = Fixture::new(&[]);
        fx.press(KeyCode::End);
        assert_eq!(fx.header.focused, Some(Column::MemberSince));
        fx.press(KeyCode::Char('s'));
        assert_eq!(fx.header.focused, Some(Column::Id));
        fx.press(KeyCode::Char('w'));
        assert_eq!(fx.header.focused, Some(Column::MemberSince));
    }

    #[test]
    fn test_sort_on_empty_dataset_updates_state() {
        let mut fx = Fixture::new(&[]);
        fx.press(KeyCode::Home);
        fx.press(KeyCode::Enter);
        assert!(fx.records.is_empty());
        assert_eq!(fx.sort_state.active, Some(Column::Id));
        assert!(fx.sort_state.ascending);
    }

    #[test]
    fn test_row_scrolling_is_clamped() {
        let mut fx = Fixture::new(&[1, 2, 3]);
        fx.press(KeyCode::Char('k'));
        assert_eq!(fx.table_state.selected(), Some(0));
        fx.press(KeyCode::PageDown);
        assert_eq!(fx.table_state.selected(), Some(2));
        fx.press(KeyCode::Char('j'));
        assert_eq!(fx.table_state.selected(), Some(2));
    }

    #[test]
    fn test_help_and_quit() {
        let mut fx = Fixture::new(&[]);
        fx.press(KeyCode::Char('?'));
        assert_eq!(fx.mode, AppMode::Help);
        assert_eq!(fx.prev_mode, Some(AppMode::Table));

        fx.press(KeyCode::Char('q'));
        assert!(fx.should_quit);
    }
}
