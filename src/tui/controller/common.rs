use crate::tui::state::AppMode;
use anyhow::Result;
use crossterm::event::KeyCode;

pub struct HelpContext<'a> {
    pub mode: &'a mut AppMode,
    pub prev_mode: &'a mut Option<AppMode>,
}

pub fn handle_help_key(ctx: &mut HelpContext, code: KeyCode) -> Result<()> {
    if matches!(
        code,
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter
    ) {
        *ctx.mode = ctx.prev_mode.unwrap_or(AppMode::Table);
        *ctx.prev_mode = None;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_closes_back_to_previous_mode() {
        let mut mode = AppMode::Help;
        let mut prev = Some(AppMode::Table);
        let mut ctx = HelpContext {
            mode: &mut mode,
            prev_mode: &mut prev,
        };

        handle_help_key(&mut ctx, KeyCode::Char('x')).unwrap();
        assert_eq!(*ctx.mode, AppMode::Help);

        handle_help_key(&mut ctx, KeyCode::Esc).unwrap();
        assert_eq!(mode, AppMode::Table);
        assert_eq!(prev, None);
    }
}
