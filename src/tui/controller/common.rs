use crate::tui::state::AppMode;
use anyhow::Result;
use crossterm::event::KeyCode;

pub struct DetailContext<'a> {
    pub mode: &'a mut AppMode,
    pub prev_mode: &'a mut Option<AppMode>,
}

pub fn handle_detail_key(ctx: &mut DetailContext, code: KeyCode) -> Result<()> {
    if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
        *ctx.mode = ctx.prev_mode.take().unwrap_or(AppMode::Browse);
    }
    Ok(())
}

pub struct HelpContext<'a> {
    pub mode: &'a mut AppMode,
    pub prev_mode: &'a mut Option<AppMode>,
}

pub fn handle_help_key(ctx: &mut HelpContext, code: KeyCode) -> Result<()> {
    if matches!(code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?')) {
        *ctx.mode = ctx.prev_mode.take().unwrap_or(AppMode::Browse);
    }
    Ok(())
}
