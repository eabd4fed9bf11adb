use ratatui::widgets::ListState;

pub fn navigate_up(list_state: &mut ListState) {
    if let Some(current) = list_state.selected() {
        if current > 0 {
            list_state.select(Some(current - 1));
        }
    }
}

pub fn navigate_down(list_state: &mut ListState, max_items: usize) {
    let max = max_items.saturating_sub(1);
    if let Some(current) = list_state.selected() {
        if current < max {
            list_state.select(Some(current + 1));
        }
    }
}
