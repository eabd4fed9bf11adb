use crate::api::{ApiClient, CourseQuery};
use crate::model::Category;
use crate::tui::logic::{filter_next, filter_prev, navigate_down, navigate_up};
use crate::tui::service::loader::{start_category_load, start_course_load, CourseLoadParams};
use crate::tui::state::{AppMode, LoadMessage, PageInfo};
use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use std::sync::mpsc::Sender;

pub struct BrowseContext<'a> {
    pub api: &'a ApiClient,
    pub sender: &'a Sender<LoadMessage>,
    pub log_fetches: bool,
    pub categories: &'a Option<Vec<Category>>,
    pub courses_len: usize,
    pub pager: &'a Option<PageInfo>,
    pub query: &'a mut CourseQuery,
    pub loading_courses: &'a mut bool,
    pub selected_category: &'a mut Option<usize>,
    pub list_state: &'a mut ListState,
    pub mode: &'a mut AppMode,
    pub prev_mode: &'a mut Option<AppMode>,
    pub should_quit: &'a mut bool,
    pub last_error: &'a mut Option<String>,
}

pub fn handle_browse_key(ctx: &mut BrowseContext, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => *ctx.should_quit = true,
        KeyCode::Up => navigate_up(ctx.list_state),
        KeyCode::Down => navigate_down(ctx.list_state, ctx.courses_len),
        KeyCode::Left => {
            if filter_prev(ctx.selected_category) {
                ctx.query.page = None;
                dispatch_courses(ctx);
            }
        }
        KeyCode::Right => {
            let len = ctx.categories.as_ref().map(|c| c.len()).unwrap_or(0);
            if filter_next(ctx.selected_category, len) {
                ctx.query.page = None;
                dispatch_courses(ctx);
            }
        }
        KeyCode::Char('n') => {
            if let Some(pager) = ctx.pager {
                if pager.has_next {
                    ctx.query.page = Some(pager.page + 1);
                    dispatch_courses(ctx);
                }
            }
        }
        KeyCode::Char('p') => {
            if let Some(pager) = ctx.pager {
                if pager.has_prev && pager.page > 1 {
                    ctx.query.page = Some(pager.page - 1);
                    dispatch_courses(ctx);
                }
            }
        }
        KeyCode::Char('r') => {
            // Manual retry: re-dispatch both loads with the current query.
            *ctx.last_error = None;
            start_category_load(ctx.api, ctx.sender, ctx.log_fetches);
            dispatch_courses(ctx);
        }
        KeyCode::Enter => {
            let selected = ctx.list_state.selected().unwrap_or(0);
            if selected < ctx.courses_len {
                *ctx.prev_mode = Some(*ctx.mode);
                *ctx.mode = AppMode::CourseDetail;
            }
        }
        KeyCode::Char('?') => {
            *ctx.prev_mode = Some(*ctx.mode);
            *ctx.mode = AppMode::Help;
        }
        _ => {}
    }
    Ok(())
}

fn dispatch_courses(ctx: &mut BrowseContext) {
    ctx.query.category_id = ctx.selected_category.and_then(|i| {
        ctx.categories
            .as_ref()
            .and_then(|cates| cates.get(i))
            .map(|cate| cate.id)
    });

    start_course_load(CourseLoadParams {
        api: ctx.api,
        sender: ctx.sender,
        log_fetches: ctx.log_fetches,
        query: ctx.query.clone(),
        loading_courses: ctx.loading_courses,
    });
}
