use crate::tui::state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

use crate::tui::controller::browse::BrowseContext;
use crate::tui::controller::common::{DetailContext, HelpContext};
use crate::tui::controller::{handle_browse_key, handle_detail_key, handle_help_key};
use crate::tui::service::loader::{
    poll_load_messages, start_category_load, start_course_load, CourseLoadParams, PollContext,
};
use crate::tui::state::AppMode;
use crate::tui::view::components::modal::{render_course_modal, render_help_modal};
use crate::tui::view::{render_browse, BrowseData};

impl App {
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        // The screen's two loads fire exactly once, before the first
        // frame, as independent tasks with no ordering between them.
        self.start_initial_load();

        while !self.should_quit {
            self.poll_load();

            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers)?;
                }
            }
        }

        Ok(())
    }

    fn start_initial_load(&mut self) {
        start_category_load(&self.api, &self.load_sender, self.config.api.log_fetches);
        start_course_load(CourseLoadParams {
            api: &self.api,
            sender: &self.load_sender,
            log_fetches: self.config.api.log_fetches,
            query: self.query.clone(),
            loading_courses: &mut self.loading_courses,
        });
    }

    fn poll_load(&mut self) {
        let mut ctx = PollContext {
            receiver: &self.load_receiver,
            categories: &mut self.categories,
            courses: &mut self.courses,
            pager: &mut self.pager,
            loading_courses: &mut self.loading_courses,
            selected_category: &mut self.selected_category,
            last_error: &mut self.last_error,
            list_state: &mut self.list_state,
        };
        poll_load_messages(&mut ctx);
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> Result<()> {
        match self.mode {
            AppMode::Browse => {
                let mut ctx = BrowseContext {
                    api: &self.api,
                    sender: &self.load_sender,
                    log_fetches: self.config.api.log_fetches,
                    categories: &self.categories,
                    courses_len: self.courses.len(),
                    pager: &self.pager,
                    query: &mut self.query,
                    loading_courses: &mut self.loading_courses,
                    selected_category: &mut self.selected_category,
                    list_state: &mut self.list_state,
                    mode: &mut self.mode,
                    prev_mode: &mut self.prev_mode,
                    should_quit: &mut self.should_quit,
                    last_error: &mut self.last_error,
                };
                handle_browse_key(&mut ctx, code)
            }
            AppMode::CourseDetail => {
                let mut ctx = DetailContext {
                    mode: &mut self.mode,
                    prev_mode: &mut self.prev_mode,
                };
                handle_detail_key(&mut ctx, code)
            }
            AppMode::Help => {
                let mut ctx = HelpContext {
                    mode: &mut self.mode,
                    prev_mode: &mut self.prev_mode,
                };
                handle_help_key(&mut ctx, code)
            }
        }
    }

    fn render(&mut self, f: &mut ratatui::Frame) {
        let mut data = BrowseData {
            list_state: &mut self.list_state,
            categories: self.categories.as_deref(),
            courses: &self.courses,
            pager: self.pager.as_ref(),
            selected_category: self.selected_category,
            loading_courses: self.loading_courses,
            last_error: self.last_error.as_deref(),
            show_image_urls: self.config.ui.show_image_urls,
        };
        render_browse(f, &mut data);

        match self.mode {
            AppMode::CourseDetail => {
                if let Some(course) = self
                    .list_state
                    .selected()
                    .and_then(|idx| self.courses.get(idx))
                {
                    render_course_modal(f, course);
                }
            }
            AppMode::Help => {
                render_help_modal(f);
            }
            AppMode::Browse => {}
        }
    }
}
