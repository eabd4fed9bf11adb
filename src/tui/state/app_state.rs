use crate::api::{ApiClient, CourseQuery};
use crate::config::Config;
use crate::model::{Category, Course};
use crate::tui::state::{AppMode, LoadMessage, PageInfo};
use ratatui::widgets::ListState;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Transient state of the course list screen. Fetched collections are
/// replaced wholesale by load results; nothing here persists past exit.
pub struct App {
    pub config: Config,
    pub api: ApiClient,
    /// `None` until the first successful load; `Some(vec![])` is a
    /// loaded-but-empty catalog, which renders differently.
    pub categories: Option<Vec<Category>>,
    pub courses: Vec<Course>,
    pub pager: Option<PageInfo>,
    pub query: CourseQuery,
    pub loading_courses: bool,
    /// Index into `categories` acting as the course filter; `None` = all.
    pub selected_category: Option<usize>,
    pub list_state: ListState,
    pub mode: AppMode,
    pub prev_mode: Option<AppMode>,
    pub should_quit: bool,
    pub last_error: Option<String>,
    pub load_sender: Sender<LoadMessage>,
    pub load_receiver: Receiver<LoadMessage>,
}

impl App {
    pub fn new(config: Config, api: ApiClient) -> Self {
        let (load_sender, load_receiver) = channel();

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            config,
            api,
            categories: None,
            courses: Vec::new(),
            pager: None,
            query: CourseQuery::default(),
            loading_courses: false,
            selected_category: None,
            list_state,
            mode: AppMode::Browse,
            prev_mode: None,
            should_quit: false,
            last_error: None,
            load_sender,
            load_receiver,
        }
    }
}
