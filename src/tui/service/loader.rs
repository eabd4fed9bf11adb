use crate::api::{ApiClient, CourseQuery, Endpoint};
use crate::history::FetchLog;
use crate::model::{Category, Course};
use crate::tui::state::{LoadMessage, PageInfo};
use log::error;
use ratatui::widgets::ListState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::OnceLock;
use tokio::runtime::Runtime;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| Runtime::new().expect("failed to start tokio runtime"))
}

/// Dispatch the category load. Runs independently of any course load;
/// its result arrives as a single message on the screen's channel. If the
/// screen is gone by then, the send fails and the result is discarded.
pub fn start_category_load(api: &ApiClient, sender: &Sender<LoadMessage>, log_fetches: bool) {
    let api = api.clone();
    let tx = sender.clone();

    runtime().spawn(async move {
        match api.categories().await {
            Ok(cates) => {
                if log_fetches {
                    let _ = FetchLog::new().log_ok(Endpoint::Categories, cates.len());
                }
                let _ = tx.send(LoadMessage::CategoriesLoaded(cates));
            }
            Err(e) => {
                error!("categories load failed: {}", e);
                if log_fetches {
                    let _ = FetchLog::new().log_fail(Endpoint::Categories, &e.to_string());
                }
                let _ = tx.send(LoadMessage::CategoriesFailed(e.to_string()));
            }
        }
    });
}

pub struct CourseLoadParams<'a> {
    pub api: &'a ApiClient,
    pub sender: &'a Sender<LoadMessage>,
    pub log_fetches: bool,
    pub query: CourseQuery,
    pub loading_courses: &'a mut bool,
}

/// Dispatch a course load for the given query. The loading flag goes up
/// before the request leaves and comes back down when the result message
/// is applied, on the success and the failure path both.
pub fn start_course_load(params: CourseLoadParams) {
    *params.loading_courses = true;

    let api = params.api.clone();
    let tx = params.sender.clone();
    let log_fetches = params.log_fetches;
    let query = params.query;

    runtime().spawn(async move {
        let requested_page = query.page.unwrap_or(1);
        match api.courses(&query).await {
            Ok(page) => {
                if log_fetches {
                    let _ = FetchLog::new().log_ok(Endpoint::Courses, page.results.len());
                }
                let _ = tx.send(LoadMessage::CoursesLoaded {
                    page,
                    requested_page,
                });
            }
            Err(e) => {
                error!("courses load failed: {}", e);
                if log_fetches {
                    let _ = FetchLog::new().log_fail(Endpoint::Courses, &e.to_string());
                }
                let _ = tx.send(LoadMessage::CoursesFailed(e.to_string()));
            }
        }
    });
}

pub struct PollContext<'a> {
    pub receiver: &'a Receiver<LoadMessage>,
    pub categories: &'a mut Option<Vec<Category>>,
    pub courses: &'a mut Vec<Course>,
    pub pager: &'a mut Option<PageInfo>,
    pub loading_courses: &'a mut bool,
    pub selected_category: &'a mut Option<usize>,
    pub last_error: &'a mut Option<String>,
    pub list_state: &'a mut ListState,
}

/// Drain pending load results into screen state. A failure in one load
/// only records the error; the other collection is never touched.
pub fn poll_load_messages(ctx: &mut PollContext) {
    while let Ok(msg) = ctx.receiver.try_recv() {
        match msg {
            LoadMessage::CategoriesLoaded(cates) => {
                if let Some(idx) = *ctx.selected_category {
                    if idx >= cates.len() {
                        *ctx.selected_category = None;
                    }
                }
                *ctx.categories = Some(cates);
            }
            LoadMessage::CategoriesFailed(err) => {
                *ctx.last_error = Some(err);
            }
            LoadMessage::CoursesLoaded {
                page,
                requested_page,
            } => {
                *ctx.pager = Some(PageInfo {
                    count: page.count,
                    page: requested_page,
                    has_next: page.has_next(),
                    has_prev: page.has_previous(),
                });
                *ctx.courses = page.results;
                *ctx.loading_courses = false;

                match ctx.list_state.selected() {
                    Some(i) if i < ctx.courses.len() => {}
                    _ => ctx.list_state.select(Some(0)),
                }
            }
            LoadMessage::CoursesFailed(err) => {
                *ctx.loading_courses = false;
                *ctx.last_error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use std::sync::mpsc::channel;

    struct Screen {
        categories: Option<Vec<Category>>,
        courses: Vec<Course>,
        pager: Option<PageInfo>,
        loading_courses: bool,
        selected_category: Option<usize>,
        last_error: Option<String>,
        list_state: ListState,
    }

    impl Screen {
        fn new() -> Self {
            let mut list_state = ListState::default();
            list_state.select(Some(0));
            Self {
                categories: None,
                courses: Vec::new(),
                pager: None,
                loading_courses: false,
                selected_category: None,
                last_error: None,
                list_state,
            }
        }

        fn poll(&mut self, receiver: &Receiver<LoadMessage>) {
            let mut ctx = PollContext {
                receiver,
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
    }

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    fn course(id: i64, subject: &str) -> Course {
        Course {
            id,
            subject: subject.to_string(),
            created_date: "2024-01-01T00:00:00Z".to_string(),
            image: format!("https://cdn.example.com/{}.png", id),
        }
    }

    fn course_page(courses: Vec<Course>) -> Page<Course> {
        Page {
            count: courses.len() as u64,
            next: None,
            previous: None,
            results: courses,
        }
    }

    #[test]
    fn categories_go_from_unloaded_to_loaded() {
        let (tx, rx) = channel();
        let mut screen = Screen::new();

        tx.send(LoadMessage::CategoriesLoaded(vec![
            category(1, "Programming"),
            category(2, "Mathematics"),
        ]))
        .unwrap();
        screen.poll(&rx);

        assert_eq!(screen.categories.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn empty_category_load_is_distinct_from_unloaded() {
        let (tx, rx) = channel();
        let mut screen = Screen::new();
        assert!(screen.categories.is_none());

        tx.send(LoadMessage::CategoriesLoaded(Vec::new())).unwrap();
        screen.poll(&rx);

        assert_eq!(screen.categories, Some(Vec::new()));
    }

    #[test]
    fn failed_category_load_keeps_previous_state() {
        let (tx, rx) = channel();
        let mut screen = Screen::new();

        tx.send(LoadMessage::CategoriesFailed("HTTP 500".to_string()))
            .unwrap();
        screen.poll(&rx);

        assert!(screen.categories.is_none());
        assert_eq!(screen.last_error.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn courses_are_replaced_wholesale_in_response_order() {
        let (tx, rx) = channel();
        let mut screen = Screen::new();
        screen.courses = vec![course(9, "Old Course")];

        tx.send(LoadMessage::CoursesLoaded {
            page: course_page(vec![course(1, "First"), course(2, "Second")]),
            requested_page: 1,
        })
        .unwrap();
        screen.poll(&rx);

        let ids: Vec<i64> = screen.courses.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(screen.pager.unwrap().page, 1);
    }

    #[test]
    fn loading_flag_clears_after_successful_course_load() {
        let (tx, rx) = channel();
        let mut screen = Screen::new();
        screen.loading_courses = true;

        tx.send(LoadMessage::CoursesLoaded {
            page: course_page(vec![course(1, "First")]),
            requested_page: 1,
        })
        .unwrap();
        screen.poll(&rx);

        assert!(!screen.loading_courses);
    }

    #[test]
    fn loading_flag_clears_after_failed_course_load() {
        let (tx, rx) = channel();
        let mut screen = Screen::new();
        screen.loading_courses = true;
        screen.courses = vec![course(5, "Kept")];

        tx.send(LoadMessage::CoursesFailed("timeout".to_string()))
            .unwrap();
        screen.poll(&rx);

        assert!(!screen.loading_courses);
        assert_eq!(screen.courses.len(), 1);
        assert_eq!(screen.courses[0].id, 5);
    }

    #[test]
    fn one_failed_load_never_corrupts_the_other() {
        let (tx, rx) = channel();
        let mut screen = Screen::new();
        screen.loading_courses = true;

        tx.send(LoadMessage::CategoriesFailed("connection refused".to_string()))
            .unwrap();
        tx.send(LoadMessage::CoursesLoaded {
            page: course_page(vec![course(1, "First")]),
            requested_page: 1,
        })
        .unwrap();
        screen.poll(&rx);

        assert!(screen.categories.is_none());
        assert_eq!(screen.courses.len(), 1);
        assert!(!screen.loading_courses);
    }

    #[test]
    fn stale_category_filter_resets_on_reload() {
        let (tx, rx) = channel();
        let mut screen = Screen::new();
        screen.selected_category = Some(3);

        tx.send(LoadMessage::CategoriesLoaded(vec![category(1, "Only")]))
            .unwrap();
        screen.poll(&rx);

        assert_eq!(screen.selected_category, None);
    }

    #[test]
    fn out_of_bounds_selection_snaps_to_first_row() {
        let (tx, rx) = channel();
        let mut screen = Screen::new();
        screen.list_state.select(Some(7));

        tx.send(LoadMessage::CoursesLoaded {
            page: course_page(vec![course(1, "First"), course(2, "Second")]),
            requested_page: 1,
        })
        .unwrap();
        screen.poll(&rx);

        assert_eq!(screen.list_state.selected(), Some(0));
    }
}
