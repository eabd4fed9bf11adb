use crate::model::{Category, Course, Page};

/// Results of background catalog loads, delivered over the screen's
/// channel. The two initial loads are independent tasks; their messages
/// may arrive in either order.
pub enum LoadMessage {
    CategoriesLoaded(Vec<Category>),
    CategoriesFailed(String),
    CoursesLoaded {
        page: Page<Course>,
        requested_page: u32,
    },
    CoursesFailed(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageInfo {
    pub count: u64,
    pub page: u32,
    pub has_next: bool,
    pub has_prev: bool,
}
