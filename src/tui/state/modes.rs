#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Browse,
    CourseDetail,
    Help,
}
