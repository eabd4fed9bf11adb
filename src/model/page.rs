use serde::{Deserialize, Serialize};

/// Pagination envelope used by the courses endpoint. The categories
/// endpoint returns a bare array and does not use this wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Course;

    #[test]
    fn decodes_paginated_courses_in_response_order() {
        let body = r#"{
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"id": 1, "subject": "B-tree Internals", "created_date": "2024-01-01T00:00:00Z", "image": "https://cdn.example.com/1.png"},
                {"id": 2, "subject": "Async Rust", "created_date": "2024-02-01T00:00:00Z", "image": "https://cdn.example.com/2.png"}
            ]
        }"#;
        let page: Page<Course> = serde_json::from_str(body).unwrap();
        assert_eq!(page.count, 2);
        assert!(!page.has_next());
        let ids: Vec<i64> = page.results.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn decodes_middle_page_links() {
        let body = r#"{
            "count": 30,
            "next": "http://localhost:8000/courses/?page=3",
            "previous": "http://localhost:8000/courses/?page=1",
            "results": []
        }"#;
        let page: Page<Course> = serde_json::from_str(body).unwrap();
        assert!(page.has_next());
        assert!(page.has_previous());
        assert!(page.results.is_empty());
    }
}
