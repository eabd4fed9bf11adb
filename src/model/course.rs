use serde::{Deserialize, Serialize};

/// One course as served by the catalog API. `created_date` is kept as the
/// raw server string; parsing happens at display time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub subject: String,
    pub created_date: String,
    // The upstream serializer has shipped both spellings.
    #[serde(alias = "Image")]
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_course_row() {
        let body = r#"{
            "id": 7,
            "subject": "Rust for Backend Engineers",
            "created_date": "2024-03-05T10:22:33.123456Z",
            "image": "https://cdn.example.com/courses/7.png"
        }"#;
        let course: Course = serde_json::from_str(body).unwrap();
        assert_eq!(course.id, 7);
        assert_eq!(course.subject, "Rust for Backend Engineers");
        assert_eq!(course.image, "https://cdn.example.com/courses/7.png");
    }

    #[test]
    fn accepts_capitalized_image_field() {
        let body = r#"{
            "id": 3,
            "subject": "Intro to Databases",
            "created_date": "2023-11-20T08:00:00Z",
            "Image": "https://cdn.example.com/courses/3.png"
        }"#;
        let course: Course = serde_json::from_str(body).unwrap();
        assert_eq!(course.image, "https://cdn.example.com/courses/3.png");
    }
}
