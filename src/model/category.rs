use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_category_array() {
        let body = r#"[{"id": 1, "name": "Programming"}, {"id": 2, "name": "Mathematics"}]"#;
        let cates: Vec<Category> = serde_json::from_str(body).unwrap();
        assert_eq!(cates.len(), 2);
        assert_eq!(cates[0].id, 1);
        assert_eq!(cates[1].name, "Mathematics");
    }

    #[test]
    fn decodes_empty_array() {
        let cates: Vec<Category> = serde_json::from_str("[]").unwrap();
        assert!(cates.is_empty());
    }
}
