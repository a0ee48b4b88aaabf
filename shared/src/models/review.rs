//! Review Model

use serde::{Deserialize, Serialize};

/// Guest review (read-only, loaded from the reviews fixture)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub author: String,
    /// Photo reference (URL or public path)
    #[serde(default)]
    pub photo: String,
    pub comment: String,
    /// Rating out of 5
    pub rating: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_review_list() {
        let json = r#"[
            {"id":1,"author":"Ana","photo":"/a.jpg","comment":"Lovely pasta","rating":5},
            {"id":2,"author":"Ben","comment":"Slow service","rating":3.5}
        ]"#;
        let reviews: Vec<Review> = serde_json::from_str(json).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].rating, 5.0);
        assert_eq!(reviews[1].photo, "");
        assert_eq!(reviews[1].rating, 3.5);
    }
}
