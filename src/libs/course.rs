use serde::{Deserialize, Serialize};

/// Size of the reference course catalog.
pub const CATALOG_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Title and description of the catalog entry `n` (1-based).
pub fn catalog_entry(n: usize) -> (String, String) {
    (format!("Course {}", n), format!("Description for course {}", n))
}

/// One page of the course listing, shaped like the public course API.
#[derive(Debug, Clone, Serialize)]
pub struct CoursePage {
    pub data: Vec<Course>,
    pub total: usize,
    pub per_page: usize,
}
