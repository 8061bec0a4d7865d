use serde::{Deserialize, Serialize};
use crate::books::domain::Book;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(category: &str, count: usize) -> Self {
        Self {
            category: category.to_string(),
            count,
        }
    }
}

/// Counts books per category name, one entry per name and in the same order.
/// Matching is exact; books whose category is not listed are not counted.
pub fn count_by_category<B: Book, S: AsRef<str>>(books: &[B], categories: &[S]) -> Vec<CategoryCount> {
    categories.iter()
        .map(|c| {
            let name = c.as_ref();
            CategoryCount::new(name, books.iter().filter(|b| b.category() == name).count())
        })
        .collect()
}
