use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Fiction",
    "Non-Fiction",
    "Science Fiction",
    "Fantasy",
    "Romance",
    "Mystery",
    "Biography",
    "History",
];

// Configuration abstracts config options for the catalog of a library branch
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub default_categories: Vec<String>,
    pub load_sample_books: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            default_categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            load_sample_books: true,
        }
    }

    // LMS_BRANCH names the branch, LMS_LOAD_SAMPLES=false starts with an empty catalog.
    pub fn from_env() -> Self {
        let branch = std::env::var("LMS_BRANCH").unwrap_or_else(|_| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Ok(val) = std::env::var("LMS_LOAD_SAMPLES") {
            config.load_sample_books = !matches!(val.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off");
        }
        config
    }

    pub fn without_samples(mut self) -> Self {
        self.load_sample_books = false;
        self
    }
}
