pub mod aggregate;
pub mod registry;

use crate::core::library::LibraryResult;

// CategoryRegistry keeps the recognized category names in insertion order.
// It is deliberately independent of the categories books carry.
pub trait CategoryRegistry: Sync + Send {
    fn add_category(&self, name: &str) -> LibraryResult<String>;
    fn remove_category(&self, name: &str) -> LibraryResult<()>;
    fn list_categories(&self) -> Vec<String>;
}
