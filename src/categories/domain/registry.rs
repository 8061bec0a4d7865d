use parking_lot::RwLock;
use crate::categories::domain::CategoryRegistry;
use crate::core::library::{LibraryError, LibraryResult};

#[derive(Debug, Default)]
pub struct MemCategoryRegistry {
    names: RwLock<Vec<String>>,
}

impl MemCategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Seeds the registry; blank names and repeats are dropped.
    pub fn with_categories(names: &[String]) -> Self {
        let registry = Self::new();
        for name in names {
            let _ = registry.add_category(name.as_str());
        }
        registry
    }
}

impl CategoryRegistry for MemCategoryRegistry {
    fn add_category(&self, name: &str) -> LibraryResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LibraryError::empty_name("please enter a category name"));
        }
        let mut names = self.names.write();
        if names.iter().any(|n| n == name) {
            return Err(LibraryError::duplicate_category(name));
        }
        names.push(name.to_string());
        Ok(name.to_string())
    }

    fn remove_category(&self, name: &str) -> LibraryResult<()> {
        let name = name.trim();
        let mut names = self.names.write();
        let ndx = names.iter().position(|n| n == name)
            .ok_or_else(|| LibraryError::not_found(format!("category not found {}", name).as_str()))?;
        names.remove(ndx);
        Ok(())
    }

    fn list_categories(&self) -> Vec<String> {
        self.names.read().clone()
    }
}
