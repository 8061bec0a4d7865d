use crate::core::domain::Identifiable;
use crate::core::library::BookField;

pub mod model;

// Book is the read view shared by stored entities and the DTOs handed to callers.
pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn isbn(&self) -> &str;
    fn category(&self) -> &str;
    fn is_available(&self) -> bool;

    fn field(&self, field: BookField) -> &str {
        match field {
            BookField::Title => self.title(),
            BookField::Author => self.author(),
            BookField::Isbn => self.isbn(),
            BookField::Category => self.category(),
        }
    }
}
