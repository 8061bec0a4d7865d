use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Conflict {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let message = other.to_string();
        match other {
            LibraryError::Validation { field, .. } => {
                CommandError::Validation { message, reason_code: Some(field.to_string()) }
            }
            LibraryError::InvalidField { field } => {
                CommandError::Validation { message, reason_code: Some(field) }
            }
            LibraryError::EmptyName { .. } => {
                CommandError::Validation { message, reason_code: Some("name".to_string()) }
            }
            LibraryError::DuplicateIsbn { .. } | LibraryError::DuplicateCategory { .. } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { .. } => {
                CommandError::NotFound { message }
            }
            LibraryError::Conflict { .. } => {
                CommandError::Conflict { message }
            }
            LibraryError::Serialization { .. } => {
                CommandError::Serialization { message }
            }
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CommandError::DuplicateKey { message }
            | CommandError::NotFound { message }
            | CommandError::Conflict { message }
            | CommandError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::{BookField, LibraryError};

    #[test]
    fn test_should_build_command_error() {
        let _ = CommandError::DuplicateKey { message: "test".to_string() };
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::Conflict { message: "test".to_string() };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
    }

    #[test]
    fn test_should_map_library_errors() {
        assert_eq!(CommandError::Validation { message: "please enter a title".to_string(), reason_code: Some("title".to_string()) },
                   CommandError::from(LibraryError::validation(BookField::Title)));
        assert!(matches!(CommandError::from(LibraryError::invalid_field("year")),
            CommandError::Validation { reason_code: Some(_), .. }));
        assert!(matches!(CommandError::from(LibraryError::empty_name("blank")), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::duplicate_isbn("978")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::duplicate_category("Fiction")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_found("id")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::conflict("stale")), CommandError::Conflict { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("bad")), CommandError::Serialization { .. }));
    }
}
