pub mod format;
pub mod url_validator;
