use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::DuplicateRule { .. } => "DuplicateRule",
            ErrorImpl::EmptyRule { .. } => "EmptyRule",
            ErrorImpl::UnknownLanguage { .. } => "UnknownLanguage",
            ErrorImpl::LanguageAlreadyRegistered { .. } => "LanguageAlreadyRegistered",
            ErrorImpl::ReadError { .. } => "ReadError",
            ErrorImpl::SerializeError { .. } => "SerializeError",
            ErrorImpl::UnknownFormat { .. } => "UnknownFormat",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { rule, message } => ErrorTip::Suggestion(format!(
                "Pattern for `{}` does not compile: {}",
                rule, message
            )),
            ErrorImpl::DuplicateRule { rule } => ErrorTip::Suggestion(format!(
                "Rule `{}` is already defined, merge the patterns into a composite rule",
                rule
            )),
            ErrorImpl::EmptyRule { rule } => ErrorTip::Suggestion(format!(
                "Composite rule `{}` needs at least one pattern",
                rule
            )),
            ErrorImpl::UnknownLanguage { language } => ErrorTip::Suggestion(format!(
                "Language `{}` is not registered, see --list-languages",
                language
            )),
            ErrorImpl::LanguageAlreadyRegistered { language } => {
                ErrorTip::Suggestion(format!("Language `{}` already registered", language))
            }
            ErrorImpl::ReadError { .. } => ErrorTip::None,
            ErrorImpl::SerializeError { .. } => ErrorTip::None,
            ErrorImpl::UnknownFormat { format } => ErrorTip::Suggestion(format!(
                "Unknown format `{}`, expected `listing` or `json`",
                format
            )),
        }
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid pattern for rule {rule:?}: {message}")]
    InvalidPattern { rule: String, message: String },
    #[error("rule {rule:?} already defined")]
    DuplicateRule { rule: String },
    #[error("rule {rule:?} has no patterns")]
    EmptyRule { rule: String },
    #[error("unknown language {language:?}")]
    UnknownLanguage { language: String },
    #[error("language {language:?} already registered")]
    LanguageAlreadyRegistered { language: String },
    #[error("failed to read {path:?}: {message}")]
    ReadError { path: String, message: String },
    #[error("failed to serialize tokens: {message}")]
    SerializeError { message: String },
    #[error("unknown output format {format:?}")]
    UnknownFormat { format: String },
}
