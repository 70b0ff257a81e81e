use std::fmt::{Display, Formatter, Result};

/// Reasons a start request is rejected before any notification is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    Validation(String),
    MissingSubscription,
}

impl Display for StartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            StartError::Validation(reason) => write!(f, "invalid run configuration: {}", reason),
            StartError::MissingSubscription => write!(f, "no push subscription registered"),
        }
    }
}

impl std::error::Error for StartError {}
