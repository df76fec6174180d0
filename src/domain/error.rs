use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("domain validation failed: {message}")]
    Validation { message: String },
    #[error("unsupported value `{value}` for `{argument}`")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_argument(argument: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            value: value.into(),
        }
    }
}
