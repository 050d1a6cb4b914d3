use crate::constants::MAX_RELEASE_LENGTH;

/// Error type for release-parser validation and parsing.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Release name longer than [`MAX_RELEASE_LENGTH`] characters.
    #[error(
        "release name too long: {0} characters (maximum is {max})",
        max = MAX_RELEASE_LENGTH
    )]
    TooLong(usize),

    /// Release name is one of the reserved names (`.`, `..`, `latest`).
    #[error("restricted release name: {0}")]
    RestrictedName(String),

    /// Release name contains a slash or a line break.
    #[error("release name contains bad characters")]
    BadCharacters,

    /// Input does not match the version grammar.
    #[error("invalid version: {0}")]
    InvalidVersion(String),
}

impl Error {
    /// Machine-readable classification of the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use release_parser::Release;
    ///
    /// let err = Release::parse("latest").unwrap_err();
    /// assert_eq!(err.code(), "RESTRICTED_NAME");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Error::TooLong(_) => "TOO_LONG",
            Error::RestrictedName(_) => "RESTRICTED_NAME",
            Error::BadCharacters => "BAD_CHARACTERS",
            Error::InvalidVersion(_) => "INVALID_VERSION",
        }
    }
}

/// Result type for release-parser operations.
pub type Result<T> = std::result::Result<T, Error>;
