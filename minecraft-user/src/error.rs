use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

/// Error produced by a failed lookup.
///
/// A 404 from the API is never an `Error`; the lookup functions
/// translate it to `Ok(None)` instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request failed below HTTP: DNS, connect, TLS, timeout or
    /// a truncated body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status other than 200 or 404.
    #[error("bad http response for '{url}' ({status} - {message})")]
    UnexpectedStatus {
        status: u16,
        message: String,
        url: String,
    },

    /// The user endpoint returned a body that is not a valid user record.
    #[error("malformed user record: {0}")]
    Parse(#[from] serde_json::Error),

    /// The avatar endpoint returned bytes that are not a decodable image.
    #[error("malformed avatar image: {0}")]
    Decode(#[from] image::ImageError),
}

impl Error {
    pub(crate) fn unexpected_status(status: StatusCode, url: String) -> Self {
        Self::UnexpectedStatus {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_owned(),
            url,
        }
    }

    /// The HTTP status code of an [`Error::UnexpectedStatus`] response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
