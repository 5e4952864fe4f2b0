mod endpoints;
pub mod error;
mod models;

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;

pub use error::{Error, Result};
pub use image::DynamicImage;
pub use models::{Textures, User, UsernameEntry};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Resolves a username or UUID (hyphenated or compact) to a full
/// user record.
///
/// Returns `Ok(None)` when no account exists for the identifier.
pub async fn get_user(identifier: &str) -> Result<Option<User>> {
    Client::new()?.user(identifier).await
}

/// Fetches a user's avatar, rendered server-side at `size` pixels.
///
/// Returns `Ok(None)` when no account exists for the identifier.
pub async fn get_avatar(identifier: &str, size: u32) -> Result<Option<DynamicImage>> {
    Client::new()?.avatar(identifier, size).await
}

/// A reusable lookup client.
///
/// The free functions build a fresh client per call; hold a `Client`
/// to reuse connections or to set a request timeout.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    api_root: String,
}

impl Client {
    /// Client with no request timeout beyond the transport defaults.
    pub fn new() -> Result<Self> {
        Self::build(None)
    }

    /// Client that fails a lookup with [`Error::Transport`] when the
    /// round-trip exceeds `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_root: endpoints::API_ROOT.to_owned(),
        })
    }

    /// Points the client at a self-hosted deployment of the API.
    pub fn with_api_root(mut self, api_root: &str) -> Self {
        self.api_root = api_root.trim_end_matches('/').to_owned();
        self
    }

    pub async fn user(&self, identifier: &str) -> Result<Option<User>> {
        match self.fetch(endpoints::user(&self.api_root, identifier)).await? {
            Some(resp) => {
                let body = resp.bytes().await?;
                Ok(Some(decode_user(&body)?))
            }
            None => Ok(None),
        }
    }

    pub async fn avatar(&self, identifier: &str, size: u32) -> Result<Option<DynamicImage>> {
        match self
            .fetch(endpoints::avatar(&self.api_root, identifier, size))
            .await?
        {
            Some(resp) => {
                let body = resp.bytes().await?;
                Ok(Some(decode_avatar(&body)?))
            }
            None => Ok(None),
        }
    }

    async fn fetch(&self, url: String) -> Result<Option<reqwest::Response>> {
        debug!("GET {url}");
        let resp = self.http.get(&url).send().await?;

        match resp.status() {
            StatusCode::OK => Ok(Some(resp)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(Error::unexpected_status(status, url)),
        }
    }
}

fn decode_user(body: &[u8]) -> Result<User> {
    Ok(serde_json::from_slice(body)?)
}

fn decode_avatar(body: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "hits the live API"]
    async fn test_get_user() {
        let user = get_user("jeb_").await.unwrap().expect("account should exist");

        assert_eq!(user.username, "jeb_");
        assert_eq!(user.uuid_compact(), "853c80ef3c3749fdaa49938b674adae6");
        assert_eq!(user.uuid_dashed(), "853c80ef-3c37-49fd-aa49-938b674adae6");
    }

    #[tokio::test]
    #[ignore = "hits the live API"]
    async fn test_get_avatar() {
        let avatar = get_avatar("jeb_", 8)
            .await
            .unwrap()
            .expect("account should exist");

        assert_eq!(avatar.width(), 8);
        assert_eq!(avatar.height(), 8);
    }

    #[test]
    fn test_decode_user_rejects_malformed_json() {
        let res = decode_user(b"not json at all");
        assert!(matches!(res, Err(Error::Parse(_))));
    }

    #[test]
    fn test_decode_avatar_roundtrip() {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            8,
            8,
            image::Rgba([255, 0, 0, 255]),
        ));
        let mut png = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let decoded = decode_avatar(&png).unwrap();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 8);
    }

    #[test]
    fn test_decode_avatar_rejects_garbage() {
        let res = decode_avatar(b"\x00\x01definitely not an image");
        assert!(matches!(res, Err(Error::Decode(_))));
    }
}
