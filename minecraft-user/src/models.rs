use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

/// A resolved Minecraft account.
///
/// Built fresh on every successful lookup and immutable afterwards.
/// Equality and hashing consider the [`uuid`](Self::uuid) only.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// The authoritative account id. The API sends the hyphenated form
    /// under `uuid_dashed` and a compact copy under `uuid`; the compact
    /// copy is redundant and derived locally instead.
    #[serde(rename = "uuid_dashed")]
    pub uuid: Uuid,
    /// Current display name.
    pub username: String,
    /// Previous names, oldest first, as returned by the API.
    #[serde(default)]
    pub username_history: Vec<UsernameEntry>,
    pub textures: Textures,
}

/// One entry of a user's name history.
#[derive(Debug, Clone, Deserialize)]
pub struct UsernameEntry {
    pub username: String,
    /// When the account switched to this name. `None` on the name the
    /// account was created with.
    #[serde(default)]
    pub changed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Textures {
    pub skin: Url,
    /// Most accounts have no cape.
    #[serde(default)]
    pub cape: Option<Url>,
    /// Whether the skin uses the slim ("Alex") arm model.
    #[serde(default)]
    pub slim: bool,
}

impl User {
    /// Canonical hyphenated form of the account id.
    pub fn uuid_dashed(&self) -> String {
        self.uuid.hyphenated().to_string()
    }

    /// Compact 32-character hex form of the account id.
    pub fn uuid_compact(&self) -> String {
        self.uuid.simple().to_string()
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.uuid)
    }
}
