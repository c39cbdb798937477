//! Player accounts
//!
//! A local stand-in for the hosted identity and profile services: credentials
//! in `accounts.json`, one profile document per user under `profiles/`, and a
//! `session.json` marker remembering who is signed in on this machine.

mod identity;
mod profile;
mod session;

pub use identity::{IdentityProvider, LocalAccounts, LockoutPolicy, SignUp};
pub use profile::{Profile, ProfileStore};
pub use session::Session;

use crate::persist::PersistError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Opaque account identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<UserId> for crate::stats::PlayerId {
    fn from(id: UserId) -> Self {
        Self::new(id.to_string())
    }
}

/// Identity-layer failures, worded for display to the player
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please fill in all fields (missing {0})")]
    MissingField(&'static str),
    #[error("Invalid email address format.")]
    InvalidEmail,
    #[error("Username cannot contain '@'.")]
    InvalidUsername,
    #[error("Password must be at least {min} characters.", min = identity::MIN_PASSWORD_LEN)]
    WeakPassword,
    #[error("Username is already taken.")]
    UsernameTaken,
    #[error("An account with this email already exists.")]
    EmailTaken,
    #[error("Invalid username/email or password.")]
    InvalidCredentials,
    #[error("Too many failed attempts. Please try again later.")]
    RateLimited,
    #[error(transparent)]
    Storage(#[from] PersistError),
}
