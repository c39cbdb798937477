//! Local identity provider
//!
//! Credentials are stored in `accounts.json` as salted SHA-256 digests. Failed
//! sign-ins are counted per account and persisted, so the lockout survives
//! across invocations of the binary.

use super::profile::{Profile, ProfileStore};
use super::{AuthError, UserId};
use crate::persist;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Registration details
#[derive(Debug, Clone, Default)]
pub struct SignUp {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUp {
    fn validate(&self) -> Result<(), AuthError> {
        let fields = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("username", &self.username),
            ("email", &self.email),
            ("password", &self.password),
        ];
        if let Some(&(name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AuthError::MissingField(name));
        }
        // Logins containing '@' are looked up by email
        if self.username.contains('@') {
            return Err(AuthError::InvalidUsername);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(AuthError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }
        Ok(())
    }
}

/// `local@domain.tld`: one `@`, something before it, and a dot inside the domain
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Sign-up and sign-in against some identity backend
pub trait IdentityProvider {
    /// Register a new account and create its profile document
    ///
    /// # Errors
    ///
    /// Returns `AuthError` for validation failures, duplicates, or storage errors.
    fn sign_up(&mut self, details: &SignUp) -> Result<UserId, AuthError>;

    /// Authenticate by email (anything containing `@`) or username
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` or `AuthError::RateLimited`
    /// on failure.
    fn sign_in(&mut self, login: &str, password: &str) -> Result<UserId, AuthError>;
}

/// How many failed sign-ins lock an account, and for how long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutPolicy {
    pub max_failed_attempts: u32,
    pub lockout_secs: u64,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_failed_attempts: 5,
            lockout_secs: 300,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Credential {
    user_id: UserId,
    username: String,
    email: String,
    salt: String,
    password_hash: String,
    #[serde(default)]
    failed_attempts: u32,
    #[serde(default)]
    last_failure: Option<u64>,
}

impl Credential {
    fn matches_login(&self, login: &str) -> bool {
        if login.contains('@') {
            self.email.eq_ignore_ascii_case(login)
        } else {
            self.username.eq_ignore_ascii_case(login)
        }
    }

    fn is_locked(&self, policy: LockoutPolicy, now: u64) -> bool {
        self.failed_attempts >= policy.max_failed_attempts
            && self
                .last_failure
                .is_some_and(|at| now.saturating_sub(at) < policy.lockout_secs)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountsFile {
    #[serde(default)]
    accounts: Vec<Credential>,
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

/// File-backed accounts rooted in the data directory
#[derive(Debug, Clone)]
pub struct LocalAccounts {
    accounts_path: PathBuf,
    profiles: ProfileStore,
    policy: LockoutPolicy,
}

impl LocalAccounts {
    pub const FILE_NAME: &'static str = "accounts.json";

    #[must_use]
    pub fn in_dir(data_dir: &Path, policy: LockoutPolicy) -> Self {
        Self {
            accounts_path: data_dir.join(Self::FILE_NAME),
            profiles: ProfileStore::in_dir(data_dir),
            policy,
        }
    }

    #[must_use]
    pub const fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    fn load(&self) -> Result<AccountsFile, AuthError> {
        Ok(persist::read_json(&self.accounts_path)?.unwrap_or_default())
    }

    fn save(&self, file: &AccountsFile) -> Result<(), AuthError> {
        persist::write_json(&self.accounts_path, file)?;
        Ok(())
    }

    /// Sign in with an explicit clock, in seconds since the Unix epoch
    pub(crate) fn sign_in_at(
        &mut self,
        login: &str,
        password: &str,
        now: u64,
    ) -> Result<UserId, AuthError> {
        let login = login.trim();
        let mut file = self.load()?;
        let Some(credential) = file.accounts.iter_mut().find(|c| c.matches_login(login)) else {
            tracing::debug!("sign-in for unknown login");
            return Err(AuthError::InvalidCredentials);
        };

        if credential.is_locked(self.policy, now) {
            tracing::warn!(user = %credential.user_id, "sign-in refused, account locked");
            return Err(AuthError::RateLimited);
        }

        if hash_password(&credential.salt, password) != credential.password_hash {
            let window_expired = credential
                .last_failure
                .is_none_or(|at| now.saturating_sub(at) >= self.policy.lockout_secs);
            if window_expired {
                credential.failed_attempts = 0;
            }
            credential.failed_attempts += 1;
            credential.last_failure = Some(now);
            tracing::info!(
                user = %credential.user_id,
                failures = credential.failed_attempts,
                "sign-in failed"
            );
            self.save(&file)?;
            return Err(AuthError::InvalidCredentials);
        }

        let user_id = credential.user_id;
        if credential.failed_attempts > 0 {
            credential.failed_attempts = 0;
            credential.last_failure = None;
            self.save(&file)?;
        }
        tracing::info!(user = %user_id, "signed in");
        Ok(user_id)
    }
}

impl IdentityProvider for LocalAccounts {
    fn sign_up(&mut self, details: &SignUp) -> Result<UserId, AuthError> {
        details.validate()?;
        let username = details.username.trim();
        let email = details.email.trim();

        let mut file = self.load()?;
        if file
            .accounts
            .iter()
            .any(|c| c.username.eq_ignore_ascii_case(username))
        {
            return Err(AuthError::UsernameTaken);
        }
        if file.accounts.iter().any(|c| c.email.eq_ignore_ascii_case(email)) {
            return Err(AuthError::EmailTaken);
        }

        let user_id = UserId::generate();
        let salt = Uuid::new_v4().simple().to_string();
        let profile = Profile::new(details);
        // Profile first: an orphaned profile is harmless, an orphaned login is not
        self.profiles.save(user_id, &profile)?;

        file.accounts.push(Credential {
            user_id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: hash_password(&salt, &details.password),
            salt,
            failed_attempts: 0,
            last_failure: None,
        });
        self.save(&file)?;

        tracing::info!(user = %user_id, username, "account created");
        Ok(user_id)
    }

    fn sign_in(&mut self, login: &str, password: &str) -> Result<UserId, AuthError> {
        self.sign_in_at(login, password, unix_now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> SignUp {
        SignUp {
            first_name: "Alice".into(),
            last_name: "Liddell".into(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "looking-glass".into(),
        }
    }

    fn accounts(dir: &Path) -> LocalAccounts {
        LocalAccounts::in_dir(
            dir,
            LockoutPolicy {
                max_failed_attempts: 3,
                lockout_secs: 60,
            },
        )
    }

    #[test]
    fn sign_up_then_sign_in_by_username_or_email() {
        let dir = tempfile::tempdir().unwrap();
        let mut accounts = accounts(dir.path());

        let id = accounts.sign_up(&alice()).unwrap();
        assert_eq!(accounts.sign_in("alice", "looking-glass").unwrap(), id);
        assert_eq!(accounts.sign_in("ALICE", "looking-glass").unwrap(), id);
        assert_eq!(
            accounts.sign_in("Alice@Example.com", "looking-glass").unwrap(),
            id
        );
    }

    #[test]
    fn sign_up_creates_profile_with_zero_stats() {
        let dir = tempfile::tempdir().unwrap();
        let mut accounts = accounts(dir.path());

        let id = accounts.sign_up(&alice()).unwrap();
        let profile = accounts.profiles().load(id).unwrap().unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.display_name, "Alice Liddell");
        assert_eq!(profile.stats.games_played, 0);
    }

    #[test]
    fn password_is_not_stored_in_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut accounts = accounts(dir.path());
        accounts.sign_up(&alice()).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(LocalAccounts::FILE_NAME)).unwrap();
        assert!(!raw.contains("looking-glass"));
    }

    #[test]
    fn validation_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut accounts = accounts(dir.path());

        let missing = SignUp {
            last_name: "  ".into(),
            ..alice()
        };
        assert!(matches!(
            accounts.sign_up(&missing),
            Err(AuthError::MissingField("last name"))
        ));

        for email in ["alice", "alice@", "@example.com", "alice@example", "a b@c.d"] {
            let bad = SignUp {
                email: email.into(),
                ..alice()
            };
            assert!(
                matches!(accounts.sign_up(&bad), Err(AuthError::InvalidEmail)),
                "{email} should be rejected"
            );
        }

        let weak = SignUp {
            password: "12345".into(),
            ..alice()
        };
        assert!(matches!(accounts.sign_up(&weak), Err(AuthError::WeakPassword)));
    }

    #[test]
    fn username_with_at_sign_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut accounts = accounts(dir.path());

        let ambiguous = SignUp {
            username: "bob@home".into(),
            ..alice()
        };
        assert!(matches!(
            accounts.sign_up(&ambiguous),
            Err(AuthError::InvalidUsername)
        ));
        assert!(!dir.path().join(LocalAccounts::FILE_NAME).exists());
    }

    #[test]
    fn duplicate_username_and_email_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut accounts = accounts(dir.path());
        accounts.sign_up(&alice()).unwrap();

        let same_name = SignUp {
            username: "ALICE".into(),
            email: "other@example.com".into(),
            ..alice()
        };
        assert!(matches!(
            accounts.sign_up(&same_name),
            Err(AuthError::UsernameTaken)
        ));

        let same_email = SignUp {
            username: "alice2".into(),
            ..alice()
        };
        assert!(matches!(accounts.sign_up(&same_email), Err(AuthError::EmailTaken)));
    }

    #[test]
    fn wrong_password_and_unknown_login_look_the_same() {
        let dir = tempfile::tempdir().unwrap();
        let mut accounts = accounts(dir.path());
        accounts.sign_up(&alice()).unwrap();

        assert!(matches!(
            accounts.sign_in("alice", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            accounts.sign_in("nobody", "looking-glass"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn repeated_failures_lock_then_expire() {
        let dir = tempfile::tempdir().unwrap();
        let mut accounts = accounts(dir.path());
        let id = accounts.sign_up(&alice()).unwrap();

        for t in 0..3 {
            assert!(matches!(
                accounts.sign_in_at("alice", "wrong", 1_000 + t),
                Err(AuthError::InvalidCredentials)
            ));
        }
        // Even the right password is refused while locked
        assert!(matches!(
            accounts.sign_in_at("alice", "looking-glass", 1_010),
            Err(AuthError::RateLimited)
        ));

        // Lock is persisted
        let mut reopened = self::accounts(dir.path());
        assert!(matches!(
            reopened.sign_in_at("alice", "looking-glass", 1_020),
            Err(AuthError::RateLimited)
        ));

        assert_eq!(
            reopened.sign_in_at("alice", "looking-glass", 1_100).unwrap(),
            id
        );
    }

    #[test]
    fn success_resets_failure_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut accounts = accounts(dir.path());
        accounts.sign_up(&alice()).unwrap();

        for t in 0..2 {
            let _ = accounts.sign_in_at("alice", "wrong", 1_000 + t);
        }
        accounts.sign_in_at("alice", "looking-glass", 1_005).unwrap();
        for t in 0..2 {
            let _ = accounts.sign_in_at("alice", "wrong", 1_010 + t);
        }
        assert!(accounts.sign_in_at("alice", "looking-glass", 1_020).is_ok());
    }
}
