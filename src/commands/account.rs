//! Account commands: sign up, sign in, sign out, who am I

use crate::account::{IdentityProvider, LocalAccounts, Profile, Session, SignUp, UserId};
use anyhow::{Context, Result};
use std::path::Path;

/// Register, then sign the new account in on this machine
///
/// # Errors
///
/// Returns an error if registration fails or the session cannot be saved.
pub fn sign_up(accounts: &mut LocalAccounts, data_dir: &Path, details: &SignUp) -> Result<Session> {
    let user = accounts.sign_up(details)?;
    let session = Session::new(user, details.username.trim());
    session.save(data_dir).context("saving sign-in session")?;
    Ok(session)
}

/// Authenticate and remember the signed-in account
///
/// # Errors
///
/// Returns an error for bad credentials, lockout, or storage failures.
pub fn sign_in(
    accounts: &mut LocalAccounts,
    data_dir: &Path,
    login: &str,
    password: &str,
) -> Result<Session> {
    let user = accounts.sign_in(login, password)?;
    let username = profile_of(accounts, user)?.map_or_else(|| login.trim().to_string(), |p| p.username);
    let session = Session::new(user, username);
    session.save(data_dir).context("saving sign-in session")?;
    Ok(session)
}

/// Forget the signed-in account; returns the session that was cleared
///
/// # Errors
///
/// Returns an error if the session file cannot be read or removed.
pub fn sign_out(data_dir: &Path) -> Result<Option<Session>> {
    let session = Session::load(data_dir).context("reading sign-in session")?;
    Session::clear(data_dir).context("removing sign-in session")?;
    if let Some(session) = &session {
        tracing::info!(user = %session.user_id, "signed out");
    }
    Ok(session)
}

/// The signed-in account's profile, if anyone is signed in
///
/// # Errors
///
/// Returns an error if the session or profile cannot be read.
pub fn who_am_i(accounts: &LocalAccounts, data_dir: &Path) -> Result<Option<Profile>> {
    let Some(session) = Session::load(data_dir).context("reading sign-in session")? else {
        return Ok(None);
    };
    profile_of(accounts, session.user_id)
}

fn profile_of(accounts: &LocalAccounts, user: UserId) -> Result<Option<Profile>> {
    accounts
        .profiles()
        .load(user)
        .with_context(|| format!("loading profile {user}"))
}
