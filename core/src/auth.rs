// core/src/auth.rs
use log::info;

use crate::api::SurfDataProvider;
use crate::error::{Result, SurfError};
use crate::models::{Credentials, SignUp, UserProfile};
use crate::storage::TokenStore;

/// Logger inn og lagrer tokenet.
pub fn login<P, S>(api: &P, store: &mut S, creds: &Credentials) -> Result<String>
where
    P: SurfDataProvider + ?Sized,
    S: TokenStore + ?Sized,
{
    let token = api.login(creds)?;
    store.set(&token)?;
    Ok(token)
}

/// Oppretter konto og lagrer tokenet (innlogget direkte etter signup).
pub fn signup<P, S>(api: &P, store: &mut S, req: &SignUp) -> Result<String>
where
    P: SurfDataProvider + ?Sized,
    S: TokenStore + ?Sized,
{
    let token = api.signup(req)?;
    store.set(&token)?;
    Ok(token)
}

pub fn logout<S: TokenStore + ?Sized>(store: &mut S) -> Result<()> {
    store.clear()?;
    info!("logget ut");
    Ok(())
}

pub fn require_token<S: TokenStore + ?Sized>(store: &S) -> Result<String> {
    store.get().ok_or(SurfError::NotLoggedIn)
}

/// Brukeren bak lagret token.
pub fn current_user<P, S>(api: &P, store: &S) -> Result<UserProfile>
where
    P: SurfDataProvider + ?Sized,
    S: TokenStore + ?Sized,
{
    api.current_user(&require_token(store)?)
}
