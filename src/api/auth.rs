//! Auth Endpoints
//!
//! Register, login, and current-user lookups.

use serde::Serialize;

use super::{encode, request, request_empty, ApiError};
use crate::models::{Token, User};
use crate::session::Session;

#[derive(Serialize)]
struct CredentialsArgs<'a> {
    username: &'a str,
    password: &'a str,
}

pub async fn register(session: Session, username: &str, password: &str) -> Result<(), ApiError> {
    let body = encode(&CredentialsArgs { username, password })?;
    request_empty(session, "POST", "/auth/register", Some(body)).await
}

pub async fn login(session: Session, username: &str, password: &str) -> Result<Token, ApiError> {
    let body = encode(&CredentialsArgs { username, password })?;
    request(session, "POST", "/auth/login", Some(body)).await
}

/// Current user for the stored token; failing here means the token is invalid
pub async fn me(session: Session) -> Result<User, ApiError> {
    request(session, "GET", "/auth/me", None).await
}
