//! # Auth Commands
//!
//! Mock sign-in: any non-blank email is accepted and no password is
//! stored or checked against anything. Registration additionally wants an
//! address shaped like `name@example.com`.
//!
//! ## Persistence
//! ```text
//! login / register ──► settings["@shopsync_auth"] = {"email":..,"signedInAt":..}
//!                  └─► SessionState = Some(user)
//!
//! logout ──────────► settings["@shopsync_auth"] removed
//!                  └─► SessionState = None
//!
//! restore_session ─► settings["@shopsync_auth"] ──► SessionState
//!                    (missing or unreadable → signed out)
//! ```

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{DbState, SessionState, AUTH_KEY};
use shopsync_core::validation::{validate_login, validate_registration};
use shopsync_core::{CoreError, User};

async fn sign_in(db: &DbState, session: &SessionState, email: &str) -> Result<User, ApiError> {
    let user = User::new(email.trim(), Utc::now());
    let json = serde_json::to_string(&user)?;

    db.inner()?.settings().set(AUTH_KEY, &json).await?;
    session.replace(Some(user.clone())).await;

    info!(email = %user.email, "Signed in");
    Ok(user)
}

/// Signs in with an email and password.
pub async fn login(
    db: &DbState,
    session: &SessionState,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    debug!(email = %email, "login command");
    validate_login(email, password)?;
    sign_in(db, session, email).await
}

/// Creates an account and signs in. The password must be confirmed and at
/// least six characters long.
pub async fn register(
    db: &DbState,
    session: &SessionState,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<User, ApiError> {
    debug!(email = %email, "register command");
    validate_registration(email, password, confirm)?;
    sign_in(db, session, email).await
}

/// Signs out. Signing out while signed out is not an error.
pub async fn logout(db: &DbState, session: &SessionState) -> Result<(), ApiError> {
    let outcome = db.inner()?.settings().remove(AUTH_KEY).await?;
    session.replace(None).await;

    debug!(was_signed_in = outcome.is_applied(), "logout command");
    Ok(())
}

/// The signed-in user.
///
/// ## Errors
/// `ErrorCode::Unauthenticated` when signed out.
pub async fn current_user(session: &SessionState) -> Result<User, ApiError> {
    session.current().await.ok_or_else(|| CoreError::NotSignedIn.into())
}

/// Loads the persisted session into `session`.
pub async fn restore_session(db: &DbState, session: &SessionState) -> Result<Option<User>, ApiError> {
    let stored = db.inner()?.settings().get(AUTH_KEY).await?;

    let user = match stored {
        None => None,
        Some(json) => match serde_json::from_str::<User>(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Stored session is unreadable, treating as signed out");
                None
            }
        },
    };

    session.replace(user.clone()).await;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shopsync_db::{Database, DbConfig};

    async fn db() -> DbState {
        DbState::from_database(Database::new(DbConfig::in_memory().without_seed()).await.unwrap())
    }

    #[tokio::test]
    async fn test_login_persists_across_sessions() {
        let db = db().await;
        let session = SessionState::new();

        let user = login(&db, &session, " ana@example.com ", "secret").await.unwrap();
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(current_user(&session).await.unwrap(), user);

        // A fresh process starts signed out until it restores
        let next = SessionState::new();
        assert!(!next.is_signed_in().await);
        assert_eq!(restore_session(&db, &next).await.unwrap(), Some(user));
        assert!(next.is_signed_in().await);
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let db = db().await;
        let session = SessionState::new();
        login(&db, &session, "ana@example.com", "secret").await.unwrap();

        logout(&db, &session).await.unwrap();
        assert_eq!(current_user(&session).await.unwrap_err().code, ErrorCode::Unauthenticated);
        assert_eq!(restore_session(&db, &SessionState::new()).await.unwrap(), None);

        // Second logout is fine
        logout(&db, &session).await.unwrap();
    }

    #[tokio::test]
    async fn test_register_rules() {
        let db = db().await;
        let session = SessionState::new();

        let err = register(&db, &session, "ana@example.com", "secret", "secreT")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = register(&db, &session, "ana@example.com", "abc", "abc")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(!session.is_signed_in().await);

        register(&db, &session, "ana@example.com", "abcdef", "abcdef")
            .await
            .unwrap();
        assert!(session.is_signed_in().await);
    }

    #[tokio::test]
    async fn test_login_rejects_bad_input() {
        let db = db().await;
        let session = SessionState::new();

        assert!(login(&db, &session, "  ", "secret").await.is_err());
        assert!(login(&db, &session, "ana@example.com", "").await.is_err());
        assert!(!session.is_signed_in().await);
    }

    #[tokio::test]
    async fn test_login_accepts_any_non_blank_email() {
        let db = db().await;
        let session = SessionState::new();

        let user = login(&db, &session, "ana", "secret").await.unwrap();
        assert_eq!(user.email, "ana");
        assert!(user.signed_in_at.is_some());
        assert!(session.is_signed_in().await);
    }

    #[tokio::test]
    async fn test_session_without_sign_in_time_restores() {
        let db = db().await;
        db.inner()
            .unwrap()
            .settings()
            .set(AUTH_KEY, r#"{"email":"ana@example.com"}"#)
            .await
            .unwrap();

        let session = SessionState::new();
        let user = restore_session(&db, &session).await.unwrap().unwrap();
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.signed_in_at, None);
        assert!(session.is_signed_in().await);
    }

    #[tokio::test]
    async fn test_corrupt_session_restores_signed_out() {
        let db = db().await;
        db.inner()
            .unwrap()
            .settings()
            .set(AUTH_KEY, "{not json")
            .await
            .unwrap();

        let session = SessionState::new();
        assert_eq!(restore_session(&db, &session).await.unwrap(), None);
        assert!(!session.is_signed_in().await);
    }
}
