//! Reading and writing the session through a [`CredentialStore`].

use shared_types::{AppError, AuthGrant, MissingRolePolicy, Session, UserRecord};

use crate::credential_store::{
    CredentialStore, ACCESS_TOKEN_KEY, LEGACY_TOKEN_KEY, LEGACY_USER_DATA_KEY, REFRESH_TOKEN_KEY,
    USER_IMAGE_KEY, USER_KEY,
};

/// Rebuild the session left behind by a previous run.
///
/// Never fails. Anything that cannot produce an authenticated session
/// (corrupt record, record without a token, unknown role) is logged, the
/// session keys are cleared, and the anonymous session is returned.
pub fn rehydrate<S: CredentialStore>(store: &mut S, policy: MissingRolePolicy) -> Session {
    let credential = first_present(store, &[ACCESS_TOKEN_KEY, LEGACY_TOKEN_KEY]);
    let record = first_present(store, &[USER_KEY, LEGACY_USER_DATA_KEY]);

    let result = match (record, credential) {
        (None, None) => return Session::anonymous(),
        (Some(_), None) => Err(AppError::malformed_session(
            "user record stored without an access token",
        )),
        (Some(raw), Some(credential)) => {
            session_from_record(&raw, credential, policy).map(|session| {
                session.with_refresh_credential(store.get(REFRESH_TOKEN_KEY))
            })
        }
        (None, Some(credential)) => Session::from_bare_credential(credential, policy),
    };

    let session = result.map(|session| {
        if session.avatar_ref().is_none() {
            session.with_avatar(store.get(USER_IMAGE_KEY))
        } else {
            session
        }
    });

    match session {
        Ok(session) if session.is_authenticated() => {
            tracing::debug!(
                role = %session.role(),
                subject = session.subject_id(),
                "session rehydrated"
            );
            session
        }
        Ok(_) => {
            tracing::warn!("stored session has no recognised role, signing out");
            store.clear_session();
            Session::anonymous()
        }
        Err(e) => {
            tracing::warn!(error = %e, "discarding stored session");
            store.clear_session();
            Session::anonymous()
        }
    }
}

fn session_from_record(
    raw: &str,
    credential: String,
    policy: MissingRolePolicy,
) -> Result<Session, AppError> {
    let record: UserRecord = serde_json::from_str(raw)
        .map_err(|e| AppError::malformed_session(format!("unparseable user record: {e}")))?;
    Session::from_record(&record, credential, policy)
}

fn first_present<S: CredentialStore>(store: &S, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| store.get(key))
        .find(|value| !value.trim().is_empty())
}

/// Write a successful login to the store, replacing whatever was there.
pub fn persist<S: CredentialStore>(store: &mut S, grant: &AuthGrant) -> Result<(), AppError> {
    let record = serde_json::to_string(&grant.user)
        .map_err(|e| AppError::internal(format!("failed to serialize user record: {e}")))?;

    store.clear_session();
    store.set(ACCESS_TOKEN_KEY, &grant.credential);
    if let Some(refresh) = &grant.refresh_credential {
        store.set(REFRESH_TOKEN_KEY, refresh);
    }
    store.set(USER_KEY, &record);
    Ok(())
}
