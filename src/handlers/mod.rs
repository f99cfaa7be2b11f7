pub mod protected;
pub mod public;

use crate::auth::{CurrentUser, Principal};
use crate::error::ApiError;

/// The admin gate, evaluated fresh on every call. A missing principal and a
/// present-but-non-admin principal produce byte-identical denials so callers
/// cannot probe for account existence.
pub fn require_admin(current: &CurrentUser) -> Result<&Principal, ApiError> {
    match current.0.as_ref() {
        Some(principal) if principal.is_admin => Ok(principal),
        _ => Err(ApiError::forbidden("Unauthorized")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_admin() -> CurrentUser {
        CurrentUser(Some(Principal {
            user_id: 2,
            username: "visitor".to_string(),
            is_admin: false,
        }))
    }

    #[test]
    fn admin_passes_the_gate() {
        let current = CurrentUser(Some(Principal {
            user_id: 1,
            username: "admin".to_string(),
            is_admin: true,
        }));
        assert!(require_admin(&current).is_ok());
    }

    #[test]
    fn both_denials_share_one_response_shape() {
        let anonymous = require_admin(&CurrentUser(None)).unwrap_err();
        let forbidden = require_admin(&non_admin()).unwrap_err();

        assert_eq!(anonymous.status_code(), 403);
        assert_eq!(anonymous.status_code(), forbidden.status_code());
        assert_eq!(anonymous.to_json(), forbidden.to_json());
    }
}
