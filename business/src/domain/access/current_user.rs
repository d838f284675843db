use serde::{Deserialize, Serialize};

/// The authenticated user attached to an inbound request, as carried in the
/// session token.
///
/// `role` keeps the raw value so that an unrecognized role can still be
/// reported; `Role::parse` interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub ci: String,
    #[serde(rename = "rol", default)]
    pub role: Option<String>,
}

impl CurrentUser {
    pub fn new(ci: impl Into<String>, role: Option<String>) -> Self {
        Self {
            ci: ci.into(),
            role,
        }
    }
}

/// Ambient request state. Implementations return `None` when called outside
/// the handling of a request or when the request is anonymous.
pub trait RequestContext: Send + Sync {
    fn current_user(&self) -> Option<CurrentUser>;
}

/// Context for callers that never run inside a request (jobs, scripts).
pub struct NoRequestContext;

impl RequestContext for NoRequestContext {
    fn current_user(&self) -> Option<CurrentUser> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_rol_field_from_session_record() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"ci":"12345678","rol":"Participante"}"#).unwrap();

        assert_eq!(user.ci, "12345678");
        assert_eq!(user.role.as_deref(), Some("Participante"));
    }

    #[test]
    fn should_accept_record_without_rol() {
        let user: CurrentUser = serde_json::from_str(r#"{"ci":"12345678"}"#).unwrap();

        assert_eq!(user.role, None);
    }

    #[test]
    fn should_have_no_user_without_request() {
        assert_eq!(NoRequestContext.current_user(), None);
    }
}
