use std::sync::Arc;

use business::domain::access::current_user::{CurrentUser, RequestContext};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::http::header::AUTHORIZATION;
use poem::{Endpoint, Middleware, Request};
use serde::{Deserialize, Serialize};

tokio::task_local! {
    static CURRENT_USER: Option<CurrentUser>;
}

/// Claims carried by the session token issued at login: the user record
/// (`ci`, `rol`) plus the expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(flatten)]
    pub user: CurrentUser,
    pub exp: u64,
}

/// Verifies HS256 session tokens signed with `SECRET_KEY`.
pub struct TokenDecoder {
    key: Option<DecodingKey>,
    validation: Validation,
}

impl TokenDecoder {
    pub fn new(secret_key: Option<&str>) -> Self {
        Self {
            key: secret_key.map(|secret| DecodingKey::from_secret(secret.as_bytes())),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn decode(&self, token: &str) -> Result<CurrentUser, String> {
        let key = self.key.as_ref().ok_or("auth.secret_key_missing")?;
        let data = decode::<SessionClaims>(token, key, &self.validation)
            .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

        Ok(data.claims.user)
    }
}

/// The user of the request being handled, or `None` outside a request.
pub fn current_user() -> Option<CurrentUser> {
    CURRENT_USER.try_with(|user| user.clone()).ok().flatten()
}

/// Run `future` with `user` as the request's current user.
pub async fn with_current_user<F: Future>(user: Option<CurrentUser>, future: F) -> F::Output {
    CURRENT_USER.scope(user, future).await
}

/// Reads the current user set by [`CurrentUserMiddleware`].
pub struct TaskLocalRequestContext;

impl RequestContext for TaskLocalRequestContext {
    fn current_user(&self) -> Option<CurrentUser> {
        current_user()
    }
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolves the session user from the bearer token and keeps it available for
/// the rest of the request. Anonymous and invalid tokens are let through with
/// no user; endpoints decide what that means.
pub struct CurrentUserMiddleware {
    decoder: Arc<TokenDecoder>,
}

impl CurrentUserMiddleware {
    pub fn new(decoder: TokenDecoder) -> Self {
        Self {
            decoder: Arc::new(decoder),
        }
    }
}

impl<E: Endpoint> Middleware<E> for CurrentUserMiddleware {
    type Output = CurrentUserEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        CurrentUserEndpoint {
            inner: ep,
            decoder: self.decoder.clone(),
        }
    }
}

pub struct CurrentUserEndpoint<E> {
    inner: E,
    decoder: Arc<TokenDecoder>,
}

impl<E: Endpoint> Endpoint for CurrentUserEndpoint<E> {
    type Output = E::Output;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        let user = match bearer_token(&req) {
            Some(token) => match self.decoder.decode(token) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Session token rejected: {e}");
                    None
                }
            },
            None => None,
        };

        with_current_user(user, self.inner.call(req)).await
    }
}
