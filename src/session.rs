//! SessionAuth: credential context and delegation state for daemon RPC calls
//!
//! The daemon authenticates every call with a composite credential string
//! passed as the first positional argument. Despite being called a "session
//! token" by the remote protocol, it is a plaintext concatenation of the
//! admin identity, the admin secret, and (while delegating) the impersonated
//! identity. No hashing happens here; deployments whose daemon expects a
//! hashed secret must hash it before constructing the context.

use crate::error::{ConnectError, Result};
use tracing::debug;

/// Credential context for one logical connection to one daemon instance.
///
/// Holds the endpoint address, the administrative identity and secret, and
/// the identity calls are currently issued on behalf of. The context is a
/// cheap value object: callers that run concurrent delegation scopes should
/// give each scope its own clone rather than share one instance behind a
/// lock (see the crate docs on concurrency).
///
/// # Example
///
/// ```
/// use nimbus_connect::SessionAuth;
///
/// # fn example() -> anyhow::Result<()> {
/// let mut session = SessionAuth::new("https://one.example/RPC2", "oneadmin", "secretpw")?;
/// assert_eq!(session.session_token(), "oneadmin:secretpw");
///
/// session.begin_delegation("alice");
/// assert_eq!(session.session_token(), "oneadmin:secretpw:alice");
///
/// session.end_delegation();
/// assert_eq!(session.session_token(), "oneadmin:secretpw");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SessionAuth {
    /// Address of the daemon's RPC endpoint. Immutable after construction.
    endpoint: String,

    /// The authenticating principal.
    admin_user: String,

    /// Secret paired with `admin_user`. May legitimately be empty.
    admin_password: String,

    /// The principal calls are issued on behalf of. Equals `admin_user`
    /// whenever no delegation is in effect.
    active_user: String,
}

impl SessionAuth {
    /// Create a credential context for `endpoint`, authenticating as
    /// `admin_user` with `admin_password`.
    ///
    /// The password may be empty (some deployments allow empty secrets) but
    /// must be supplied explicitly; there is no default.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::InvalidConfiguration`] if `endpoint` or
    /// `admin_user` is empty or whitespace-only.
    pub fn new(
        endpoint: impl Into<String>,
        admin_user: impl Into<String>,
        admin_password: impl Into<String>,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        let admin_user = admin_user.into();

        if endpoint.trim().is_empty() {
            return Err(ConnectError::InvalidConfiguration(
                "RPC endpoint cannot be empty".to_string(),
            ));
        }
        if admin_user.trim().is_empty() {
            return Err(ConnectError::InvalidConfiguration(
                "admin user cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            endpoint,
            active_user: admin_user.clone(),
            admin_user,
            admin_password: admin_password.into(),
        })
    }

    /// The daemon endpoint this context authenticates against.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The authenticating principal.
    pub fn admin_user(&self) -> &str {
        &self.admin_user
    }

    /// The principal calls are currently issued on behalf of.
    pub fn active_user(&self) -> &str {
        &self.active_user
    }

    /// Whether calls are currently issued on behalf of another identity.
    pub fn is_delegating(&self) -> bool {
        !self.active_user.trim().is_empty() && self.active_user != self.admin_user
    }

    /// Start issuing calls on behalf of `target`.
    ///
    /// The target is not validated against any allow-list; the daemon is the
    /// authority on whether the admin may impersonate it. A second call
    /// overwrites the previous target — delegation does not nest.
    pub fn begin_delegation(&mut self, target: impl Into<String>) {
        self.active_user = target.into();
        debug!(delegate = %self.active_user, "delegating calls on behalf of another identity");
    }

    /// Stop delegating and issue calls as the admin identity again.
    ///
    /// No-op when no delegation is active.
    pub fn end_delegation(&mut self) {
        if self.is_delegating() {
            debug!(admin = %self.admin_user, "ending delegation");
        }
        self.active_user = self.admin_user.clone();
    }

    /// The composite credential string the daemon expects as the first
    /// positional argument of every call.
    ///
    /// Derived on demand from the current state, never cached, so it always
    /// reflects the latest delegation scope:
    ///
    /// - not delegating → `"{admin_user}:{admin_password}"`
    /// - delegating     → `"{admin_user}:{admin_password}:{active_user}"`
    ///
    /// A whitespace-only or self-targeting delegation yields the
    /// non-delegated form.
    pub fn session_token(&self) -> String {
        if self.is_delegating() {
            format!(
                "{}:{}:{}",
                self.admin_user, self.admin_password, self.active_user
            )
        } else {
            format!("{}:{}", self.admin_user, self.admin_password)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SessionAuth {
        SessionAuth::new("https://one.example/RPC2", "oneadmin", "secretpw").unwrap()
    }

    #[test]
    fn fresh_context_uses_two_part_token() {
        let session = context();
        assert_eq!(session.session_token(), "oneadmin:secretpw");
        assert!(!session.is_delegating());
        assert_eq!(session.active_user(), "oneadmin");
    }

    #[test]
    fn delegation_appends_target_and_reverts_on_end() {
        let mut session = context();

        session.begin_delegation("alice");
        assert!(session.is_delegating());
        assert_eq!(session.session_token(), "oneadmin:secretpw:alice");

        session.end_delegation();
        assert!(!session.is_delegating());
        assert_eq!(session.session_token(), "oneadmin:secretpw");
    }

    #[test]
    fn second_delegation_overwrites_rather_than_stacks() {
        let mut session = context();

        session.begin_delegation("alice");
        session.begin_delegation("bob");
        assert_eq!(session.session_token(), "oneadmin:secretpw:bob");

        // One end_delegation is enough: there is no stack to unwind.
        session.end_delegation();
        assert_eq!(session.session_token(), "oneadmin:secretpw");
    }

    #[test]
    fn delegating_to_self_is_equivalent_to_not_delegating() {
        let mut session = context();
        session.begin_delegation("oneadmin");
        assert!(!session.is_delegating());
        assert_eq!(session.session_token(), "oneadmin:secretpw");
    }

    #[test]
    fn delegation_target_is_case_sensitive() {
        let mut session = context();
        session.begin_delegation("OneAdmin");
        assert_eq!(session.session_token(), "oneadmin:secretpw:OneAdmin");
    }

    #[test]
    fn blank_delegation_target_falls_back_to_admin_form() {
        let mut session = context();
        session.begin_delegation("   ");
        assert!(!session.is_delegating());
        assert_eq!(session.session_token(), "oneadmin:secretpw");
    }

    #[test]
    fn end_delegation_without_begin_is_a_noop() {
        let mut session = context();
        session.end_delegation();
        session.end_delegation();
        assert!(!session.is_delegating());
        assert_eq!(session.active_user(), "oneadmin");
        assert_eq!(session.session_token(), "oneadmin:secretpw");
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let result = SessionAuth::new("", "oneadmin", "secretpw");
        assert!(matches!(
            result,
            Err(ConnectError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn empty_admin_user_is_rejected() {
        let result = SessionAuth::new("https://one.example/RPC2", "", "secretpw");
        assert!(matches!(
            result,
            Err(ConnectError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn empty_password_is_accepted() {
        let session = SessionAuth::new("https://one.example/RPC2", "oneadmin", "").unwrap();
        assert_eq!(session.session_token(), "oneadmin:");
    }

    #[test]
    fn token_is_recomputed_not_cached() {
        let mut session = context();
        let before = session.session_token();
        session.begin_delegation("alice");
        let during = session.session_token();
        session.end_delegation();
        let after = session.session_token();

        assert_ne!(before, during);
        assert_eq!(before, after);
    }
}
