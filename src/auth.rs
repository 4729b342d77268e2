//! Authentication stub. Remembers an email, verifies nothing.

use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
}

#[derive(Debug, Default)]
pub struct AuthSession {
    user: Option<User>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, email: impl Into<String>) {
        let email = email.into();
        info!(email = %email, "logged in");
        self.user = Some(User { email });
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(email = %user.email, "logged out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_anonymous() {
        let auth = AuthSession::new();
        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
    }

    #[test]
    fn login_stores_email() {
        let mut auth = AuthSession::new();
        auth.login("jane@example.com");
        assert!(auth.is_authenticated());
        assert_eq!(auth.user().unwrap().email, "jane@example.com");
    }

    #[test]
    fn logout_forgets_user() {
        let mut auth = AuthSession::new();
        auth.login("jane@example.com");
        auth.logout();
        assert!(!auth.is_authenticated());
    }
}
