use async_trait::async_trait;

/// Decides whether a username/password pair may log in.
///
/// The login handler only depends on this trait, so a real user store can be
/// plugged in without touching token issuance.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one username/password pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new("test", "test")
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentials {
    async fn verify(&self, username: &str, password: &str) -> bool {
        !username.is_empty() && username == self.username && password == self.password
    }
}
