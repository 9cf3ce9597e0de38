/// Bearer credential for the remote board store.
///
/// Produced by the session-management collaborator and threaded into the
/// gateway at construction; opaque to this crate. Tests substitute a fake
/// token the same way.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn bearer_token(&self) -> &str {
        &self.token
    }
}
