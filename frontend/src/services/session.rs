use gloo::storage::{LocalStorage, Storage};

/// Key the host application stores the bearer token under
const TOKEN_STORAGE_KEY: &str = "token";

/// Credentials passed explicitly into the API client.
///
/// Read once at startup so components never touch browser storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    bearer_token: Option<String>,
}

impl SessionContext {
    pub fn new(bearer_token: Option<String>) -> Self {
        Self {
            bearer_token: bearer_token
                .map(|token| token.trim().to_string())
                .filter(|token| !token.is_empty()),
        }
    }

    /// Load the token the host application left in `localStorage`.
    ///
    /// Hosts store it either JSON-encoded or as a bare string.
    pub fn from_local_storage() -> Self {
        let token = LocalStorage::get::<String>(TOKEN_STORAGE_KEY)
            .ok()
            .or_else(|| LocalStorage::raw().get_item(TOKEN_STORAGE_KEY).ok().flatten());
        Self::new(token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer_token.is_some()
    }

    /// Value for the `Authorization` header, if any
    pub fn authorization_header(&self) -> Option<String> {
        self.bearer_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }
}
