//! Shop REST client
//!
//! Thin reqwest wrapper around the back-office endpoints with bearer
//! token storage. The token survives restarts in the platform data
//! dir so the console can re-open an authenticated session.

use std::sync::Arc;
use std::time::Duration;
use std::{fs, io, path::PathBuf};

use anyhow::{Result, anyhow};
use parking_lot::RwLock;
use reqwest::{Client, StatusCode, header};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use super::model::{
    Category, Credentials, Product, ProductDraft, SessionInfo, User, UserDraft,
};

const TOKEN_FILE: &str = "session.json";

const TIMEOUT: u64 = 30;

enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// REST client for the shop backend
///
/// Cheap to clone; the token cell is shared between clones so a
/// sign-in on one clone is visible to tasks holding another.
#[derive(Clone)]
pub struct ShopClient {
    http: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for ShopClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopClient")
            .field("base_url", &self.base_url)
            .field("token", &"<RwLock<Option<String>>>")
            .finish()
    }
}

impl ShopClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: trim_trailing_slash(base_url.into()),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a client carrying a previously saved token
    pub fn with_token(base_url: impl Into<String>, token: String) -> Self {
        let client = Self::new(base_url);
        client.set_token(token);
        client
    }

    pub fn set_token(&self, token: String) {
        *self.token.write() = Some(token);
    }

    pub fn clear_token(&self) {
        *self.token.write() = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    fn data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stockroom")
    }

    pub fn token_file_path() -> PathBuf {
        let data_dir = Self::data_dir();
        fs::create_dir_all(&data_dir).ok();
        data_dir.join(TOKEN_FILE)
    }

    /// Load a saved session token, if a previous run left one behind
    pub fn load_token_from_file() -> Option<String> {
        match fs::read_to_string(Self::token_file_path()) {
            Err(err) => {
                match err.kind() {
                    io::ErrorKind::NotFound => (),
                    other => error!("{:?}", other),
                }
                None
            }
            Ok(content) => match serde_json::from_str::<SessionInfo>(&content) {
                Err(err) => {
                    error!("{:?}", err);
                    None
                }
                Ok(session) => Some(session.token),
            },
        }
    }

    pub fn save_token_to_file(&self) {
        let Some(token) = self.token.read().clone() else {
            return;
        };
        let session = SessionInfo { token };
        match serde_json::to_string_pretty(&session) {
            Err(err) => error!("{:?}", err),
            Ok(content) => {
                if let Err(err) = fs::write(Self::token_file_path(), content) {
                    error!("{:?}", err);
                }
            }
        }
    }

    pub fn clean_token_file() {
        if let Err(err) = fs::remove_file(Self::token_file_path()) {
            match err.kind() {
                io::ErrorKind::NotFound => (),
                other => error!("{:?}", other),
            }
        }
    }

    // ======== Auth ========

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<SessionInfo> {
        let session: SessionInfo = self
            .request(Method::Post, "/auth/sign-in", Some(credentials))
            .await?;
        self.set_token(session.token.clone());
        Ok(session)
    }

    // ======== Users ========

    pub async fn users(&self) -> Result<Vec<User>> {
        self.request::<(), _>(Method::Get, "/users", None).await
    }

    pub async fn create_user(&self, draft: &UserDraft) -> Result<User> {
        self.request(Method::Post, "/users", Some(draft)).await
    }

    pub async fn update_user(&self, id: &str, draft: &UserDraft) -> Result<User> {
        self.request(Method::Put, &format!("/users/{}", id), Some(draft))
            .await
    }

    /// Disable a user account. The listing drops the row afterwards.
    pub async fn block_user(&self, id: &str) -> Result<()> {
        let _: Value = self
            .request::<(), _>(Method::Post, &format!("/users/{}/block", id), None)
            .await?;
        Ok(())
    }

    // ======== Products ========

    pub async fn products(&self) -> Result<Vec<Product>> {
        self.request::<(), _>(Method::Get, "/products", None).await
    }

    pub async fn product_by_id(&self, id: &str) -> Result<Product> {
        self.request::<(), _>(Method::Get, &format!("/products/{}", id), None)
            .await
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product> {
        self.request(Method::Post, "/products", Some(draft)).await
    }

    pub async fn update_product(&self, id: &str, draft: &ProductDraft) -> Result<Product> {
        self.request(Method::Put, &format!("/products/{}", id), Some(draft))
            .await
    }

    pub async fn delete_product(&self, id: &str) -> Result<()> {
        let _: Value = self
            .request::<(), _>(Method::Delete, &format!("/products/{}", id), None)
            .await?;
        Ok(())
    }

    // ======== Categories ========

    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.request::<(), _>(Method::Get, "/categories", None)
            .await
    }

    /// Fetch raw bytes, used for the product image cache
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Request failed: {}", e))?;
        if !response.status().is_success() {
            anyhow::bail!("Request failed with status {}", response.status());
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };

        builder = builder.header(header::ACCEPT, "application/json");
        if let Some(token) = self.token.read().clone() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| anyhow!("Request failed: {}", e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read response: {}", e))?;

        if !status.is_success() {
            debug!("{} {} -> {}: {}", url, status, status.as_u16(), text);
            anyhow::bail!("{}", error_message(status, &text));
        }

        // Mutation endpoints may answer with an empty body
        if text.trim().is_empty() {
            return serde_json::from_value(Value::Null)
                .map_err(|e| anyhow!("Unexpected empty response: {}", e));
        }
        serde_json::from_str(&text).map_err(|e| anyhow!("Malformed response: {}", e))
    }
}

/// Reduce an error response to the message shown to the operator.
/// The backend wraps failures as `{"statusCode": ..., "message": ...}`.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        match value.get("message") {
            Some(Value::String(message)) => return message.clone(),
            // Validation failures arrive as a message array
            Some(Value::Array(parts)) => {
                let joined = parts
                    .iter()
                    .filter_map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                if !joined.is_empty() {
                    return joined;
                }
            }
            _ => (),
        }
    }
    match status {
        StatusCode::UNAUTHORIZED => "Invalid credentials".to_string(),
        StatusCode::FORBIDDEN => "Forbidden".to_string(),
        _ => format!("Request failed with status {}", status.as_u16()),
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_backend_text() {
        let body = r#"{"statusCode": 400, "message": "email must be unique"}"#;
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, body),
            "email must be unique"
        );
    }

    #[test]
    fn error_message_joins_validation_arrays() {
        let body = r#"{"statusCode": 400, "message": ["name too short", "price invalid"]}"#;
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, body),
            "name too short, price invalid"
        );
    }

    #[test]
    fn error_message_falls_back_per_status() {
        assert_eq!(
            error_message(StatusCode::UNAUTHORIZED, "not json"),
            "Invalid credentials"
        );
        assert_eq!(error_message(StatusCode::FORBIDDEN, "{}"), "Forbidden");
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Request failed with status 500"
        );
    }

    #[test]
    fn base_url_loses_trailing_slashes() {
        let client = ShopClient::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn token_is_shared_between_clones() {
        let client = ShopClient::new("http://localhost:5000");
        let clone = client.clone();
        client.set_token("t-123".to_string());
        assert!(clone.has_token());
        clone.clear_token();
        assert!(!client.has_token());
    }
}
