//! reqwest implementation of [`AdminBackend`].

use flohmarkt_core::{
    Category, CategoryId, CategoryInput, Product, ProductId, ProductInput, User,
};
use reqwest::header::COOKIE;
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use super::{ActionReply, AdminBackend, ApiError};

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the marketplace backend.
#[derive(Clone)]
pub struct RestClient {
    /// HTTP client.
    client: Client,
    /// Backend base URL, always ending in `/`.
    base_url: Url,
    /// Backend session cookie value, forwarded on every request.
    session: Option<SecretString>,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url.as_str())
            .field("session", &self.session.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl RestClient {
    /// Create a new client for the backend at `base_url`.
    #[must_use]
    pub fn new(base_url: Url, session: Option<SecretString>) -> Self {
        Self {
            client: Client::new(),
            base_url: with_trailing_slash(base_url),
            session,
        }
    }

    /// The backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        let builder = self.client.request(method, url);
        Ok(match &self.session {
            Some(session) => builder.header(COOKIE, format!("session={}", session.expose_secret())),
            None => builder,
        })
    }

    /// Send a request and turn a non-2xx status into [`ApiError::Status`].
    ///
    /// With `parse_error_body` the JSON `error` field is attached to the error.
    async fn send(
        &self,
        builder: RequestBuilder,
        parse_error_body: bool,
    ) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = if parse_error_body {
            response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
        } else {
            None
        };
        warn!(status = status.as_u16(), error = ?message, "Backend returned an error status");

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let response = self.send(self.request(Method::GET, path)?, false).await?;
        let items: Vec<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        debug!(path, count = items.len(), "Fetched list");
        Ok(items)
    }

    async fn mutate(
        &self,
        method: Method,
        path: &str,
        body: Option<&(impl serde::Serialize + Sync)>,
    ) -> Result<Response, ApiError> {
        let mut builder = self.request(method, path)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(builder, true).await
    }

    async fn status_action(&self, path: &str) -> Result<ActionReply, ApiError> {
        let response = self.mutate(Method::POST, path, None::<&()>).await?;
        // A 2xx without a JSON body still counts as success.
        Ok(response.json::<ActionReply>().await.unwrap_or_default())
    }
}

impl AdminBackend for RestClient {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_list("/api/admin/products").await
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_list("/api/admin/users").await
    }

    #[instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_list("/api/categories").await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create_product(&self, input: &ProductInput) -> Result<(), ApiError> {
        self.mutate(Method::POST, "/api/products", Some(input))
            .await
            .map(drop)
    }

    #[instrument(skip(self, input), fields(product_id = %id))]
    async fn update_product(&self, id: ProductId, input: &ProductInput) -> Result<(), ApiError> {
        self.mutate(Method::PUT, &format!("/api/admin/products/{id}"), Some(input))
            .await
            .map(drop)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.mutate(Method::DELETE, &format!("/api/admin/products/{id}"), None::<&()>)
            .await
            .map(drop)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn approve_product(&self, id: ProductId) -> Result<ActionReply, ApiError> {
        self.status_action(&format!("/api/admin/products/{id}/approve"))
            .await
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn reject_product(&self, id: ProductId) -> Result<ActionReply, ApiError> {
        self.status_action(&format!("/api/admin/products/{id}/reject"))
            .await
    }

    #[instrument(skip(self))]
    async fn create_category(&self, name: &str) -> Result<(), ApiError> {
        let body = CategoryInput {
            name: name.to_string(),
        };
        self.mutate(Method::POST, "/api/admin/categories", Some(&body))
            .await
            .map(drop)
    }

    #[instrument(skip(self), fields(category_id = %id))]
    async fn rename_category(&self, id: CategoryId, name: &str) -> Result<(), ApiError> {
        let body = CategoryInput {
            name: name.to_string(),
        };
        self.mutate(Method::PUT, &format!("/api/admin/categories/{id}"), Some(&body))
            .await
            .map(drop)
    }

    #[instrument(skip(self), fields(category_id = %id))]
    async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError> {
        self.mutate(Method::DELETE, &format!("/api/admin/categories/{id}"), None::<&()>)
            .await
            .map(drop)
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = RestClient::new(Url::parse("http://backend:5000/market").unwrap(), None);
        assert_eq!(client.base_url().as_str(), "http://backend:5000/market/");
    }

    #[test]
    fn test_request_paths_keep_base_prefix() {
        let client = RestClient::new(Url::parse("http://backend:5000/market/").unwrap(), None);
        let request = client
            .request(Method::GET, "/api/categories")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://backend:5000/market/api/categories");
    }

    #[test]
    fn test_session_cookie_is_forwarded() {
        let client = RestClient::new(
            Url::parse("http://backend:5000").unwrap(),
            Some(SecretString::from("abc123")),
        );
        let request = client
            .request(Method::DELETE, "/api/admin/products/4")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(COOKIE).unwrap().to_str().unwrap(),
            "session=abc123"
        );
    }

    #[test]
    fn test_debug_redacts_session() {
        let client = RestClient::new(
            Url::parse("http://backend:5000").unwrap(),
            Some(SecretString::from("very-private-cookie")),
        );
        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("very-private-cookie"));
    }
}
