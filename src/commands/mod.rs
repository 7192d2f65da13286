//! Backend API Wrappers
//!
//! Frontend bindings to the backend's JSON API, organized by domain.

mod auth;
mod item;

use async_trait::async_trait;
use log::debug;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;

use crate::error::ClientError;
use crate::models::{Category, Credentials, ItemId, ItemList};

// Re-export all public items
pub use auth::*;
pub use item::*;

/// Calls the UI makes against the backend
#[async_trait(?Send)]
pub trait TodoApi {
    async fn post_login_credentials(&self, credentials: &Credentials) -> Result<(), ClientError>;

    async fn get_todo_list_items(&self) -> Result<ItemList, ClientError>;

    async fn add_todo_list_item(&self, item_value: &str, category: Category) -> Result<(), ClientError>;

    async fn remove_item(&self, id: &ItemId) -> Result<(), ClientError>;
}

/// `TodoApi` over HTTP. Uses `fetch` when built for wasm32.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Every request carries the session cookie, also when the API base is
    /// on another origin than the page.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn get(&self, path: &str) -> Result<String, ClientError> {
        debug!("GET {}", path);
        let response = self.request(Method::GET, path).send().await?;
        read_body(path, response).await
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String, ClientError> {
        debug!("POST {}", path);
        let response = self.request(Method::POST, path).json(body).send().await?;
        read_body(path, response).await
    }
}

async fn read_body(path: &str, response: reqwest::Response) -> Result<String, ClientError> {
    let status = response.status();
    debug!("{} -> {}", path, status);
    check_status(status)?;
    Ok(response.text().await?)
}

/// Map a response status onto the error taxonomy
pub fn check_status(status: StatusCode) -> Result<(), ClientError> {
    if status == StatusCode::UNAUTHORIZED {
        Err(ClientError::Unauthorized)
    } else if !status.is_success() {
        Err(ClientError::Server { status: status.as_u16() })
    } else {
        Ok(())
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpApi {
    async fn post_login_credentials(&self, credentials: &Credentials) -> Result<(), ClientError> {
        self.post_json(LOGIN_PATH, credentials).await.map(|_| ())
    }

    async fn get_todo_list_items(&self) -> Result<ItemList, ClientError> {
        let body = self.get(LIST_ITEMS_PATH).await?;
        parse_item_list(&body)
    }

    async fn add_todo_list_item(&self, item_value: &str, category: Category) -> Result<(), ClientError> {
        self.post_json(ADD_ITEM_PATH, &NewItemArgs { item_value, category })
            .await
            .map(|_| ())
    }

    async fn remove_item(&self, id: &ItemId) -> Result<(), ClientError> {
        self.post_json(REMOVE_ITEM_PATH, &IdArgs { id }).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(StatusCode::OK), Ok(()));
        assert_eq!(check_status(StatusCode::NO_CONTENT), Ok(()));
        assert_eq!(check_status(StatusCode::UNAUTHORIZED), Err(ClientError::Unauthorized));
        assert_eq!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ClientError::Server { status: 500 })
        );
        assert_eq!(
            check_status(StatusCode::FORBIDDEN),
            Err(ClientError::Server { status: 403 })
        );
    }

    #[test]
    fn test_url_join() {
        let api = HttpApi::new("http://localhost:6543");
        assert_eq!(api.url(LIST_ITEMS_PATH), "http://localhost:6543/api/get_todo_list_items");
    }

    #[test]
    fn test_requests_go_to_configured_base() {
        let api = HttpApi::new("https://todo.example.com");

        let list = api.request(Method::GET, LIST_ITEMS_PATH).build().unwrap();
        assert_eq!(list.method(), &Method::GET);
        assert_eq!(list.url().as_str(), "https://todo.example.com/api/get_todo_list_items");

        let remove = api.request(Method::POST, REMOVE_ITEM_PATH).build().unwrap();
        assert_eq!(remove.method(), &Method::POST);
        assert_eq!(remove.url().as_str(), "https://todo.example.com/api/remove_item");
    }
}
