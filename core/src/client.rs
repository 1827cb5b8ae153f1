//! Stateless HTTP request builder and response parser for the todolist API.
//!
//! # Design
//! `TodolistClient` holds only the base URL and an optional API key and keeps
//! no state between calls. Each remote call is split into a `build_*` method
//! producing an `HttpRequest` and a `parse_*` method consuming an
//! `HttpResponse`. Parsing stops at the envelope: an envelope with a non-zero
//! `resultCode` is a successful parse, and deciding what it means is left to
//! the orchestration layer.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    ApiResponse, CreatedItem, Empty, ItemDto, ItemId, ItemsPage, ListDto, ListId, TitleInput,
    UpdateItemModel,
};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "API-KEY";

#[derive(Debug, Clone)]
pub struct TodolistClient {
    base_url: String,
    api_key: Option<String>,
}

impl TodolistClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let client = Self::new(&config.base_url);
        match &config.api_key {
            Some(key) => client.with_api_key(key.clone()),
            None => client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_lists(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todo-lists".to_string())
    }

    pub fn build_create_list(&self, title: &str) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/todo-lists".to_string(), &title_input(title))
    }

    pub fn build_delete_list(&self, list_id: &ListId) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/todo-lists/{list_id}"))
    }

    pub fn build_update_list(&self, list_id: &ListId, title: &str) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Put,
            format!("/todo-lists/{list_id}"),
            &title_input(title),
        )
    }

    pub fn build_get_items(&self, list_id: &ListId) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/todo-lists/{list_id}/tasks"))
    }

    pub fn build_create_item(&self, list_id: &ListId, title: &str) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Post,
            format!("/todo-lists/{list_id}/tasks"),
            &title_input(title),
        )
    }

    pub fn build_delete_item(&self, list_id: &ListId, item_id: &ItemId) -> HttpRequest {
        self.request(
            HttpMethod::Delete,
            format!("/todo-lists/{list_id}/tasks/{item_id}"),
        )
    }

    pub fn build_update_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        model: &UpdateItemModel,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Put,
            format!("/todo-lists/{list_id}/tasks/{item_id}"),
            model,
        )
    }

    pub fn parse_get_lists(&self, response: HttpResponse) -> Result<Vec<ListDto>, ApiError> {
        parse_body(response)
    }

    pub fn parse_create_list(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<CreatedItem<ListDto>>, ApiError> {
        parse_body(response)
    }

    pub fn parse_delete_list(&self, response: HttpResponse) -> Result<ApiResponse<Empty>, ApiError> {
        parse_body(response)
    }

    pub fn parse_update_list(&self, response: HttpResponse) -> Result<ApiResponse<Empty>, ApiError> {
        parse_body(response)
    }

    pub fn parse_get_items(&self, response: HttpResponse) -> Result<ItemsPage, ApiError> {
        parse_body(response)
    }

    pub fn parse_create_item(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<CreatedItem<ItemDto>>, ApiError> {
        parse_body(response)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<ApiResponse<Empty>, ApiError> {
        parse_body(response)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<ApiResponse<Empty>, ApiError> {
        parse_body(response)
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: self.base_headers(),
            body: None,
        }
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut request = self.request(method, path);
        request
            .headers
            .push(("content-type".to_string(), "application/json".to_string()));
        request.body = Some(body);
        Ok(request)
    }

    fn base_headers(&self) -> Vec<(String, String)> {
        match &self.api_key {
            Some(key) => vec![(API_KEY_HEADER.to_string(), key.clone())],
            None => Vec::new(),
        }
    }
}

fn title_input(title: &str) -> TitleInput {
    TitleInput {
        title: title.to_string(),
    }
}

/// Every endpoint answers 200; other statuses are transport-level failures.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn parse_body<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
