//! The remote capability the orchestration layer talks to.
//!
//! `TodolistApi` is the eight-call contract of the todolist service.
//! `HttpTodolistApi` implements it by pairing `TodolistClient`'s
//! build/parse halves with a `Transport`.

use async_trait::async_trait;

use crate::client::TodolistClient;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    ApiResponse, CreatedItem, Empty, ItemDto, ItemId, ItemsPage, ListDto, ListId, UpdateItemModel,
};

#[async_trait]
pub trait TodolistApi: Send + Sync {
    async fn get_lists(&self) -> Result<Vec<ListDto>, ApiError>;

    async fn create_list(&self, title: &str) -> Result<ApiResponse<CreatedItem<ListDto>>, ApiError>;

    async fn delete_list(&self, list_id: &ListId) -> Result<ApiResponse<Empty>, ApiError>;

    async fn update_list(
        &self,
        list_id: &ListId,
        title: &str,
    ) -> Result<ApiResponse<Empty>, ApiError>;

    async fn get_items(&self, list_id: &ListId) -> Result<ItemsPage, ApiError>;

    async fn create_item(
        &self,
        list_id: &ListId,
        title: &str,
    ) -> Result<ApiResponse<CreatedItem<ItemDto>>, ApiError>;

    async fn delete_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
    ) -> Result<ApiResponse<Empty>, ApiError>;

    async fn update_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        model: &UpdateItemModel,
    ) -> Result<ApiResponse<Empty>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpTodolistApi<T = UreqTransport> {
    client: TodolistClient,
    transport: T,
}

impl HttpTodolistApi<UreqTransport> {
    pub fn new(client: TodolistClient) -> Self {
        Self::with_transport(client, UreqTransport::new())
    }
}

impl<T: Transport> HttpTodolistApi<T> {
    pub fn with_transport(client: TodolistClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &TodolistClient {
        &self.client
    }
}

#[async_trait]
impl<T: Transport> TodolistApi for HttpTodolistApi<T> {
    async fn get_lists(&self) -> Result<Vec<ListDto>, ApiError> {
        let response = self.transport.execute(self.client.build_get_lists()).await?;
        self.client.parse_get_lists(response)
    }

    async fn create_list(&self, title: &str) -> Result<ApiResponse<CreatedItem<ListDto>>, ApiError> {
        let request = self.client.build_create_list(title)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create_list(response)
    }

    async fn delete_list(&self, list_id: &ListId) -> Result<ApiResponse<Empty>, ApiError> {
        let request = self.client.build_delete_list(list_id);
        let response = self.transport.execute(request).await?;
        self.client.parse_delete_list(response)
    }

    async fn update_list(
        &self,
        list_id: &ListId,
        title: &str,
    ) -> Result<ApiResponse<Empty>, ApiError> {
        let request = self.client.build_update_list(list_id, title)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_update_list(response)
    }

    async fn get_items(&self, list_id: &ListId) -> Result<ItemsPage, ApiError> {
        let request = self.client.build_get_items(list_id);
        let response = self.transport.execute(request).await?;
        self.client.parse_get_items(response)
    }

    async fn create_item(
        &self,
        list_id: &ListId,
        title: &str,
    ) -> Result<ApiResponse<CreatedItem<ItemDto>>, ApiError> {
        let request = self.client.build_create_item(list_id, title)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create_item(response)
    }

    async fn delete_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
    ) -> Result<ApiResponse<Empty>, ApiError> {
        let request = self.client.build_delete_item(list_id, item_id);
        let response = self.transport.execute(request).await?;
        self.client.parse_delete_item(response)
    }

    async fn update_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        model: &UpdateItemModel,
    ) -> Result<ApiResponse<Empty>, ApiError> {
        let request = self.client.build_update_item(list_id, item_id, model)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_update_item(response)
    }
}
