// src/common/response.rs

use serde::Serialize;
use utoipa::ToSchema;

// Envelope padrão de sucesso: { success, data, metadata? }
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PageMetadata>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub page: u32,
    pub page_size: u32,
    pub total: usize,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data, metadata: None }
    }

    pub fn with_metadata(data: T, metadata: PageMetadata) -> Self {
        Self { success: true, data, metadata: Some(metadata) }
    }
}
