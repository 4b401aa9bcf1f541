// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

// Erro interno da aplicação. Os handlers convertem em `ApiError` com o idioma da requisição.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Requisição malformada: {0}")]
    MalformedRequest(String),

    #[error("Ano mínimo maior que o ano máximo")]
    InvalidYearRange,

    #[error("Preço mínimo maior que o preço máximo")]
    InvalidPriceRange,

    #[error("Critério de ordenação inválido: {0}")]
    InvalidSortCriteria(String),

    #[error("Tipo de câmbio inválido: {0}")]
    InvalidTransmission(String),

    // Detalhe do veículo (GET /vehicle/{id}) -> 404
    #[error("Veículo não encontrado")]
    VehicleNotFound,

    // Contato referenciando um veículo fora do catálogo -> 400
    #[error("Veículo informado não existe no catálogo")]
    VehicleNotInCatalog,

    #[error("Contato não encontrado")]
    ContactNotFound,

    #[error("Captcha inválido")]
    InvalidCaptcha,

    #[error("Termos de privacidade não aceitos")]
    PrivacyTermsNotAccepted,

    // `anyhow::Error` guarda o contexto do erro para o log.
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::VehicleNotFound | AppError::ContactNotFound => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Código estável exposto ao cliente.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_)
            | AppError::MalformedRequest(_)
            | AppError::InvalidSortCriteria(_)
            | AppError::InvalidTransmission(_)
            | AppError::PrivacyTermsNotAccepted => "VALIDATION_ERROR",
            AppError::InvalidYearRange => "INVALID_YEAR_RANGE",
            AppError::InvalidPriceRange => "INVALID_PRICE_RANGE",
            AppError::VehicleNotFound | AppError::VehicleNotInCatalog => "VEHICLE_NOT_FOUND",
            AppError::ContactNotFound => "CONTACT_NOT_FOUND",
            AppError::InvalidCaptcha => "INVALID_CAPTCHA",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    // Chave de tradução no I18nStore
    fn message_key(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validationFailed",
            AppError::MalformedRequest(_) => "malformedRequest",
            AppError::InvalidYearRange => "anoMinCannotBeGreaterThanAnoMax",
            AppError::InvalidPriceRange => "precoMinCannotBeGreaterThanPrecoMax",
            AppError::InvalidSortCriteria(_) => "ordenacaoInvalida",
            AppError::InvalidTransmission(_) => "cambioInvalido",
            AppError::VehicleNotFound => "vehicleNotFound",
            AppError::VehicleNotInCatalog => "veiculoNaoEncontrado",
            AppError::ContactNotFound => "contactNotFound",
            AppError::InvalidCaptcha => "captchaInvalido",
            AppError::PrivacyTermsNotAccepted => "termosPrivacidadeDevemSerAceitos",
            AppError::InternalServerError(_) => "internalServerError",
        }
    }

    /// Traduz o erro para a resposta HTTP no idioma pedido.
    pub fn to_api_error(&self, locale: &Locale, i18n_store: &I18nStore) -> ApiError {
        let lang = locale.0.as_str();

        let details = match self {
            AppError::ValidationError(errors) => {
                let mut details: HashMap<String, Vec<String>> = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages = field_errors
                        .iter()
                        .map(|e| {
                            let key = e.message.as_deref().unwrap_or(&*e.code);
                            i18n_store.translate(lang, key)
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                Some(json!(details))
            }
            AppError::MalformedRequest(reason) => Some(json!({ "reason": reason })),
            AppError::InvalidSortCriteria(value) => Some(json!({ "ordenacao": value })),
            AppError::InvalidTransmission(value) => Some(json!({ "cambios": value })),
            AppError::InternalServerError(e) => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                None
            }
            _ => None,
        };

        ApiError {
            status: self.status(),
            code: self.code(),
            message: i18n_store.translate(lang, self.message_key()),
            details,
        }
    }
}

// Resposta de erro já traduzida, pronta para o cliente.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut error = json!({
            "code": self.code,
            "message": self.message,
        });
        if let Some(details) = self.details {
            error["details"] = details;
        }

        let body = Json(json!({
            "success": false,
            "error": error,
        }));
        (self.status, body).into_response()
    }
}

// Para quem não tem Locale à mão (ex.: fallback do router).
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default(), &I18nStore::default())
            .into_response()
    }
}
