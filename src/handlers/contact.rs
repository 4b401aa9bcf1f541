// src/handlers/contact.rs

use std::sync::LazyLock;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    common::{
        error::{ApiError, AppError},
        response::ApiResponse,
    },
    config::AppState,
    middleware::{client_ip::ClientIp, i18n::Locale},
    models::contact::{
        BestTime, ContactCreateResponse, ContactPreference, ContactSubject, ContactSubmission,
        NewContact,
    },
};

// (11) 98765-4321 | 11987654321 | 11 3456-7890
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?\d{2}\)?\s?\d{4,5}-?\d{4}$").expect("regex de telefone inválida")
});

const SUCCESS_MESSAGE_KEY: &str = "contatoEnviadoComSucesso";

fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    if value.split_whitespace().count() < 2 {
        return Err(ValidationError::new("fullName")
            .with_message("nomeCompletoDeveConterNomeESobrenome".into()));
    }
    Ok(())
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if !PHONE_REGEX.is_match(value) {
        return Err(ValidationError::new("phone").with_message("telefoneInvalido".into()));
    }
    Ok(())
}

fn validate_privacy_terms(value: &bool) -> Result<(), ValidationError> {
    if !*value {
        return Err(ValidationError::new("privacyTerms")
            .with_message("termosPrivacidadeDevemSerAceitos".into()));
    }
    Ok(())
}

// ---
// Payload: formulário de contato
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactPayload {
    #[validate(
        length(min = 3, max = 100, message = "tamanhoInvalido"),
        custom(function = "validate_full_name")
    )]
    #[schema(example = "João Silva")]
    pub nome_completo: String,

    #[validate(
        email(message = "emailInvalido"),
        length(max = 100, message = "tamanhoInvalido")
    )]
    #[schema(example = "joao@example.com")]
    pub email: String,

    #[validate(
        length(min = 10, max = 20, message = "telefoneInvalido"),
        custom(function = "validate_phone")
    )]
    #[schema(example = "(11) 98765-4321")]
    pub telefone: String,

    pub preferencia_contato: ContactPreference,

    #[serde(default)]
    pub melhor_horario: Option<BestTime>,

    #[validate(length(min = 1, message = "required"))]
    pub id_veiculo: String,

    #[validate(length(min = 1, message = "required"))]
    pub modelo_veiculo: String,

    pub assunto: ContactSubject,

    #[validate(length(min = 10, max = 1000, message = "mensagemInvalida"))]
    pub mensagem: String,

    #[serde(default)]
    pub financiamento: bool,

    #[validate(custom(function = "validate_privacy_terms"))]
    pub termos_privacidade: bool,

    #[serde(default)]
    pub receber_novidades: bool,

    #[validate(length(min = 1, message = "required"))]
    pub captcha_token: String,
}

impl CreateContactPayload {
    fn into_new_contact(self, ip_usuario: String) -> NewContact {
        NewContact {
            nome_completo: self.nome_completo.trim().to_string(),
            email: self.email.trim().to_string(),
            telefone: self.telefone,
            preferencia_contato: self.preferencia_contato,
            melhor_horario: self.melhor_horario.unwrap_or_default(),
            id_veiculo: self.id_veiculo,
            modelo_veiculo: self.modelo_veiculo,
            assunto: self.assunto,
            mensagem: self.mensagem,
            financiamento: self.financiamento,
            termos_privacidade: self.termos_privacidade,
            receber_novidades: self.receber_novidades,
            ip_usuario,
        }
    }
}

// POST /api/v1/external/contact
#[utoipa::path(
    post,
    path = "/api/v1/external/contact",
    tag = "Contact",
    request_body = CreateContactPayload,
    responses(
        (status = 201, description = "Contato registrado", body = ContactCreateResponse),
        (status = 400, description = "Dados inválidos, captcha inválido ou veículo inexistente")
    )
)]
pub async fn create_contact(
    State(app_state): State<AppState>,
    locale: Locale,
    ClientIp(ip_usuario): ClientIp,
    payload: Result<Json<CreateContactPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {

    let Json(payload) = payload.map_err(|e| {
        AppError::MalformedRequest(e.body_text()).to_api_error(&locale, &app_state.i18n_store)
    })?;

    // Validação padrão do Validator
    payload.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    if !app_state.vehicle_service.exists(&payload.id_veiculo) {
        return Err(AppError::VehicleNotInCatalog.to_api_error(&locale, &app_state.i18n_store));
    }

    let captcha_ok = app_state
        .captcha_verifier
        .verify(&payload.captcha_token)
        .await
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;
    if !captcha_ok {
        return Err(AppError::InvalidCaptcha.to_api_error(&locale, &app_state.i18n_store));
    }

    let created = app_state
        .contact_service
        .create(payload.into_new_contact(ip_usuario))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let response = ContactCreateResponse {
        protocolo: created.protocolo,
        mensagem: SUCCESS_MESSAGE_KEY.to_string(),
    };

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(response))))
}

// GET /api/v1/internal/contact
#[utoipa::path(
    get,
    path = "/api/v1/internal/contact",
    tag = "Contact",
    responses(
        (status = 200, description = "Todos os contatos recebidos", body = Vec<ContactSubmission>)
    )
)]
pub async fn list_contacts(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let contacts = app_state
        .contact_service
        .list()
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(contacts))))
}

// GET /api/v1/internal/contact/{id}
#[utoipa::path(
    get,
    path = "/api/v1/internal/contact/{id}",
    tag = "Contact",
    params(
        ("id" = String, Path, description = "Identificador do contato")
    ),
    responses(
        (status = 200, description = "Contato encontrado", body = ContactSubmission),
        (status = 404, description = "Contato não encontrado")
    )
)]
pub async fn get_contact(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let contact = app_state
        .contact_service
        .get(&id)
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?
        .ok_or_else(|| AppError::ContactNotFound.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(contact))))
}
