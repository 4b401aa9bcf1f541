// src/handlers/vehicle.rs

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

use crate::{
    common::{
        error::{ApiError, AppError},
        response::{ApiResponse, PageMetadata},
    },
    config::AppState,
    middleware::i18n::Locale,
    models::vehicle::{
        FilterOptionsResponse, SortCriteria, TransmissionType, VehicleDetail, VehicleFilters,
        VehicleListRequest, VehicleListResponse, DEFAULT_PAGE_SIZE,
    },
};

// "Honda,Toyota" -> ["Honda", "Toyota"]
fn split_csv(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn negative_value_error() -> ValidationError {
    let mut err = ValidationError::new("range");
    err.add_param("min".into(), &0.0);
    err.message = Some("valorNegativo".into());
    err
}

// ---
// Query: listagem
// ---
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct VehicleListQuery {
    /// Marcas separadas por vírgula
    #[param(example = "Honda,Toyota")]
    pub marcas: Option<String>,

    /// Modelos separados por vírgula
    pub modelos: Option<String>,

    #[validate(range(min = 1900, message = "anoInvalido"))]
    pub ano_min: Option<i32>,

    #[validate(range(min = 1900, message = "anoInvalido"))]
    pub ano_max: Option<i32>,

    pub preco_min: Option<Decimal>,
    pub preco_max: Option<Decimal>,

    /// Tipos de câmbio separados por vírgula
    #[param(example = "Automático,CVT")]
    pub cambios: Option<String>,

    /// Rótulo ("Preço (menor para maior)") ou apelido ("preco_asc")
    pub ordenacao: Option<String>,

    #[validate(range(min = 1, message = "paginaInvalida"))]
    pub pagina: Option<u32>,

    #[validate(range(min = 1, max = 100, message = "itensPorPaginaInvalido"))]
    pub itens_por_pagina: Option<u32>,
}

impl VehicleListQuery {
    // Regras entre campos que o `validator` não expressa
    fn validate_consistency(&self) -> Result<(), AppError> {
        let mut errors = validator::ValidationErrors::new();
        if self.preco_min.is_some_and(|p| p.is_sign_negative()) {
            errors.add("preco_min", negative_value_error());
        }
        if self.preco_max.is_some_and(|p| p.is_sign_negative()) {
            errors.add("preco_max", negative_value_error());
        }
        if !errors.is_empty() {
            return Err(AppError::ValidationError(errors));
        }

        if let (Some(min), Some(max)) = (self.ano_min, self.ano_max) {
            if min > max {
                return Err(AppError::InvalidYearRange);
            }
        }
        if let (Some(min), Some(max)) = (self.preco_min, self.preco_max) {
            if min > max {
                return Err(AppError::InvalidPriceRange);
            }
        }
        Ok(())
    }

    fn into_request(self) -> Result<VehicleListRequest, AppError> {
        let cambios = split_csv(self.cambios.as_deref())
            .iter()
            .map(|c| c.parse::<TransmissionType>())
            .collect::<Result<Vec<_>, _>>()?;

        let ordenacao = match self.ordenacao.as_deref() {
            Some(value) if !value.trim().is_empty() => value.parse::<SortCriteria>()?,
            _ => SortCriteria::default(),
        };

        Ok(VehicleListRequest {
            filters: VehicleFilters {
                marcas: split_csv(self.marcas.as_deref()),
                modelos: split_csv(self.modelos.as_deref()),
                ano_min: self.ano_min,
                ano_max: self.ano_max,
                preco_min: self.preco_min,
                preco_max: self.preco_max,
                cambios,
            },
            ordenacao,
            pagina: self.pagina.unwrap_or(1),
            itens_por_pagina: self.itens_por_pagina.unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }
}

// GET /api/v1/external/vehicle
#[utoipa::path(
    get,
    path = "/api/v1/external/vehicle",
    tag = "Vehicle",
    params(VehicleListQuery),
    responses(
        (status = 200, description = "Lista paginada de veículos", body = VehicleListResponse),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn list_vehicles(
    State(app_state): State<AppState>,
    locale: Locale,
    query: Result<Query<VehicleListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {

    let Query(query) = query.map_err(|e| {
        AppError::MalformedRequest(e.body_text()).to_api_error(&locale, &app_state.i18n_store)
    })?;

    query.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    query.validate_consistency()
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let request = query.into_request()
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let data = app_state.vehicle_service.list(&request);

    tracing::debug!(total = data.total, pagina = data.pagina, "Listagem de veículos");

    let metadata = PageMetadata {
        page: data.pagina,
        page_size: data.itens_por_pagina,
        total: data.total,
    };
    Ok((StatusCode::OK, Json(ApiResponse::with_metadata(data, metadata))))
}

// GET /api/v1/external/vehicle/filter-options
#[utoipa::path(
    get,
    path = "/api/v1/external/vehicle/filter-options",
    tag = "Vehicle",
    responses(
        (status = 200, description = "Opções de filtro do catálogo", body = FilterOptionsResponse)
    )
)]
pub async fn get_filter_options(
    State(app_state): State<AppState>,
) -> impl IntoResponse {
    let options = app_state.vehicle_service.filter_options();
    (StatusCode::OK, Json(ApiResponse::ok(options)))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ModelsByBrandsQuery {
    /// Marcas separadas por vírgula. Ausente = todos os modelos.
    #[param(example = "Honda,Toyota")]
    pub marcas: Option<String>,
}

// GET /api/v1/external/vehicle/modelos-by-marcas
#[utoipa::path(
    get,
    path = "/api/v1/external/vehicle/modelos-by-marcas",
    tag = "Vehicle",
    params(ModelsByBrandsQuery),
    responses(
        (status = 200, description = "Modelos das marcas selecionadas", body = Vec<String>)
    )
)]
pub async fn get_modelos_by_marcas(
    State(app_state): State<AppState>,
    locale: Locale,
    query: Result<Query<ModelsByBrandsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {

    let Query(query) = query.map_err(|e| {
        AppError::MalformedRequest(e.body_text()).to_api_error(&locale, &app_state.i18n_store)
    })?;

    let marcas = split_csv(query.marcas.as_deref());
    let modelos = app_state.vehicle_service.models_by_brands(&marcas);

    Ok((StatusCode::OK, Json(ApiResponse::ok(modelos))))
}

// GET /api/v1/external/vehicle/{id}
#[utoipa::path(
    get,
    path = "/api/v1/external/vehicle/{id}",
    tag = "Vehicle",
    params(
        ("id" = String, Path, description = "Identificador do veículo")
    ),
    responses(
        (status = 200, description = "Detalhe completo do veículo", body = VehicleDetail),
        (status = 404, description = "Veículo não encontrado")
    )
)]
pub async fn get_vehicle_detail(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let detail = app_state
        .vehicle_service
        .get_detail(&id)
        .ok_or_else(|| AppError::VehicleNotFound.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(detail))))
}
