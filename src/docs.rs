// src/docs.rs

use utoipa::OpenApi;
use crate::common;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "Catálogo de Veículos API"),
    paths(
        // --- Vehicle ---
        handlers::vehicle::list_vehicles,
        handlers::vehicle::get_filter_options,
        handlers::vehicle::get_modelos_by_marcas,
        handlers::vehicle::get_vehicle_detail,

        // --- Contact ---
        handlers::contact::create_contact,
        handlers::contact::list_contacts,
        handlers::contact::get_contact,
    ),
    components(
        schemas(
            common::response::PageMetadata,

            // --- Vehicle ---
            models::vehicle::TransmissionType,
            models::vehicle::SortCriteria,
            models::vehicle::VehicleStatus,
            models::vehicle::FuelType,
            models::vehicle::BodyType,
            models::vehicle::ItemCategory,
            models::vehicle::VehicleOrigin,
            models::vehicle::DocumentStatus,
            models::vehicle::Vehicle,
            models::vehicle::VehicleListResponse,
            models::vehicle::FilterOptionsResponse,
            models::vehicle::VehiclePhoto,
            models::vehicle::VehicleSpecifications,
            models::vehicle::VehicleItem,
            models::vehicle::VehicleRevision,
            models::vehicle::VehicleIncident,
            models::vehicle::TechnicalReport,
            models::vehicle::VehicleHistory,
            models::vehicle::FinancingConditions,
            models::vehicle::DocumentationItem,
            models::vehicle::DocumentalStatus,
            models::vehicle::SaleConditions,
            models::vehicle::VehicleDetail,

            // --- Contact ---
            models::contact::ContactStatus,
            models::contact::ContactPreference,
            models::contact::BestTime,
            models::contact::ContactSubject,
            models::contact::ContactSubmission,
            models::contact::ContactCreateResponse,

            // --- Payloads ---
            handlers::contact::CreateContactPayload,
        )
    ),
    tags(
        (name = "Vehicle", description = "Catálogo, filtros e detalhe de veículos"),
        (name = "Contact", description = "Formulário de contato e consulta interna")
    )
)]
pub struct ApiDoc;
