// src/models/vehicle.rs

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::error::AppError;

// --- ENUMS ---
// Os rótulos em português são o contrato com o frontend.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum TransmissionType {
    Manual,
    #[serde(rename = "Automático")]
    Automatico,
    #[serde(rename = "CVT")]
    Cvt,
    #[serde(rename = "Semi-automático")]
    SemiAutomatico,
}

impl TransmissionType {
    pub const ALL: [TransmissionType; 4] = [
        TransmissionType::Manual,
        TransmissionType::Automatico,
        TransmissionType::Cvt,
        TransmissionType::SemiAutomatico,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransmissionType::Manual => "Manual",
            TransmissionType::Automatico => "Automático",
            TransmissionType::Cvt => "CVT",
            TransmissionType::SemiAutomatico => "Semi-automático",
        }
    }
}

impl FromStr for TransmissionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransmissionType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::InvalidTransmission(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SortCriteria {
    #[default]
    #[serde(rename = "Relevância")]
    Relevancia,
    #[serde(rename = "Preço (menor para maior)")]
    PrecoMenor,
    #[serde(rename = "Preço (maior para menor)")]
    PrecoMaior,
    #[serde(rename = "Ano (mais recente)")]
    AnoRecente,
    #[serde(rename = "Ano (mais antigo)")]
    AnoAntigo,
    #[serde(rename = "Modelo (A-Z)")]
    ModeloAz,
    #[serde(rename = "Modelo (Z-A)")]
    ModeloZa,
}

impl FromStr for SortCriteria {
    type Err = AppError;

    // Aceita o rótulo exibido no frontend ou o apelido curto (ex.: "preco_asc").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let criteria = match s.trim() {
            "Relevância" | "relevancia" | "relevance" => SortCriteria::Relevancia,
            "Preço (menor para maior)" | "preco_asc" => SortCriteria::PrecoMenor,
            "Preço (maior para menor)" | "preco_desc" => SortCriteria::PrecoMaior,
            "Ano (mais recente)" | "ano_desc" => SortCriteria::AnoRecente,
            "Ano (mais antigo)" | "ano_asc" => SortCriteria::AnoAntigo,
            "Modelo (A-Z)" | "modelo_asc" => SortCriteria::ModeloAz,
            "Modelo (Z-A)" | "modelo_desc" => SortCriteria::ModeloZa,
            other => return Err(AppError::InvalidSortCriteria(other.to_string())),
        };
        Ok(criteria)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum VehicleStatus {
    #[serde(rename = "Disponível")]
    Disponivel,
    Reservado,
    Vendido,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FuelType {
    Gasolina,
    Etanol,
    Flex,
    Diesel,
    #[serde(rename = "Elétrico")]
    Eletrico,
    #[serde(rename = "Híbrido")]
    Hibrido,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BodyType {
    Hatch,
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Picape,
    Minivan,
    #[serde(rename = "Conversível")]
    Conversivel,
    #[serde(rename = "Cupê")]
    Cupe,
    Wagon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ItemCategory {
    Conforto,
    #[serde(rename = "Segurança")]
    Seguranca,
    Tecnologia,
    Performance,
    #[serde(rename = "Estética")]
    Estetica,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum VehicleOrigin {
    Particular,
    #[serde(rename = "Concessionária")]
    Concessionaria,
    #[serde(rename = "Leilão")]
    Leilao,
    Importado,
    Locadora,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Regular,
    Pendente,
    #[serde(rename = "em andamento")]
    EmAndamento,
}

// --- CATÁLOGO ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Civic")]
    pub modelo: String,
    #[schema(example = "Honda")]
    pub marca: String,
    #[schema(example = 2023)]
    pub ano: i32,
    #[schema(example = 145000)]
    pub preco: Decimal,
    pub imagem_principal: String,
    pub quilometragem: Option<u32>,
    pub cambio: Option<TransmissionType>,
}

// --- LISTAGEM ---

/// Filtros já validados. Vetor vazio ou `None` = filtro inativo.
#[derive(Debug, Clone, Default)]
pub struct VehicleFilters {
    pub marcas: Vec<String>,
    pub modelos: Vec<String>,
    pub ano_min: Option<i32>,
    pub ano_max: Option<i32>,
    pub preco_min: Option<Decimal>,
    pub preco_max: Option<Decimal>,
    pub cambios: Vec<TransmissionType>,
}

#[derive(Debug, Clone)]
pub struct VehicleListRequest {
    pub filters: VehicleFilters,
    pub ordenacao: SortCriteria,
    pub pagina: u32,
    pub itens_por_pagina: u32,
}

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 100;

impl Default for VehicleListRequest {
    fn default() -> Self {
        Self {
            filters: VehicleFilters::default(),
            ordenacao: SortCriteria::default(),
            pagina: 1,
            itens_por_pagina: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListResponse {
    pub veiculos: Vec<Vehicle>,
    pub total: usize,
    pub pagina: u32,
    pub itens_por_pagina: u32,
    pub total_paginas: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FilterOptionsResponse {
    pub marcas: Vec<String>,
    pub modelos: Vec<String>,
    pub anos: Vec<i32>,
    pub cambios: Vec<TransmissionType>,
}

// --- DETALHE ---

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VehiclePhoto {
    pub url: String,
    pub legenda: Option<String>,
    pub principal: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSpecifications {
    pub marca: String,
    pub modelo: String,
    pub ano_fabricacao: i32,
    pub ano_modelo: i32,
    pub quilometragem: u32,
    pub combustivel: FuelType,
    pub cambio: TransmissionType,
    #[schema(example = "120 cv")]
    pub potencia: String,
    pub cor: String,
    pub portas: u8,
    pub carroceria: BodyType,
    #[schema(example = "1.8")]
    pub motor: String,
    pub final_placa: u8,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VehicleItem {
    pub nome: String,
    pub categoria: ItemCategory,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VehicleRevision {
    #[schema(example = "2023-06-15")]
    pub data: String,
    pub quilometragem: u32,
    pub local: String,
}

// Sinistro
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VehicleIncident {
    pub data: String,
    pub tipo: String,
    pub descricao: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalReport {
    pub data_inspecao: String,
    pub resultado_geral: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleHistory {
    pub procedencia: VehicleOrigin,
    pub proprietarios: u32,
    pub garantia: Option<String>,
    pub revisoes: Vec<VehicleRevision>,
    pub sinistros: Vec<VehicleIncident>,
    pub laudo_tecnico: Option<TechnicalReport>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancingConditions {
    pub entrada_minima: Decimal,
    pub taxa_juros: Decimal,
    pub prazo_maximo: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DocumentationItem {
    pub nome: String,
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DocumentalStatus {
    pub status: DocumentStatus,
    pub pendencias: Vec<String>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleConditions {
    pub formas_pagamento: Vec<String>,
    pub condicoes_financiamento: Option<FinancingConditions>,
    pub aceita_troca: bool,
    pub observacoes_venda: Option<String>,
    pub documentacao_necessaria: Vec<DocumentationItem>,
    pub situacao_documental: DocumentalStatus,
}

/// Visão completa de um anúncio. Montada a cada requisição, nunca armazenada.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetail {
    pub id: String,
    #[schema(example = "Honda Civic 2023")]
    pub titulo_anuncio: String,
    pub preco: Decimal,
    pub status_veiculo: VehicleStatus,
    pub fotos: Vec<VehiclePhoto>,
    pub especificacoes: VehicleSpecifications,
    pub itens_serie: Vec<VehicleItem>,
    pub opcionais: Vec<VehicleItem>,
    pub historico: VehicleHistory,
    pub condicoes_venda: SaleConditions,
    pub url_compartilhamento: String,
    pub veiculos_similares: Vec<Vehicle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_criteria_accepts_label_and_alias() {
        assert_eq!("Preço (menor para maior)".parse::<SortCriteria>().unwrap(), SortCriteria::PrecoMenor);
        assert_eq!("preco_asc".parse::<SortCriteria>().unwrap(), SortCriteria::PrecoMenor);
        assert_eq!("modelo_desc".parse::<SortCriteria>().unwrap(), SortCriteria::ModeloZa);
    }

    #[test]
    fn sort_criteria_rejects_unknown_value() {
        let err = "mais_barato".parse::<SortCriteria>().unwrap_err();
        assert!(matches!(err, AppError::InvalidSortCriteria(v) if v == "mais_barato"));
    }

    #[test]
    fn transmission_parses_labels() {
        assert_eq!("Automático".parse::<TransmissionType>().unwrap(), TransmissionType::Automatico);
        assert_eq!("cvt".parse::<TransmissionType>().unwrap(), TransmissionType::Cvt);
        assert!("Sequencial".parse::<TransmissionType>().is_err());
    }

    #[test]
    fn transmission_serializes_as_label() {
        let json = serde_json::to_string(&TransmissionType::SemiAutomatico).unwrap();
        assert_eq!(json, "\"Semi-automático\"");
    }
}
