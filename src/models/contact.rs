// src/models/contact.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- ENUMS ---

// Apenas `Novo` é atribuído hoje; os demais ficam para o painel administrativo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ContactStatus {
    Novo,
    #[serde(rename = "Em atendimento")]
    EmAtendimento,
    #[serde(rename = "Concluído")]
    Concluido,
    Cancelado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ContactPreference {
    Telefone,
    #[serde(rename = "E-mail")]
    Email,
    WhatsApp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BestTime {
    #[serde(rename = "Manhã")]
    Manha,
    Tarde,
    Noite,
    #[default]
    #[serde(rename = "Qualquer horário")]
    QualquerHorario,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ContactSubject {
    #[serde(rename = "Informações gerais")]
    InformacoesGerais,
    #[serde(rename = "Agendamento de test drive")]
    AgendamentoTestDrive,
    #[serde(rename = "Negociação de preço")]
    NegociacaoPreco,
    Financiamento,
    Outro,
}

// --- REGISTRO ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[schema(example = "contact_1718000000000_1")]
    pub id: String,
    #[schema(example = "2024061000001")]
    pub protocolo: String,
    pub nome_completo: String,
    pub email: String,
    pub telefone: String,
    pub preferencia_contato: ContactPreference,
    pub melhor_horario: BestTime,
    pub id_veiculo: String,
    pub modelo_veiculo: String,
    pub assunto: ContactSubject,
    pub mensagem: String,
    pub financiamento: bool,
    pub termos_privacidade: bool,
    pub receber_novidades: bool,
    pub data_envio: DateTime<Utc>,
    pub ip_usuario: String,
    pub status: ContactStatus,
}

/// Dados de um novo contato, já validados pela camada HTTP.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub nome_completo: String,
    pub email: String,
    pub telefone: String,
    pub preferencia_contato: ContactPreference,
    pub melhor_horario: BestTime,
    pub id_veiculo: String,
    pub modelo_veiculo: String,
    pub assunto: ContactSubject,
    pub mensagem: String,
    pub financiamento: bool,
    pub termos_privacidade: bool,
    pub receber_novidades: bool,
    pub ip_usuario: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactCreated {
    pub id: String,
    pub protocolo: String,
}

// Corpo devolvido ao frontend no POST
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactCreateResponse {
    #[schema(example = "2024061000001")]
    pub protocolo: String,
    #[schema(example = "contatoEnviadoComSucesso")]
    pub mensagem: String,
}
