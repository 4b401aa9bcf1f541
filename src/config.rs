// src/config.rs

use std::{env, sync::Arc};

use anyhow::Context;

use crate::{
    common::i18n::I18nStore,
    db::{ContactRepository, VehicleRepository},
    services::{
        CaptchaVerifier, ContactService, LogNotifier, Notifier, TokenPresenceCaptcha,
        VehicleService,
    },
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SHARE_BASE_URL: &str = "https://catalogo-carros.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    // Vazio = CORS permissivo (desenvolvimento)
    pub cors_origins: Vec<String>,
    pub share_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(),
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Lê o `.env` (se existir) e as variáveis de ambiente.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT inválida: {}", value))?,
            Err(_) => defaults.port,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            cors_origins,
            share_base_url: env::var("SHARE_BASE_URL").unwrap_or(defaults.share_base_url),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub i18n_store: Arc<I18nStore>,
    pub vehicle_service: VehicleService,
    pub contact_service: ContactService,
    pub captcha_verifier: Arc<dyn CaptchaVerifier>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_capabilities(config, Arc::new(LogNotifier), Arc::new(TokenPresenceCaptcha))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_capabilities(
        config: Config,
        notifier: Arc<dyn Notifier>,
        captcha_verifier: Arc<dyn CaptchaVerifier>,
    ) -> Self {
        let vehicle_repo = VehicleRepository::seeded();
        tracing::info!("🚗 Catálogo carregado com {} veículos", vehicle_repo.all().len());

        let vehicle_service = VehicleService::new(vehicle_repo, config.share_base_url.clone());
        let contact_service = ContactService::new(ContactRepository::new(), notifier);

        Self {
            config,
            i18n_store: Arc::new(I18nStore::new()),
            vehicle_service,
            contact_service,
            captcha_verifier,
        }
    }
}
