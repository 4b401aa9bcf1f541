// src/services/contact_service.rs

use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};

use crate::{
    common::error::AppError,
    db::ContactRepository,
    models::contact::{ContactCreated, ContactStatus, ContactSubmission, NewContact},
    services::notifier::Notifier,
};

#[derive(Clone)]
pub struct ContactService {
    repo: ContactRepository,
    notifier: Arc<dyn Notifier>,
}

impl ContactService {
    pub fn new(repo: ContactRepository, notifier: Arc<dyn Notifier>) -> Self {
        Self { repo, notifier }
    }

    /// Registra o contato e devolve id + protocolo.
    /// As notificações saem depois, em segundo plano, e nunca fazem o envio falhar.
    pub fn create(&self, request: NewContact) -> Result<ContactCreated, AppError> {
        if !request.termos_privacidade {
            return Err(AppError::PrivacyTermsNotAccepted);
        }

        let now = Local::now();
        let today = now.date_naive();
        let millis = now.timestamp_millis();
        let data_envio = now.with_timezone(&Utc);

        let contact = self.repo.insert_with(|sequence| ContactSubmission {
            id: format!("contact_{}_{}", millis, sequence),
            protocolo: generate_protocol(today, sequence),
            nome_completo: request.nome_completo,
            email: request.email,
            telefone: request.telefone,
            preferencia_contato: request.preferencia_contato,
            melhor_horario: request.melhor_horario,
            id_veiculo: request.id_veiculo,
            modelo_veiculo: request.modelo_veiculo,
            assunto: request.assunto,
            mensagem: request.mensagem,
            financiamento: request.financiamento,
            termos_privacidade: request.termos_privacidade,
            receber_novidades: request.receber_novidades,
            data_envio,
            ip_usuario: request.ip_usuario,
            status: ContactStatus::Novo,
        })?;

        tracing::info!(
            id = %contact.id,
            protocolo = %contact.protocolo,
            veiculo = %contact.id_veiculo,
            "✅ Contato registrado"
        );

        let created = ContactCreated {
            id: contact.id.clone(),
            protocolo: contact.protocolo.clone(),
        };
        self.dispatch_notifications(contact);

        Ok(created)
    }

    fn dispatch_notifications(&self, contact: ContactSubmission) {
        let notifier = Arc::clone(&self.notifier);

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(protocolo = %contact.protocolo, "Sem runtime tokio; notificações não enviadas");
            return;
        };

        runtime.spawn(async move {
            if let Err(e) = notifier.notify_confirmation(&contact).await {
                tracing::warn!(protocolo = %contact.protocolo, "Falha no e-mail de confirmação: {:?}", e);
            }
            if let Err(e) = notifier.notify_sales(&contact).await {
                tracing::warn!(protocolo = %contact.protocolo, "Falha ao notificar vendas: {:?}", e);
            }
        });
    }

    pub fn list(&self) -> Result<Vec<ContactSubmission>, AppError> {
        self.repo.list()
    }

    pub fn get(&self, id: &str) -> Result<Option<ContactSubmission>, AppError> {
        self.repo.find_by_id(id)
    }
}

/// `YYYYMMDD` + sequencial com 5 dígitos.
pub fn generate_protocol(date: NaiveDate, sequence: u32) -> String {
    format!("{}{:05}", date.format("%Y%m%d"), sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact::{BestTime, ContactPreference, ContactSubject};
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::mpsc;

    // Fake que repassa cada aviso para um canal
    struct RecordingNotifier {
        tx: mpsc::UnboundedSender<(&'static str, String)>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify_confirmation(&self, contact: &ContactSubmission) -> anyhow::Result<()> {
            let _ = self.tx.send(("confirmation", contact.protocolo.clone()));
            Ok(())
        }

        async fn notify_sales(&self, contact: &ContactSubmission) -> anyhow::Result<()> {
            let _ = self.tx.send(("sales", contact.protocolo.clone()));
            Ok(())
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn notify_confirmation(&self, _contact: &ContactSubmission) -> anyhow::Result<()> {
            Err(anyhow!("smtp fora do ar"))
        }

        async fn notify_sales(&self, _contact: &ContactSubmission) -> anyhow::Result<()> {
            Err(anyhow!("smtp fora do ar"))
        }
    }

    fn new_contact() -> NewContact {
        NewContact {
            nome_completo: "João Silva".into(),
            email: "joao@example.com".into(),
            telefone: "(11) 98765-4321".into(),
            preferencia_contato: ContactPreference::WhatsApp,
            melhor_horario: BestTime::Tarde,
            id_veiculo: "1".into(),
            modelo_veiculo: "Honda Civic 2023".into(),
            assunto: ContactSubject::InformacoesGerais,
            mensagem: "Gostaria de mais informações sobre este veículo".into(),
            financiamento: false,
            termos_privacidade: true,
            receber_novidades: false,
            ip_usuario: "192.168.1.1".into(),
        }
    }

    fn service_with(notifier: Arc<dyn Notifier>) -> ContactService {
        ContactService::new(ContactRepository::new(), notifier)
    }

    #[test]
    fn protocol_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(generate_protocol(date, 1), "2024030700001");
        assert_eq!(generate_protocol(date, 12345), "2024030712345");
    }

    #[tokio::test]
    async fn back_to_back_protocols_differ_only_in_sequence() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let service = service_with(Arc::new(RecordingNotifier { tx }));

        let first = service.create(new_contact()).unwrap();
        let second = service.create(new_contact()).unwrap();

        assert_eq!(first.protocolo.len(), 13);
        assert_eq!(first.protocolo[..8], second.protocolo[..8]);
        let a: u32 = first.protocolo[8..].parse().unwrap();
        let b: u32 = second.protocolo[8..].parse().unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, a + 1);
        assert_ne!(first.id, second.id);
        assert!(first.id.starts_with("contact_"));
        assert!(first.id.ends_with("_1"));
    }

    #[tokio::test]
    async fn stores_submission_with_status_new() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let service = service_with(Arc::new(RecordingNotifier { tx }));

        let created = service.create(new_contact()).unwrap();
        let stored = service.get(&created.id).unwrap().unwrap();

        assert_eq!(stored.status, ContactStatus::Novo);
        assert_eq!(stored.protocolo, created.protocolo);
        assert_eq!(stored.ip_usuario, "192.168.1.1");
        assert_eq!(service.list().unwrap().len(), 1);
        assert!(service.get("contact_0_0").unwrap().is_none());
    }

    #[tokio::test]
    async fn rejects_when_privacy_terms_not_accepted() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let service = service_with(Arc::new(RecordingNotifier { tx }));

        let mut request = new_contact();
        request.termos_privacidade = false;

        let err = service.create(request).unwrap_err();
        assert!(matches!(err, AppError::PrivacyTermsNotAccepted));
        assert!(service.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sends_confirmation_and_sales_notifications() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = service_with(Arc::new(RecordingNotifier { tx }));

        let created = service.create(new_contact()).unwrap();

        let first = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await.unwrap().unwrap();
        let second = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await.unwrap().unwrap();
        assert_eq!(first, ("confirmation", created.protocolo.clone()));
        assert_eq!(second, ("sales", created.protocolo));
    }

    #[tokio::test]
    async fn notifier_failure_does_not_fail_creation() {
        let service = service_with(Arc::new(FailingNotifier));

        let created = service.create(new_contact());
        assert!(created.is_ok());
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn creation_outside_runtime_still_stores() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let service = service_with(Arc::new(RecordingNotifier { tx }));

        assert!(service.create(new_contact()).is_ok());
        assert_eq!(service.list().unwrap().len(), 1);
    }
}
