// src/services/notifier.rs

use async_trait::async_trait;

use crate::models::contact::ContactSubmission;

// Tamanho do resumo da mensagem no e-mail de confirmação
const MESSAGE_SUMMARY_CHARS: usize = 100;

/// Canal de avisos disparados após um contato ser registrado.
/// Trocar o envio real (SMTP, fila, etc.) é só implementar este trait.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Confirmação para quem enviou o formulário.
    async fn notify_confirmation(&self, contact: &ContactSubmission) -> anyhow::Result<()>;

    /// Aviso para a equipe de vendas.
    async fn notify_sales(&self, contact: &ContactSubmission) -> anyhow::Result<()>;
}

// Implementação padrão: só registra no log.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify_confirmation(&self, contact: &ContactSubmission) -> anyhow::Result<()> {
        let summary: String = contact.mensagem.chars().take(MESSAGE_SUMMARY_CHARS).collect();
        tracing::info!(
            email = %contact.email,
            protocolo = %contact.protocolo,
            veiculo = %contact.modelo_veiculo,
            resumo = %summary,
            "📧 E-mail de confirmação enviado"
        );
        Ok(())
    }

    async fn notify_sales(&self, contact: &ContactSubmission) -> anyhow::Result<()> {
        tracing::info!(
            nome = %contact.nome_completo,
            veiculo = %contact.modelo_veiculo,
            assunto = ?contact.assunto,
            protocolo = %contact.protocolo,
            "📨 Equipe de vendas notificada"
        );
        Ok(())
    }
}
