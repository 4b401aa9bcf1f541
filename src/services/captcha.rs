// src/services/captcha.rs

use async_trait::async_trait;

#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> anyhow::Result<bool>;
}

// Aceita qualquer token não vazio. Substituir pela verificação do reCAPTCHA em produção.
#[derive(Debug, Clone, Default)]
pub struct TokenPresenceCaptcha;

#[async_trait]
impl CaptchaVerifier for TokenPresenceCaptcha {
    async fn verify(&self, token: &str) -> anyhow::Result<bool> {
        Ok(!token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_only_non_empty_tokens() {
        let captcha = TokenPresenceCaptcha;
        assert!(captcha.verify("03AGdBq2").await.unwrap());
        assert!(!captcha.verify("").await.unwrap());
    }
}
