// src/db/contact_repo.rs

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;

use crate::{common::error::AppError, models::contact::ContactSubmission};

struct ContactStore {
    contacts: Vec<ContactSubmission>,
    // Próximo sequencial do protocolo. Só volta a 1 quando o processo reinicia.
    next_sequence: u32,
}

// Repositório de contatos em memória (append-only).
#[derive(Clone)]
pub struct ContactRepository {
    store: Arc<Mutex<ContactStore>>,
}

impl ContactRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(ContactStore {
                contacts: Vec::new(),
                next_sequence: 1,
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ContactStore>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::InternalServerError(anyhow!("Lock do repositório de contatos envenenado")))
    }

    /// Reserva o próximo sequencial e grava o registro montado com ele.
    /// As duas coisas acontecem sob o mesmo lock, então dois envios simultâneos
    /// nunca recebem o mesmo sequencial.
    pub fn insert_with<F>(&self, build: F) -> Result<ContactSubmission, AppError>
    where
        F: FnOnce(u32) -> ContactSubmission,
    {
        let mut store = self.lock()?;

        let sequence = store.next_sequence;
        let contact = build(sequence);
        store.contacts.push(contact.clone());
        store.next_sequence += 1;

        Ok(contact)
    }

    pub fn list(&self) -> Result<Vec<ContactSubmission>, AppError> {
        Ok(self.lock()?.contacts.clone())
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<ContactSubmission>, AppError> {
        Ok(self.lock()?.contacts.iter().find(|c| c.id == id).cloned())
    }
}

impl Default for ContactRepository {
    fn default() -> Self {
        Self::new()
    }
}
