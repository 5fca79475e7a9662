//! Support tickets.

use chrono::Utc;

use crate::server::{
    data::{store::JsonStore, ticket::TicketRepository},
    error::AppError,
    model::{
        audit::{Actor, AuditAction, CreateLogEntryParam},
        ticket::{OpenTicketParam, Ticket},
    },
};

pub struct TicketService<'a> {
    store: &'a JsonStore,
}

impl<'a> TicketService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Opens a ticket authored by the actor.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty subject or message
    pub async fn open(&self, actor: &Actor, param: OpenTicketParam) -> Result<Ticket, AppError> {
        if param.subject.is_empty() || param.message.is_empty() {
            return Err(AppError::BadRequest(
                "Subject and message are required".to_string(),
            ));
        }

        TicketRepository::new(self.store)
            .create(param, &actor.id, Utc::now(), |ticket| {
                CreateLogEntryParam::by(actor, AuditAction::TicketOpen).target(&ticket.id)
            })
            .await
    }

    pub async fn get_own(&self, actor: &Actor) -> Result<Vec<Ticket>, AppError> {
        TicketRepository::new(self.store).get_by_author(&actor.id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Ticket>, AppError> {
        TicketRepository::new(self.store).get_all().await
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No ticket with that id
    /// - `Err(AppError::BadRequest)` - Ticket already closed
    pub async fn close(&self, actor: &Actor, ticket_id: &str) -> Result<Ticket, AppError> {
        TicketRepository::new(self.store)
            .close(ticket_id, &actor.username, Utc::now(), |ticket| {
                CreateLogEntryParam::by(actor, AuditAction::TicketClose).target(&ticket.id)
            })
            .await
    }
}
