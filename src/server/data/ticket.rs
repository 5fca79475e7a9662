//! Support ticket repository.

use chrono::{DateTime, Utc};
use entity::prelude::TicketStatus;

use crate::server::{
    data::{audit_log, store::JsonStore},
    error::AppError,
    model::{
        audit::CreateLogEntryParam,
        ticket::{OpenTicketParam, Ticket},
    },
};

pub struct TicketRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> TicketRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        param: OpenTicketParam,
        author_id: &str,
        now: DateTime<Utc>,
        audit: impl FnOnce(&Ticket) -> CreateLogEntryParam,
    ) -> Result<Ticket, AppError> {
        let ticket = entity::ticket::Model {
            id: uuid::Uuid::new_v4().to_string(),
            author_id: author_id.to_string(),
            subject: param.subject,
            message: param.message,
            status: TicketStatus::Open,
            created_at: now,
            closed_by: None,
            closed_at: None,
        };

        self.store
            .mutate(|document| {
                document.tickets.push(ticket.clone());
                let ticket = Ticket::from_entity(ticket);
                audit_log::record(document, audit(&ticket), now);
                Ok(ticket)
            })
            .await
    }

    /// Tickets opened by `author_id`, newest first.
    pub async fn get_by_author(&self, author_id: &str) -> Result<Vec<Ticket>, AppError> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .filter(|ticket| ticket.author_id == author_id)
            .collect())
    }

    /// All tickets, newest first.
    pub async fn get_all(&self) -> Result<Vec<Ticket>, AppError> {
        self.store
            .read(|document| {
                let mut tickets: Vec<Ticket> = document
                    .tickets
                    .iter()
                    .cloned()
                    .map(Ticket::from_entity)
                    .collect();
                tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                tickets
            })
            .await
    }

    /// Marks a ticket closed.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Ticket after closing
    /// - `Err(AppError::NotFound)` - No ticket with that id
    /// - `Err(AppError::BadRequest)` - Ticket is already closed
    pub async fn close(
        &self,
        ticket_id: &str,
        closed_by: &str,
        now: DateTime<Utc>,
        audit: impl FnOnce(&Ticket) -> CreateLogEntryParam,
    ) -> Result<Ticket, AppError> {
        self.store
            .mutate(|document| {
                let ticket = document
                    .tickets
                    .iter_mut()
                    .find(|ticket| ticket.id == ticket_id)
                    .ok_or_else(|| AppError::NotFound(format!("Ticket {} not found", ticket_id)))?;

                if ticket.status == TicketStatus::Closed {
                    return Err(AppError::BadRequest("Ticket is already closed".to_string()));
                }
                ticket.status = TicketStatus::Closed;
                ticket.closed_by = Some(closed_by.to_string());
                ticket.closed_at = Some(now);

                let ticket = Ticket::from_entity(ticket.clone());
                audit_log::record(document, audit(&ticket), now);
                Ok(ticket)
            })
            .await
    }
}
