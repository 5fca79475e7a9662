//! Ticket factory for creating test support tickets.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::prelude::TicketStatus;

/// Creates an open ticket authored by `author_id`.
pub fn open_ticket(author_id: impl Into<String>) -> entity::ticket::Model {
    let id = next_id();
    entity::ticket::Model {
        id: format!("ticket-{}", id),
        author_id: author_id.into(),
        subject: format!("Ticket {}", id),
        message: "Need help".to_string(),
        status: TicketStatus::Open,
        created_at: Utc::now(),
        closed_by: None,
        closed_at: None,
    }
}
