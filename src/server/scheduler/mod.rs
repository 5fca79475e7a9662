//! Cron jobs running alongside the HTTP server.

pub mod sanction_expiry;
