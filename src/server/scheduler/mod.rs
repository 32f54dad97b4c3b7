//! Cron jobs running alongside the HTTP server.

pub mod token_cleanup;
