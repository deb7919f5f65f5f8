//! Reminder CRUD API for the Mind It PWA.
//!
//! A small HTTP/1.1 service routing requests over a single reminder
//! resource, persisting through Supabase and degrading to fabricated
//! offline responses whenever the store is unreachable.

pub mod api;
pub mod config;
pub mod logger;
pub mod server;
pub mod store;
