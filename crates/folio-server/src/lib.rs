//! HTTP/JSON API server for folio project workspaces.
//!
//! Exposes CRUD endpoints for projects in a note-taking/research
//! application: listing, creation (with workspace directory provisioning),
//! and deletion (cascading removal of dependent rows plus best-effort
//! directory cleanup). This crate contains the server framework, API schema
//! types, error handling, and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
pub mod workspace;
