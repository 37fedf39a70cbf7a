//! HTTP handler modules for the folio API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire the
//! service lock, delegate to [`ProjectService`](crate::service::ProjectService),
//! and return JSON responses. No business logic lives in handlers.

pub mod maintenance;
pub mod projects;
