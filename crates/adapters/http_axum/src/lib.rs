//! # inventory-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON device API under `/api/v1/devices`
//! - Serve liveness and readiness probes under `/health`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map [`InventoryError`](inventory_domain::error::InventoryError) into
//!   `{status, message}` error bodies
//!
//! ## Dependency rule
//! Depends on `inventory-app` (for port traits and services) and
//! `inventory-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod health;
pub mod router;
pub mod state;
