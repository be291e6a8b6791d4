//! # inventory-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRepository`: save, find and delete devices
//!   - `ReadinessProbe`: report whether backing services respond
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService`: create, get, update, list (filtered), delete
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `inventory-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
