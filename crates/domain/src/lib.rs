//! # inventory-domain
//!
//! Pure domain model for the device inventory service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Device** aggregate and its **`DeviceState`**
//! - Enforce invariants: required name/brand, in-use protection on detail
//!   changes and deletion, immutable creation time
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
