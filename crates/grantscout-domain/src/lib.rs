//! Grantscout Domain Layer
//!
//! Core data model for grant search results. This crate defines the canonical
//! record produced by normalization, the two-way grant classification, and the
//! loosely-typed raw item decoded straight out of model output.
//!
//! ## Key Concepts
//!
//! - **GrantRecord**: the canonical normalized unit of output. Every record
//!   has a non-empty field set and a confidence strictly above zero.
//! - **GrantType**: the source-script "補助金" (subsidy) / "助成金" (grant)
//!   distinction, restricted to exactly those two tags.
//! - **RawGrantItem**: what the model actually gave us - partially missing
//!   keys, alias keys, wrong types. Decoded once at the JSON boundary so the
//!   normalization logic downstream operates on named optional fields rather
//!   than repeated map lookups.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod raw;
pub mod record;

// Re-exports for convenience
pub use raw::RawGrantItem;
pub use record::{GrantRecord, GrantType};
