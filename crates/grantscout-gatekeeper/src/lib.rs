//! Grantscout Gatekeeper
//!
//! Admission control for expensive upstream calls.
//!
//! The transport layer consults the [`SlidingWindowLimiter`] before each
//! model call and treats a denied admission as "reject or defer" - never as
//! a reason to queue or retry on its own. The limiter is global and
//! identity-agnostic: one process-wide ceiling, not a per-caller one.
//!
//! # Examples
//!
//! ```
//! use grantscout_gatekeeper::{AdmissionConfig, SlidingWindowLimiter};
//!
//! let limiter = SlidingWindowLimiter::new(AdmissionConfig::default().per_window);
//! let admission = limiter.allow();
//! assert!(admission.permitted);
//! ```

#![warn(missing_docs)]

mod config;
mod limiter;

pub use config::AdmissionConfig;
pub use limiter::{Admission, SlidingWindowLimiter};
