//! # LearnHub Core
//!
//! Core types shared by every LearnHub crate.
//!
//! - [`errors`]: the HTTP-facing [`AppError`] and its JSON body
//!
//! # Example
//!
//! ```ignore
//! use learnhub_core::AppError;
//!
//! let error = AppError::unauthorized("Invalid or expired token");
//! ```

pub mod errors;

pub use errors::{AppError, ErrorResponse};
