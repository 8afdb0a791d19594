//! # Spinboard Core
//!
//! Core geometry and shared types for Spinboard.
//! Provides the pure angle arithmetic that maps pointer movement onto shape
//! rotation, plus the error types and constants shared by the other crates.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{Error, Result};
pub use geometry::{pointer_angle, rotate_local, Point};
