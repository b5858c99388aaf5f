//! # Blog Core
//!
//! The domain layer of the blog admin backend.
//! This crate contains the blog/topic rules, list query parsing and the
//! services driving them, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;
pub mod service;

pub use error::{DomainError, FieldErrors};
pub use service::{BlogService, TopicService};
