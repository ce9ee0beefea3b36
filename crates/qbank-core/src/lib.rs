//! # qbank-core
//!
//! Core types, projection, and error types for the qbank question catalog.
//!
//! This crate provides the foundational types shared across all qbank crates:
//! - Entity structs for the subject index, question rows, and reports
//! - The record projector that shapes a question row for API clients
//! - Query filter and page response types
//! - The user list enum (bookmarks / done)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filters;
pub mod responses;
mod serde_helpers;

pub use entities::{Question, QuestionRow, ReportRecord, SubjectEntry};
pub use enums::UserList;
pub use errors::CoreError;
pub use filters::QuestionFilter;
pub use responses::{QuestionPage, SuccessResponse};
