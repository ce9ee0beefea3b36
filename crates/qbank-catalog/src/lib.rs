//! # qbank-catalog
//!
//! The query side of the question bank.
//!
//! - [`QuestionTable`]: an immutable in-memory question table with equality
//!   filtering, offset pagination, and distinct-value listings.
//! - [`Catalog`]: the subject index plus the currently active table. A
//!   subject switch loads the new table off to the side and publishes it with
//!   a single `Arc` swap, so queries never observe a half-loaded table and a
//!   failed load leaves the previous subject serving.
//! - [`UserStateStore`]: per-user bookmark/done sets and the report sink,
//!   held in process memory behind a mutex.

mod catalog;
pub mod error;
mod table;
mod user_state;

pub use catalog::{ActiveSubject, Catalog};
pub use error::CatalogError;
pub use table::{QuestionTable, page_bounds};
pub use user_state::UserStateStore;
