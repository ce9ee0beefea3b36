//! Routes, handlers and request/response bodies.

pub mod handlers;
mod router;

pub use router::build_router;
