//! Route handlers, one module per API resource.

pub mod dashboard;
pub mod export;
pub mod tasks;
pub mod team;
pub mod templates;
