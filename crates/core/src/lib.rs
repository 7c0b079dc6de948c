//! # War-room Core
//!
//! Core business logic for the campaign war-room dashboard server.
//!
//! This crate turns a fixed directory of markdown documents into structured
//! records:
//! - Document reading with YAML front matter and HTML rendering
//! - The markdown extraction core (sections, outlines, tasks, templates)
//! - Derived-record services (tasks, dashboards, templates, team)
//! - Export formatting (CSV, markdown) and external-service stubs
//!
//! **No API concerns**: HTTP servers, response envelopes and OpenAPI
//! documentation belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod export;
pub mod parser;
pub mod services;
pub mod store;

pub use config::{resolve_docs_dir, validate_docs_dir, CoreConfig};
pub use document::{Document, DocumentStore, FrontMatter};
pub use error::{CampaignError, CampaignResult};
