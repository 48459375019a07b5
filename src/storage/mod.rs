//! JSON persistence for the dashboard document.

pub mod json_store;

pub use json_store::{default_document_path, DocumentStore, LoadStatus};
