pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod report;
pub mod service;

pub use config::AppConfig;
pub use db::{create_pool, InMemoryReceiptRepository, PgReceiptRepository, ReceiptRepository};
pub use error::{ReconcileError, ServiceError};
pub use service::{reconcile, ReconciliationService};
