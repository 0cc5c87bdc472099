pub mod handlers;

pub use handlers::*;

use crate::service::ReconciliationService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 构建路由
pub fn router(service: Arc<ReconciliationService>) -> Router {
    let reconcile_routes = Router::new()
        .route("/api/recebimentos/:recebimento_id/conciliar", get(reconcile_receipt))
        .route("/api/recebimentos/:recebimento_id/conciliar/", get(reconcile_receipt))
        .route(
            "/api/recebimentos/:recebimento_id/conciliar.csv",
            get(export_reconciliation_csv),
        )
        .route("/api/conciliacoes/batch", post(batch_reconcile))
        .with_state(service);

    Router::new()
        .route("/health", get(health_check))
        .merge(reconcile_routes)
}
