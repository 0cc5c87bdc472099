use crate::error::{ReconcileError, ServiceError};
use crate::report;
use crate::service::{ReceiptReconciliation, ReconciliationService};
use axum::{
    extract::{Json, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 请求体: 收货ID列表
#[derive(Debug, Deserialize)]
pub struct BatchReconcileRequest {
    pub recebimento_ids: Vec<i64>,
}

/// 批量对账响应体
#[derive(Debug, Serialize)]
pub struct BatchReconcileResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    pub results: Option<Vec<ReceiptReconciliation>>,
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

/// 服务错误 -> HTTP 状态码 + 错误类别
fn classify_error(err: &ServiceError) -> (StatusCode, &'static str) {
    match err {
        ServiceError::ReceiptNotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        ServiceError::Reconcile(ReconcileError::UnresolvedMaterial { .. }) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "unresolved_material")
        }
        ServiceError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database"),
    }
}

fn error_response(err: ServiceError) -> Response {
    let (status, kind) = classify_error(&err);
    if status.is_server_error() {
        tracing::error!("Reconciliation failed: {}", err);
    }
    let body = ErrorResponse {
        error: err.to_string(),
        kind,
    };
    (status, Json(body)).into_response()
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 单个收货对账接口
pub async fn reconcile_receipt(
    State(service): State<Arc<ReconciliationService>>,
    Path(receipt_id): Path<i64>,
) -> Response {
    match service.reconcile_receipt(receipt_id).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 对账结果 CSV 导出
pub async fn export_reconciliation_csv(
    State(service): State<Arc<ReconciliationService>>,
    Path(receipt_id): Path<i64>,
) -> Response {
    let records = match service.reconcile_receipt(receipt_id).await {
        Ok(records) => records,
        Err(e) => return error_response(e),
    };

    match report::write_csv(&records, Vec::new()) {
        Ok(bytes) => {
            let disposition = format!("attachment; filename=\"conciliacao_{receipt_id}.csv\"");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Receipt {}: CSV export failed: {}", receipt_id, e);
            let body = ErrorResponse {
                error: format!("Error: {}", e),
                kind: "export",
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// 批量对账接口
pub async fn batch_reconcile(
    State(service): State<Arc<ReconciliationService>>,
    Json(req): Json<BatchReconcileRequest>,
) -> Response {
    match service.batch_reconcile(&req.recebimento_ids).await {
        Ok(results) => {
            let total: usize = results.iter().map(|r| r.divergencias.len()).sum();
            let response = BatchReconcileResponse {
                success: true,
                message: format!(
                    "Successfully reconciled {} receipts, {} discrepancies",
                    req.recebimento_ids.len(),
                    total
                ),
                kind: None,
                results: Some(results),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            let (status, kind) = classify_error(&e);
            if status.is_server_error() {
                tracing::error!("Batch reconciliation failed: {}", e);
            }
            let response = BatchReconcileResponse {
                success: false,
                message: format!("Error: {}", e),
                kind: Some(kind),
                results: None,
            };
            (status, Json(response)).into_response()
        }
    }
}
