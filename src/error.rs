use thiserror::Error;

use crate::models::MaterialId;

/// 对账引擎错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("material {material_id} is not registered")]
    UnresolvedMaterial { material_id: MaterialId },
}

/// 对账服务错误
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Recebimento com ID {0} não encontrado.")]
    ReceiptNotFound(i64),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
