use futures::future::try_join_all;
use serde::Serialize;
use std::sync::Arc;

use super::reconciler::reconcile;
use crate::db::ReceiptRepository;
use crate::error::ServiceError;
use crate::models::DiscrepancyRecord;

/// 单个收货的对账结果
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptReconciliation {
    pub recebimento_id: i64,
    pub divergencias: Vec<DiscrepancyRecord>,
}

/// 对账服务: 加载快照 -> 执行三方对账
pub struct ReconciliationService {
    repository: Arc<dyn ReceiptRepository>,
}

impl ReconciliationService {
    pub fn new(repository: Arc<dyn ReceiptRepository>) -> Self {
        Self { repository }
    }

    /// 单个收货对账
    pub async fn reconcile_receipt(&self, receipt_id: i64) -> Result<Vec<DiscrepancyRecord>, ServiceError> {
        let Some(snapshot) = self.repository.load_snapshot(receipt_id).await? else {
            tracing::warn!("[Reconcile] Receipt {} not found", receipt_id);
            return Err(ServiceError::ReceiptNotFound(receipt_id));
        };

        tracing::info!(
            "[Reconcile] Receipt {}: 开始对账, {} 个物料",
            receipt_id,
            snapshot.material_ids().len()
        );

        let records = reconcile(
            &snapshot.planned,
            &snapshot.invoiced,
            &snapshot.received,
            &snapshot.materials,
        )
        .map_err(|e| {
            tracing::error!("[Reconcile] Receipt {}: {}", receipt_id, e);
            e
        })?;

        tracing::info!(
            "[Reconcile] Receipt {}: 对账完成, {} 条差异",
            receipt_id,
            records.len()
        );

        Ok(records)
    }

    /// 批量对账, 任一失败即返回错误; 结果顺序与输入一致
    pub async fn batch_reconcile(&self, receipt_ids: &[i64]) -> Result<Vec<ReceiptReconciliation>, ServiceError> {
        let tasks = receipt_ids.iter().map(|&receipt_id| async move {
            let divergencias = self.reconcile_receipt(receipt_id).await?;
            Ok::<_, ServiceError>(ReceiptReconciliation {
                recebimento_id: receipt_id,
                divergencias,
            })
        });

        try_join_all(tasks).await
    }
}
