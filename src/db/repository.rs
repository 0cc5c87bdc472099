use async_trait::async_trait;
use indexmap::IndexSet;
use sqlx::PgPool;
use std::collections::HashMap;

use super::queries;
use crate::models::{MaterialId, MaterialInfo, QuantityMap, Receipt};

/// 单次对账所需的一致性快照
#[derive(Debug, Clone)]
pub struct ReceiptSnapshot {
    pub receipt: Receipt,
    pub planned: QuantityMap,
    pub invoiced: QuantityMap,
    pub received: QuantityMap,
    pub materials: HashMap<MaterialId, MaterialInfo>,
}

impl ReceiptSnapshot {
    /// 三个来源涉及的全部物料ID (保序去重)
    pub fn material_ids(&self) -> Vec<MaterialId> {
        union_ids(&self.planned, &self.invoiced, &self.received)
    }
}

fn union_ids(planned: &QuantityMap, invoiced: &QuantityMap, received: &QuantityMap) -> Vec<MaterialId> {
    let ids: IndexSet<MaterialId> = planned
        .material_ids()
        .chain(invoiced.material_ids())
        .chain(received.material_ids())
        .collect();
    ids.into_iter().collect()
}

/// 收货快照数据源
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// 收货不存在时返回 `Ok(None)`
    async fn load_snapshot(&self, receipt_id: i64) -> Result<Option<ReceiptSnapshot>, sqlx::Error>;
}

/// PostgreSQL 实现 (Django core_* 表)
pub struct PgReceiptRepository {
    pool: PgPool,
}

impl PgReceiptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReceiptRepository for PgReceiptRepository {
    async fn load_snapshot(&self, receipt_id: i64) -> Result<Option<ReceiptSnapshot>, sqlx::Error> {
        // 同一只读事务内读取, 保证三方数据一致
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let Some(receipt) = queries::get_receipt(&mut *tx, receipt_id).await? else {
            tx.rollback().await?;
            return Ok(None);
        };

        let plan_lines = queries::list_plan_lines(&mut *tx, receipt.plano_compra_id).await?;
        let invoice_lines = queries::list_invoice_lines(&mut *tx, receipt.nota_fiscal_id).await?;
        let received_lines = queries::list_received_lines(&mut *tx, receipt.id).await?;

        let planned = QuantityMap::from_lines(&plan_lines);
        let invoiced = QuantityMap::from_lines(&invoice_lines);
        let received = QuantityMap::from_lines(&received_lines);

        let ids = union_ids(&planned, &invoiced, &received);
        let materials: HashMap<MaterialId, MaterialInfo> = queries::list_materials(&mut *tx, &ids)
            .await?
            .into_iter()
            .map(|m| (m.id, MaterialInfo::from(m)))
            .collect();

        tx.commit().await?;

        tracing::debug!(
            "Receipt {}: 计划 {} 行, 发票 {} 行, 实收 {} 行, 物料 {}/{}",
            receipt_id,
            plan_lines.len(),
            invoice_lines.len(),
            received_lines.len(),
            materials.len(),
            ids.len()
        );

        Ok(Some(ReceiptSnapshot {
            receipt,
            planned,
            invoiced,
            received,
            materials,
        }))
    }
}
