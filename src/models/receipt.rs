use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 收货主表 (Recebimento) - 关联一个采购计划和一张发票
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Receipt {
    pub id: i64,
    pub plano_compra_id: i64,
    pub nota_fiscal_id: i64,
    pub conferente_id: i64,
    pub data_recebimento: DateTime<Utc>,
    pub observacoes: Option<String>,
}
