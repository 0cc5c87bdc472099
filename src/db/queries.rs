use crate::models::{Material, MaterialId, QuantityLine, Receipt};
use sqlx::postgres::PgExecutor;

/// 查询收货主表
pub async fn get_receipt<'e, E: PgExecutor<'e>>(
    executor: E,
    receipt_id: i64,
) -> Result<Option<Receipt>, sqlx::Error> {
    sqlx::query_as::<_, Receipt>(
        r#"
        SELECT id::bigint AS id,
               plano_compra_id::bigint AS plano_compra_id,
               nota_fiscal_id::bigint AS nota_fiscal_id,
               conferente_id::bigint AS conferente_id,
               data_recebimento,
               observacoes
        FROM core_recebimento
        WHERE id = $1
        "#
    )
    .bind(receipt_id)
    .fetch_optional(executor)
    .await
}

/// 查询采购计划明细 (计划数量)
pub async fn list_plan_lines<'e, E: PgExecutor<'e>>(
    executor: E,
    plan_id: i64,
) -> Result<Vec<QuantityLine>, sqlx::Error> {
    sqlx::query_as::<_, QuantityLine>(
        r#"
        SELECT material_id::bigint AS material_id,
               quantidade_prevista AS quantity
        FROM core_itemplanocompra
        WHERE plano_compra_id = $1
        ORDER BY id
        "#
    )
    .bind(plan_id)
    .fetch_all(executor)
    .await
}

/// 查询发票明细 (开票数量)
pub async fn list_invoice_lines<'e, E: PgExecutor<'e>>(
    executor: E,
    invoice_id: i64,
) -> Result<Vec<QuantityLine>, sqlx::Error> {
    sqlx::query_as::<_, QuantityLine>(
        r#"
        SELECT material_id::bigint AS material_id,
               quantidade AS quantity
        FROM core_itemnotafiscal
        WHERE nota_fiscal_id = $1
        ORDER BY id
        "#
    )
    .bind(invoice_id)
    .fetch_all(executor)
    .await
}

/// 查询收货清点明细 (实收数量)
pub async fn list_received_lines<'e, E: PgExecutor<'e>>(
    executor: E,
    receipt_id: i64,
) -> Result<Vec<QuantityLine>, sqlx::Error> {
    sqlx::query_as::<_, QuantityLine>(
        r#"
        SELECT material_id::bigint AS material_id,
               quantidade_contada AS quantity
        FROM core_itemrecebido
        WHERE recebimento_id = $1
        ORDER BY id
        "#
    )
    .bind(receipt_id)
    .fetch_all(executor)
    .await
}

/// 按ID列表批量查询物料
pub async fn list_materials<'e, E: PgExecutor<'e>>(
    executor: E,
    material_ids: &[MaterialId],
) -> Result<Vec<Material>, sqlx::Error> {
    if material_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, Material>(
        r#"
        SELECT id::bigint AS id, codigo_interno, descricao, unidade_medida
        FROM core_material
        WHERE id = ANY($1)
        "#
    )
    .bind(material_ids)
    .fetch_all(executor)
    .await
}
