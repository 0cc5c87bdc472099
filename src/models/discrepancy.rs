use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 差异类型 (固定四种, 输出顺序即判定顺序)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscrepancyTag {
    ReceivedMoreThanInvoiced,
    ReceivedLessThanInvoiced,
    InvoiceDiffersFromPlan,
    MaterialNotInPlan,
}

impl DiscrepancyTag {
    pub const ALL: [DiscrepancyTag; 4] = [
        DiscrepancyTag::ReceivedMoreThanInvoiced,
        DiscrepancyTag::ReceivedLessThanInvoiced,
        DiscrepancyTag::InvoiceDiffersFromPlan,
        DiscrepancyTag::MaterialNotInPlan,
    ];

    /// 标签名 (与 JSON 输出一致)
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscrepancyTag::ReceivedMoreThanInvoiced => "RECEIVED_MORE_THAN_INVOICED",
            DiscrepancyTag::ReceivedLessThanInvoiced => "RECEIVED_LESS_THAN_INVOICED",
            DiscrepancyTag::InvoiceDiffersFromPlan => "INVOICE_DIFFERS_FROM_PLAN",
            DiscrepancyTag::MaterialNotInPlan => "MATERIAL_NOT_IN_PLAN",
        }
    }

    /// 界面展示用的葡语描述
    pub fn label(&self) -> &'static str {
        match self {
            DiscrepancyTag::ReceivedMoreThanInvoiced => "Recebido a mais que a NF",
            DiscrepancyTag::ReceivedLessThanInvoiced => "Recebido a menos que a NF",
            DiscrepancyTag::InvoiceDiffersFromPlan => "NF diferente do Plano de Compra",
            DiscrepancyTag::MaterialNotInPlan => "Item não consta no Plano de Compra",
        }
    }
}

/// 对账差异行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscrepancyRecord {
    #[serde(rename = "material_codigo")]
    pub material_code: String,
    #[serde(rename = "material_descricao")]
    pub material_description: String,
    #[serde(rename = "qtd_plano")]
    pub planned: BigDecimal,
    #[serde(rename = "qtd_nf")]
    pub invoiced: BigDecimal,
    #[serde(rename = "qtd_recebida")]
    pub received: BigDecimal,
    #[serde(rename = "tipo_divergencia")]
    pub tags: Vec<DiscrepancyTag>,
}
