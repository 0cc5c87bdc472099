use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 物料主键 (core_material.id)
pub type MaterialId = i64;

/// 物料主表 (Material)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub codigo_interno: String,
    pub descricao: String,
    pub unidade_medida: String, // m² / kg / par / un
}

/// 差异行展示所需的物料信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialInfo {
    pub code: String,
    pub description: String,
}

impl MaterialInfo {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

impl From<Material> for MaterialInfo {
    fn from(m: Material) -> Self {
        Self {
            code: m.codigo_interno,
            description: m.descricao,
        }
    }
}
