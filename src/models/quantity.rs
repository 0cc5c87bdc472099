use bigdecimal::{BigDecimal, Zero};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::MaterialId;

/// 明细行数量 - 计划/发票/收货三类明细统一查询成此结构
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuantityLine {
    pub material_id: MaterialId,
    pub quantity: BigDecimal,
}

/// 物料 -> 数量 映射
///
/// 缺失的物料按 0 处理 (不是错误): `get` 永远返回一个数量。
/// 键按插入顺序遍历。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantityMap {
    quantities: IndexMap<MaterialId, BigDecimal>,
}

impl QuantityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从明细行构建, 同一物料的多行数量累加
    pub fn from_lines(lines: &[QuantityLine]) -> Self {
        let mut map = Self::new();
        for line in lines {
            map.add(line.material_id, &line.quantity);
        }
        map
    }

    /// 设置某物料的数量 (覆盖)
    pub fn insert(&mut self, material_id: MaterialId, quantity: BigDecimal) {
        self.quantities.insert(material_id, quantity);
    }

    /// 累加某物料的数量
    pub fn add(&mut self, material_id: MaterialId, quantity: &BigDecimal) {
        *self
            .quantities
            .entry(material_id)
            .or_insert_with(BigDecimal::zero) += quantity;
    }

    /// 获取数量, 不存在时返回 0
    pub fn get(&self, material_id: MaterialId) -> BigDecimal {
        self.quantities
            .get(&material_id)
            .cloned()
            .unwrap_or_else(BigDecimal::zero)
    }

    pub fn contains(&self, material_id: MaterialId) -> bool {
        self.quantities.contains_key(&material_id)
    }

    pub fn material_ids(&self) -> impl Iterator<Item = MaterialId> + '_ {
        self.quantities.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

impl FromIterator<(MaterialId, BigDecimal)> for QuantityMap {
    fn from_iter<T: IntoIterator<Item = (MaterialId, BigDecimal)>>(iter: T) -> Self {
        Self {
            quantities: iter.into_iter().collect(),
        }
    }
}
