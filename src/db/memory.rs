use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use super::repository::{ReceiptRepository, ReceiptSnapshot};

/// 内存实现 - 测试及离线演示使用
#[derive(Debug, Default)]
pub struct InMemoryReceiptRepository {
    snapshots: RwLock<HashMap<i64, ReceiptSnapshot>>,
}

impl InMemoryReceiptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, snapshot: ReceiptSnapshot) {
        let mut snapshots = self.snapshots.write().unwrap_or_else(|e| e.into_inner());
        snapshots.insert(snapshot.receipt.id, snapshot);
    }
}

#[async_trait]
impl ReceiptRepository for InMemoryReceiptRepository {
    async fn load_snapshot(&self, receipt_id: i64) -> Result<Option<ReceiptSnapshot>, sqlx::Error> {
        let snapshots = self.snapshots.read().unwrap_or_else(|e| e.into_inner());
        Ok(snapshots.get(&receipt_id).cloned())
    }
}
