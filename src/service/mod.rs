pub mod reconciler;
pub mod reconciliation;

pub use reconciler::{classify, reconcile, MaterialLookup};
pub use reconciliation::{ReceiptReconciliation, ReconciliationService};
