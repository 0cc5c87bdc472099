pub mod discrepancy;
pub mod material;
pub mod quantity;
pub mod receipt;

pub use discrepancy::{DiscrepancyRecord, DiscrepancyTag};
pub use material::{Material, MaterialId, MaterialInfo};
pub use quantity::{QuantityLine, QuantityMap};
pub use receipt::Receipt;
