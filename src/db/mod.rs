pub mod memory;
pub mod pool;
pub mod queries;
pub mod repository;

pub use memory::InMemoryReceiptRepository;
pub use pool::create_pool;
pub use repository::{PgReceiptRepository, ReceiptRepository, ReceiptSnapshot};
