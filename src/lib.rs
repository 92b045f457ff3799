mod loader;
mod store;
mod transaction;

pub use loader::load;
pub use store::{DominantKind, StoreError, TransactionStore};
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
