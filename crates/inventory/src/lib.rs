pub mod error;
pub mod ledger;
pub mod memory;
pub mod version;

pub use error::{LedgerError, Result};
pub use ledger::{LedgerSnapshot, SeatLedger, SeatLedgerExt};
pub use memory::InMemorySeatLedger;
pub use version::Version;
