//! Persisted topic de-duplication state.
//!
//! The ledger remembers when each topic was last published so the selector
//! can skip topics still inside their cooldown window. State lives in a
//! single versioned JSON file owned exclusively by the scheduler loop.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ledger;

pub use ledger::{LEDGER_VERSION, TopicLedger};
