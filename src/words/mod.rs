pub mod queue;
pub mod store;
pub mod validate;

pub use queue::CandidateQueue;
pub use store::{ApprovedWordStore, StoreError};
pub use validate::is_valid_word;
