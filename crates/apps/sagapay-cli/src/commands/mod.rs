//! CLI command implementations.

pub mod balance;
pub mod deposit;
pub mod sign;
pub mod status;
pub mod verify_webhook;
pub mod withdraw;

// Re-export command handlers
pub use balance::balance;
pub use deposit::deposit;
pub use sign::sign;
pub use status::status;
pub use verify_webhook::verify_webhook;
pub use withdraw::withdraw;
