//! Types and pure domain logic shared between the frontend and any future
//! embedding of the family dashboard client.
//!
//! Everything in this crate is deterministic and free of I/O: wire models,
//! request payloads, derived aggregation (expense grouping, renovation
//! progress), agenda partitioning, the day-scoped shopping list, formatting,
//! form validation, and the session/navigation state machine.

pub mod agenda;
pub mod finance;
pub mod format;
pub mod models;
pub mod payloads;
pub mod session;
pub mod shopping;
pub mod validate;

pub use agenda::*;
pub use finance::*;
pub use format::*;
pub use models::*;
pub use payloads::*;
pub use session::*;
pub use shopping::{completion_expense_name, ShoppingItem, StoredShoppingList};
pub use validate::*;
