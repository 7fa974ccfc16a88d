//! # Caustic Transaction Trees
//!
//! This module defines the tree a transaction is built into before it is
//! handed to the remote store. Nothing here executes; the types only describe
//! what the store should do.
//!
//! ## Architecture Overview
//!
//! - **[literal]** - Leaf values (flag, real, text)
//! - **[expressions]** - One case per store operation, operands are transactions
//! - **[transaction]** - The root type, plus the static half of value coercion
//!
//! ## Shape
//!
//! ```text
//! branch(less(read("counter"), 10), write("counter", add(read("counter"), 1)), rollback("limit"))
//! ```
//!
//! Every node above is a [`Transaction`]. `branch`, `less`, `read`, ... are
//! [`Expression`] cases; `"counter"`, `10` and `"limit"` are [`Literal`]s.
//!
//! ## Wire Format
//!
//! The serde representation is externally tagged and is exactly what the store
//! accepts:
//!
//! ```text
//! {"expression":{"read":{"key":{"literal":{"text":"counter"}}}}}
//! ```
pub mod expressions;
pub mod literal;
pub mod transaction;

pub use expressions::Expression;
pub use literal::{Literal, ToReal};
pub use transaction::Transaction;
