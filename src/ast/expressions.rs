use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ast::Transaction;

/// Operation node of a transaction tree.
///
/// Every operand is itself a [`Transaction`]; raw host values never appear
/// below this level. Operands are reference counted so that a sub-tree can be
/// folded into several parents (record keys do this heavily) without copying.
///
/// The variant and field names are the wire schema expected by the remote
/// store and must not be renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Expression {
    // Storage
    /// Value stored at `key`
    ///
    /// # Example
    /// ```text
    /// read("users@alice")
    /// ```
    Read { key: Arc<Transaction> },

    /// Stores `value` at `key`
    Write {
        key: Arc<Transaction>,
        value: Arc<Transaction>,
    },

    /// Value of the transaction-local variable `name`
    Load { name: Arc<Transaction> },

    /// Binds the transaction-local variable `name` to `value`
    Store {
        name: Arc<Transaction>,
        value: Arc<Transaction>,
    },

    /// Hints that `key` will be read, so the store can fetch it early
    Prefetch { key: Arc<Transaction> },

    // Control
    /// Conditional
    ///
    /// # Example
    /// ```text
    /// branch(less(read("n"), 10), write("n", 10), "")
    /// ```
    Branch {
        condition: Arc<Transaction>,
        pass: Arc<Transaction>,
        fail: Arc<Transaction>,
    },

    /// Evaluates `body` while `condition` holds
    Repeat {
        condition: Arc<Transaction>,
        body: Arc<Transaction>,
    },

    /// Sequencing: evaluates `first`, then `second`, yielding `second`
    Cons {
        first: Arc<Transaction>,
        second: Arc<Transaction>,
    },

    /// Aborts the enclosing transaction with `message`
    Rollback { message: Arc<Transaction> },

    // Text
    Contains {
        value: Arc<Transaction>,
        query: Arc<Transaction>,
    },
    Length { value: Arc<Transaction> },
    /// Substring `[lower, higher)`
    Slice {
        value: Arc<Transaction>,
        lower: Arc<Transaction>,
        higher: Arc<Transaction>,
    },
    Matches {
        value: Arc<Transaction>,
        regex: Arc<Transaction>,
    },
    IndexOf {
        value: Arc<Transaction>,
        query: Arc<Transaction>,
    },

    // Arithmetic
    /// Addition, or concatenation when either side is text
    Add {
        lhs: Arc<Transaction>,
        rhs: Arc<Transaction>,
    },
    Sub {
        lhs: Arc<Transaction>,
        rhs: Arc<Transaction>,
    },
    Mul {
        lhs: Arc<Transaction>,
        rhs: Arc<Transaction>,
    },
    Div {
        lhs: Arc<Transaction>,
        rhs: Arc<Transaction>,
    },
    Mod {
        lhs: Arc<Transaction>,
        rhs: Arc<Transaction>,
    },
    Pow {
        lhs: Arc<Transaction>,
        rhs: Arc<Transaction>,
    },
    /// Natural logarithm
    Log { value: Arc<Transaction> },
    Sin { value: Arc<Transaction> },
    Cos { value: Arc<Transaction> },
    Floor { value: Arc<Transaction> },

    // Logic
    /// Logical and
    Both {
        lhs: Arc<Transaction>,
        rhs: Arc<Transaction>,
    },
    /// Logical or
    Either {
        lhs: Arc<Transaction>,
        rhs: Arc<Transaction>,
    },
    /// Logical not
    Negate { value: Arc<Transaction> },
    Equal {
        lhs: Arc<Transaction>,
        rhs: Arc<Transaction>,
    },
    Less {
        lhs: Arc<Transaction>,
        rhs: Arc<Transaction>,
    },
}

impl Expression {
    /// Wire name of this case.
    pub fn name(&self) -> &'static str {
        use Expression::*;
        match self {
            Read { .. } => "read",
            Write { .. } => "write",
            Load { .. } => "load",
            Store { .. } => "store",
            Prefetch { .. } => "prefetch",
            Branch { .. } => "branch",
            Repeat { .. } => "repeat",
            Cons { .. } => "cons",
            Rollback { .. } => "rollback",
            Contains { .. } => "contains",
            Length { .. } => "length",
            Slice { .. } => "slice",
            Matches { .. } => "matches",
            IndexOf { .. } => "indexOf",
            Add { .. } => "add",
            Sub { .. } => "sub",
            Mul { .. } => "mul",
            Div { .. } => "div",
            Mod { .. } => "mod",
            Pow { .. } => "pow",
            Log { .. } => "log",
            Sin { .. } => "sin",
            Cos { .. } => "cos",
            Floor { .. } => "floor",
            Both { .. } => "both",
            Either { .. } => "either",
            Negate { .. } => "negate",
            Equal { .. } => "equal",
            Less { .. } => "less",
        }
    }

    /// Operands in wire order.
    pub fn operands(&self) -> Vec<&Transaction> {
        use Expression::*;
        match self {
            Read { key } | Prefetch { key } => vec![&**key],
            Load { name } => vec![&**name],
            Rollback { message } => vec![&**message],
            Write { key, value } => vec![&**key, &**value],
            Store { name, value } => vec![&**name, &**value],
            Branch {
                condition,
                pass,
                fail,
            } => vec![&**condition, &**pass, &**fail],
            Repeat { condition, body } => vec![&**condition, &**body],
            Cons { first, second } => vec![&**first, &**second],
            Contains { value, query } | IndexOf { value, query } => vec![&**value, &**query],
            Matches { value, regex } => vec![&**value, &**regex],
            Slice {
                value,
                lower,
                higher,
            } => vec![&**value, &**lower, &**higher],
            Length { value }
            | Log { value }
            | Sin { value }
            | Cos { value }
            | Floor { value }
            | Negate { value } => vec![&**value],
            Add { lhs, rhs }
            | Sub { lhs, rhs }
            | Mul { lhs, rhs }
            | Div { lhs, rhs }
            | Mod { lhs, rhs }
            | Pow { lhs, rhs }
            | Both { lhs, rhs }
            | Either { lhs, rhs }
            | Equal { lhs, rhs }
            | Less { lhs, rhs } => vec![&**lhs, &**rhs],
        }
    }
}
