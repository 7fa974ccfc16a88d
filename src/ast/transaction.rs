use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ast::{Expression, Literal, ToReal};

/// Root value of every tree: exactly one of a [`Literal`] or an [`Expression`].
///
/// Trees are immutable once built. Cloning is shallow: literals copy their
/// payload, expressions bump the reference counts of their operands.
///
/// `==` is structural equality over the whole tree. It never builds an
/// `equal` node; use [`crate::combinators::equal`] for that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transaction {
    Literal(Literal),
    Expression(Expression),
}

impl Transaction {
    pub fn is_literal(&self) -> bool {
        matches!(self, Transaction::Literal(_))
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Transaction::Literal(l) => Some(l),
            Transaction::Expression(_) => None,
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Transaction::Literal(_) => None,
            Transaction::Expression(e) => Some(e),
        }
    }

    /// Text payload, if this is a text literal.
    pub fn as_text(&self) -> Option<&str> {
        self.as_literal().and_then(Literal::as_text)
    }

    pub(crate) fn node(self) -> Arc<Transaction> {
        Arc::new(self)
    }
}

impl From<Literal> for Transaction {
    fn from(l: Literal) -> Self {
        Transaction::Literal(l)
    }
}

impl From<Expression> for Transaction {
    fn from(e: Expression) -> Self {
        Transaction::Expression(e)
    }
}

impl From<&Transaction> for Transaction {
    fn from(t: &Transaction) -> Self {
        t.clone()
    }
}

impl From<Arc<Transaction>> for Transaction {
    fn from(t: Arc<Transaction>) -> Self {
        Arc::unwrap_or_clone(t)
    }
}

// Static coercion. These are the compile-time half of `fmt`: every host value
// a combinator accepts becomes a literal here, so no raw value reaches a node.

impl From<bool> for Transaction {
    fn from(b: bool) -> Self {
        Transaction::Literal(Literal::Flag(b))
    }
}

impl From<&str> for Transaction {
    fn from(s: &str) -> Self {
        Transaction::Literal(Literal::Text(s.to_string()))
    }
}

impl From<String> for Transaction {
    fn from(s: String) -> Self {
        Transaction::Literal(Literal::Text(s))
    }
}

impl From<&String> for Transaction {
    fn from(s: &String) -> Self {
        Transaction::Literal(Literal::Text(s.clone()))
    }
}

macro_rules! real_from {
    ($($t:ty),*) => {
        $(
            impl ToReal for $t {
                fn to_real(self) -> f64 {
                    self as f64
                }
            }

            impl From<$t> for Transaction {
                fn from(n: $t) -> Self {
                    Transaction::Literal(Literal::Real(n.to_real()))
                }
            }
        )*
    };
}

real_from!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// `None` coerces to the empty text literal.
impl<T: Into<Transaction>> From<Option<T>> for Transaction {
    fn from(x: Option<T>) -> Self {
        match x {
            Some(v) => v.into(),
            None => Transaction::Literal(Literal::Text(String::new())),
        }
    }
}
