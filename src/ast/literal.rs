use serde::{Deserialize, Serialize};

/// Leaf value of a transaction tree.
///
/// Serialized as a single-key object naming the variant, e.g. `{"real": 1.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Literal {
    /// Boolean flag
    Flag(bool),

    /// Double-precision real number
    ///
    /// Integers are carried as reals; the remote store has no integer type.
    Real(f64),

    /// UTF-8 text
    Text(String),
}

impl Literal {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Literal::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Literal::Real(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Literal::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Host numbers accepted as [`Literal::Real`].
///
/// Integers wider than 53 bits lose precision, as they would on the store.
pub trait ToReal {
    fn to_real(self) -> f64;
}
