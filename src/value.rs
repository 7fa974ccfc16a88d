use std::collections::HashMap;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use tracing::debug;

use crate::{
    ast::{Literal, Transaction},
    error::{Result, SyntaxError},
};

/// A host value whose type is only known at runtime.
///
/// Code generators and scripting bridges hand the builder values they decoded
/// from elsewhere (JSON, configuration, user input). [`fmt`] is the single
/// place such values become transactions; statically typed callers get the
/// same mapping for free through the `From` impls on [`Transaction`].
///
/// # Examples
///
/// ```
/// use caustic_syntax::value::{fmt, Value};
/// use caustic_syntax::combinators::{real, EMPTY};
///
/// assert_eq!(fmt(Value::Null).unwrap(), EMPTY);
/// assert_eq!(fmt(Value::Integer(3)).unwrap(), real(3));
/// assert!(fmt(Value::Array(vec![])).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,

    Boolean(bool),

    Integer(i64),

    Float(f64),

    /// Arbitrary precision number, narrowed to a real on conversion
    Decimal(Decimal),

    String(String),

    Array(Vec<Value>),

    Object(HashMap<String, Value>),

    /// An already built tree, passed through untouched
    Transaction(Transaction),
}

impl Value {
    /// Human-readable type name, used in conversion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Transaction(_) => "transaction",
        }
    }
}

/// Normalizes a host value into a transaction.
///
/// - null → the empty text literal
/// - transaction → itself
/// - string → text
/// - integer, float, decimal → real
/// - boolean → flag
/// - anything else → [`SyntaxError::TypeConversion`]
pub fn fmt(value: impl Into<Value>) -> Result<Transaction> {
    let value = value.into();
    match value {
        Value::Null => Ok(Transaction::Literal(Literal::Text(String::new()))),
        Value::Transaction(t) => Ok(t),
        Value::String(s) => Ok(Transaction::Literal(Literal::Text(s))),
        Value::Integer(n) => Ok(Transaction::Literal(Literal::Real(n as f64))),
        Value::Float(n) => Ok(Transaction::Literal(Literal::Real(n))),
        Value::Boolean(b) => Ok(Transaction::Literal(Literal::Flag(b))),
        Value::Decimal(d) => match d.to_f64() {
            Some(n) => Ok(Transaction::Literal(Literal::Real(n))),
            None => Err(unsupported(&value)),
        },
        Value::Array(_) | Value::Object(_) => Err(unsupported(&value)),
    }
}

fn unsupported(value: &Value) -> SyntaxError {
    debug!(type_name = value.type_name(), "rejected value during coercion");
    SyntaxError::TypeConversion {
        type_name: value.type_name(),
        value: format!("{:?}", value),
    }
}

impl TryFrom<Value> for Transaction {
    type Error = SyntaxError;

    fn try_from(value: Value) -> Result<Self> {
        fmt(value)
    }
}

impl TryFrom<serde_json::Value> for Transaction {
    type Error = SyntaxError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        fmt(value)
    }
}

impl From<Transaction> for Value {
    fn from(t: Transaction) -> Self {
        Value::Transaction(t)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(x: Option<T>) -> Self {
        x.map_or(Value::Null, Into::into)
    }
}

/// Convert serde_json::Value to a host value
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else {
                    n.as_f64().map_or(Value::Null, Value::Float)
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
