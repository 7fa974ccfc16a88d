//! Primitive combinators.
//!
//! One function per [`Expression`] case and per literal kind. Each argument is
//! coerced through `Into<Transaction>`, so callers may pass host values
//! (`"counter"`, `10`, `true`, `None::<&str>`) or existing trees interchangeably.
//!
//! ```
//! use caustic_syntax::combinators::*;
//!
//! let bump = write("counter", add(read("counter"), 1));
//! assert_eq!(bump.to_string(), r#"write("counter", add(read("counter"), 1))"#);
//! ```

use std::sync::Arc;

use crate::ast::{Expression, Literal, ToReal, Transaction};

// Literals

pub fn flag(x: bool) -> Transaction {
    Transaction::Literal(Literal::Flag(x))
}

pub fn real(x: impl ToReal) -> Transaction {
    Transaction::Literal(Literal::Real(x.to_real()))
}

pub fn text(x: impl Into<String>) -> Transaction {
    Transaction::Literal(Literal::Text(x.into()))
}

pub const ZERO: Transaction = Transaction::Literal(Literal::Real(0.0));
pub const ONE: Transaction = Transaction::Literal(Literal::Real(1.0));
pub const HALF: Transaction = Transaction::Literal(Literal::Real(0.5));
pub const TWO: Transaction = Transaction::Literal(Literal::Real(2.0));
pub const E: Transaction = Transaction::Literal(Literal::Real(std::f64::consts::E));
pub const PI: Transaction = Transaction::Literal(Literal::Real(std::f64::consts::PI));
pub const EMPTY: Transaction = Transaction::Literal(Literal::Text(String::new()));

fn node(x: impl Into<Transaction>) -> Arc<Transaction> {
    let x: Transaction = x.into();
    x.node()
}

// Storage

pub fn read(key: impl Into<Transaction>) -> Transaction {
    Expression::Read { key: node(key) }.into()
}

pub fn write(key: impl Into<Transaction>, value: impl Into<Transaction>) -> Transaction {
    Expression::Write {
        key: node(key),
        value: node(value),
    }
    .into()
}

pub fn load(name: impl Into<Transaction>) -> Transaction {
    Expression::Load { name: node(name) }.into()
}

pub fn store(name: impl Into<Transaction>, value: impl Into<Transaction>) -> Transaction {
    Expression::Store {
        name: node(name),
        value: node(value),
    }
    .into()
}

pub fn prefetch(key: impl Into<Transaction>) -> Transaction {
    Expression::Prefetch { key: node(key) }.into()
}

// Control

pub fn branch(
    condition: impl Into<Transaction>,
    pass: impl Into<Transaction>,
    fail: impl Into<Transaction>,
) -> Transaction {
    Expression::Branch {
        condition: node(condition),
        pass: node(pass),
        fail: node(fail),
    }
    .into()
}

/// `branch` with the empty literal as the failure arm.
pub fn when(condition: impl Into<Transaction>, pass: impl Into<Transaction>) -> Transaction {
    branch(condition, pass, EMPTY)
}

pub fn repeat(condition: impl Into<Transaction>, body: impl Into<Transaction>) -> Transaction {
    Expression::Repeat {
        condition: node(condition),
        body: node(body),
    }
    .into()
}

pub fn cons(first: impl Into<Transaction>, second: impl Into<Transaction>) -> Transaction {
    Expression::Cons {
        first: node(first),
        second: node(second),
    }
    .into()
}

pub fn rollback(message: impl Into<Transaction>) -> Transaction {
    Expression::Rollback {
        message: node(message),
    }
    .into()
}

/// Sequences `first` and every item of `rest` left to right through `cons`.
///
/// `block(a, [b, c])` is `cons(cons(a, b), c)`.
pub fn block<T: Into<Transaction>>(
    first: impl Into<Transaction>,
    rest: impl IntoIterator<Item = T>,
) -> Transaction {
    rest.into_iter().fold(first.into(), |acc, x| cons(acc, x))
}

// Text

pub fn contains(value: impl Into<Transaction>, query: impl Into<Transaction>) -> Transaction {
    Expression::Contains {
        value: node(value),
        query: node(query),
    }
    .into()
}

pub fn length(value: impl Into<Transaction>) -> Transaction {
    Expression::Length { value: node(value) }.into()
}

pub fn slice(
    value: impl Into<Transaction>,
    lower: impl Into<Transaction>,
    higher: impl Into<Transaction>,
) -> Transaction {
    Expression::Slice {
        value: node(value),
        lower: node(lower),
        higher: node(higher),
    }
    .into()
}

pub fn matches(value: impl Into<Transaction>, regex: impl Into<Transaction>) -> Transaction {
    Expression::Matches {
        value: node(value),
        regex: node(regex),
    }
    .into()
}

pub fn index_of(value: impl Into<Transaction>, query: impl Into<Transaction>) -> Transaction {
    Expression::IndexOf {
        value: node(value),
        query: node(query),
    }
    .into()
}

/// Joins `first` and every item of `rest` left to right through `add`.
///
/// `concat(a, [b, c])` is `add(add(a, b), c)`.
pub fn concat<T: Into<Transaction>>(
    first: impl Into<Transaction>,
    rest: impl IntoIterator<Item = T>,
) -> Transaction {
    rest.into_iter().fold(first.into(), |acc, x| add(acc, x))
}

// Arithmetic

pub fn add(lhs: impl Into<Transaction>, rhs: impl Into<Transaction>) -> Transaction {
    Expression::Add {
        lhs: node(lhs),
        rhs: node(rhs),
    }
    .into()
}

pub fn sub(lhs: impl Into<Transaction>, rhs: impl Into<Transaction>) -> Transaction {
    Expression::Sub {
        lhs: node(lhs),
        rhs: node(rhs),
    }
    .into()
}

pub fn mul(lhs: impl Into<Transaction>, rhs: impl Into<Transaction>) -> Transaction {
    Expression::Mul {
        lhs: node(lhs),
        rhs: node(rhs),
    }
    .into()
}

pub fn div(lhs: impl Into<Transaction>, rhs: impl Into<Transaction>) -> Transaction {
    Expression::Div {
        lhs: node(lhs),
        rhs: node(rhs),
    }
    .into()
}

/// The `mod` case (`mod` is reserved in Rust).
pub fn modulo(lhs: impl Into<Transaction>, rhs: impl Into<Transaction>) -> Transaction {
    Expression::Mod {
        lhs: node(lhs),
        rhs: node(rhs),
    }
    .into()
}

pub fn pow(lhs: impl Into<Transaction>, rhs: impl Into<Transaction>) -> Transaction {
    Expression::Pow {
        lhs: node(lhs),
        rhs: node(rhs),
    }
    .into()
}

pub fn log(value: impl Into<Transaction>) -> Transaction {
    Expression::Log { value: node(value) }.into()
}

pub fn sin(value: impl Into<Transaction>) -> Transaction {
    Expression::Sin { value: node(value) }.into()
}

pub fn cos(value: impl Into<Transaction>) -> Transaction {
    Expression::Cos { value: node(value) }.into()
}

pub fn floor(value: impl Into<Transaction>) -> Transaction {
    Expression::Floor { value: node(value) }.into()
}

// Logic

pub fn both(lhs: impl Into<Transaction>, rhs: impl Into<Transaction>) -> Transaction {
    Expression::Both {
        lhs: node(lhs),
        rhs: node(rhs),
    }
    .into()
}

pub fn either(lhs: impl Into<Transaction>, rhs: impl Into<Transaction>) -> Transaction {
    Expression::Either {
        lhs: node(lhs),
        rhs: node(rhs),
    }
    .into()
}

pub fn negate(value: impl Into<Transaction>) -> Transaction {
    Expression::Negate { value: node(value) }.into()
}

pub fn equal(lhs: impl Into<Transaction>, rhs: impl Into<Transaction>) -> Transaction {
    Expression::Equal {
        lhs: node(lhs),
        rhs: node(rhs),
    }
    .into()
}

pub fn less(lhs: impl Into<Transaction>, rhs: impl Into<Transaction>) -> Transaction {
    Expression::Less {
        lhs: node(lhs),
        rhs: node(rhs),
    }
    .into()
}
