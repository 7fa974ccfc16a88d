//! Derived operators.
//!
//! None of these add an expression case. Each is a fixed rewrite into the
//! primitive combinators, and the exact shape of every rewrite is part of the
//! wire contract: the store only ever sees the expanded tree.
//!
//! | Operator | Expansion |
//! |---|---|
//! | `abs(x)` | `branch(less(x, 0), sub(0, x), x)` |
//! | `ceil(x)` | `branch(equal(x, floor(x)), x, add(floor(x), 1))` |
//! | `round(x)` | `branch(less(sub(x, floor(x)), 0.5), floor(x), ceil(x))` |
//! | `trunc(x)` | `branch(less(x, 0), ceil(x), floor(x))` |
//! | `le(x, y)` | `either(less(x, y), equal(x, y))` |
//! | `gt(x, y)` | `negate(either(less(x, y), equal(x, y)))` |

use crate::ast::Transaction;
use crate::combinators::{
    HALF, E, ONE, TWO, ZERO, add, both, branch, cos, div, either, equal, floor, less, modulo,
    negate, pow, sin, sub,
};

pub fn abs(x: impl Into<Transaction>) -> Transaction {
    let x = x.into();
    branch(less(&x, ZERO), sub(ZERO, &x), x)
}

/// Arithmetic negation, `0 - x`.
pub fn neg(x: impl Into<Transaction>) -> Transaction {
    sub(ZERO, x)
}

pub fn exp(x: impl Into<Transaction>) -> Transaction {
    pow(E, x)
}

pub fn sqrt(x: impl Into<Transaction>) -> Transaction {
    pow(x, HALF)
}

pub fn ceil(x: impl Into<Transaction>) -> Transaction {
    let x = x.into();
    branch(equal(&x, floor(&x)), &x, add(floor(&x), ONE))
}

pub fn round(x: impl Into<Transaction>) -> Transaction {
    let x = x.into();
    branch(less(sub(&x, floor(&x)), HALF), floor(&x), ceil(&x))
}

pub fn trunc(x: impl Into<Transaction>) -> Transaction {
    let x = x.into();
    branch(less(&x, ZERO), ceil(&x), floor(&x))
}

/// `floor(div(x, y))`
pub fn floor_div(x: impl Into<Transaction>, y: impl Into<Transaction>) -> Transaction {
    floor(div(x, y))
}

/// `mod(pow(x, y), m)`. A zero modulus is emitted as is; the store decides
/// what `mod 0` means.
pub fn pow_mod(
    x: impl Into<Transaction>,
    y: impl Into<Transaction>,
    m: impl Into<Transaction>,
) -> Transaction {
    modulo(pow(x, y), m)
}

// Trigonometry

pub fn tan(x: impl Into<Transaction>) -> Transaction {
    let x = x.into();
    div(sin(&x), cos(x))
}

pub fn cot(x: impl Into<Transaction>) -> Transaction {
    let x = x.into();
    div(cos(&x), sin(x))
}

pub fn sec(x: impl Into<Transaction>) -> Transaction {
    div(ONE, cos(x))
}

pub fn csc(x: impl Into<Transaction>) -> Transaction {
    div(ONE, sin(x))
}

pub fn sinh(x: impl Into<Transaction>) -> Transaction {
    let x = x.into();
    div(sub(exp(&x), exp(sub(ZERO, x))), TWO)
}

pub fn cosh(x: impl Into<Transaction>) -> Transaction {
    let x = x.into();
    div(add(exp(&x), exp(sub(ZERO, x))), TWO)
}

pub fn tanh(x: impl Into<Transaction>) -> Transaction {
    let x = x.into();
    div(sinh(&x), cosh(x))
}

pub fn coth(x: impl Into<Transaction>) -> Transaction {
    let x = x.into();
    div(cosh(&x), sinh(x))
}

pub fn sech(x: impl Into<Transaction>) -> Transaction {
    div(ONE, cosh(x))
}

pub fn csch(x: impl Into<Transaction>) -> Transaction {
    div(ONE, sinh(x))
}

// Comparison

pub fn eq(x: impl Into<Transaction>, y: impl Into<Transaction>) -> Transaction {
    equal(x, y)
}

pub fn ne(x: impl Into<Transaction>, y: impl Into<Transaction>) -> Transaction {
    negate(equal(x, y))
}

pub fn lt(x: impl Into<Transaction>, y: impl Into<Transaction>) -> Transaction {
    less(x, y)
}

pub fn le(x: impl Into<Transaction>, y: impl Into<Transaction>) -> Transaction {
    let (x, y) = (x.into(), y.into());
    either(less(&x, &y), equal(x, y))
}

pub fn gt(x: impl Into<Transaction>, y: impl Into<Transaction>) -> Transaction {
    negate(le(x, y))
}

pub fn ge(x: impl Into<Transaction>, y: impl Into<Transaction>) -> Transaction {
    negate(less(x, y))
}

pub fn xor(x: impl Into<Transaction>, y: impl Into<Transaction>) -> Transaction {
    let (x, y) = (x.into(), y.into());
    both(either(&x, &y), negate(both(x, y)))
}
