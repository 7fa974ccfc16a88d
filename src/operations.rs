use crate::ast::Transaction;
use crate::combinators::{
    add, both, div, either, floor, index_of, length, matches, modulo, mul, negate, pow, slice,
    sub,
};
use crate::{combinators, derived};

/// Named operator surface over anything that evaluates to a value.
///
/// Host operators (`==`, `<`, `+`) are left alone so they keep their ordinary
/// meaning; every tree-building operator is a named method instead. The
/// receiver is always the left operand.
///
/// # Examples
///
/// ```
/// use caustic_syntax::combinators::{read, less};
/// use caustic_syntax::operations::Operations;
///
/// let counter = read("counter");
/// assert_eq!(counter.less_than(10), less(read("counter"), 10));
/// ```
pub trait Operations {
    /// The value this operand stands for.
    fn operand(&self) -> Transaction;

    // Text

    fn length(&self) -> Transaction {
        length(self.operand())
    }

    fn contains(&self, query: impl Into<Transaction>) -> Transaction {
        combinators::contains(self.operand(), query)
    }

    fn matches(&self, regex: impl Into<Transaction>) -> Transaction {
        matches(self.operand(), regex)
    }

    fn index_of(&self, query: impl Into<Transaction>) -> Transaction {
        index_of(self.operand(), query)
    }

    /// `slice(x, lower, higher)`
    fn substring(
        &self,
        lower: impl Into<Transaction>,
        higher: impl Into<Transaction>,
    ) -> Transaction {
        slice(self.operand(), lower, higher)
    }

    /// `slice(x, lower, length(x))`
    fn substring_from(&self, lower: impl Into<Transaction>) -> Transaction {
        let x = self.operand();
        slice(&x, lower, length(&x))
    }

    /// The single character at `index`.
    fn char_at(&self, index: impl Into<Transaction>) -> Transaction {
        let index = index.into();
        slice(self.operand(), &index, add(&index, 1))
    }

    // Math

    fn neg(&self) -> Transaction {
        derived::neg(self.operand())
    }

    fn abs(&self) -> Transaction {
        derived::abs(self.operand())
    }

    fn ceil(&self) -> Transaction {
        derived::ceil(self.operand())
    }

    fn floor(&self) -> Transaction {
        floor(self.operand())
    }

    fn trunc(&self) -> Transaction {
        derived::trunc(self.operand())
    }

    fn round(&self) -> Transaction {
        derived::round(self.operand())
    }

    fn plus(&self, y: impl Into<Transaction>) -> Transaction {
        add(self.operand(), y)
    }

    fn minus(&self, y: impl Into<Transaction>) -> Transaction {
        sub(self.operand(), y)
    }

    fn times(&self, y: impl Into<Transaction>) -> Transaction {
        mul(self.operand(), y)
    }

    fn divided_by(&self, y: impl Into<Transaction>) -> Transaction {
        div(self.operand(), y)
    }

    fn floor_div(&self, y: impl Into<Transaction>) -> Transaction {
        derived::floor_div(self.operand(), y)
    }

    fn remainder(&self, y: impl Into<Transaction>) -> Transaction {
        modulo(self.operand(), y)
    }

    fn power(&self, y: impl Into<Transaction>) -> Transaction {
        pow(self.operand(), y)
    }

    fn power_mod(&self, y: impl Into<Transaction>, m: impl Into<Transaction>) -> Transaction {
        derived::pow_mod(self.operand(), y, m)
    }

    // Logic

    fn not(&self) -> Transaction {
        negate(self.operand())
    }

    fn and(&self, y: impl Into<Transaction>) -> Transaction {
        both(self.operand(), y)
    }

    fn or(&self, y: impl Into<Transaction>) -> Transaction {
        either(self.operand(), y)
    }

    fn xor(&self, y: impl Into<Transaction>) -> Transaction {
        derived::xor(self.operand(), y)
    }

    fn equal_to(&self, y: impl Into<Transaction>) -> Transaction {
        derived::eq(self.operand(), y)
    }

    fn not_equal_to(&self, y: impl Into<Transaction>) -> Transaction {
        derived::ne(self.operand(), y)
    }

    fn less_than(&self, y: impl Into<Transaction>) -> Transaction {
        derived::lt(self.operand(), y)
    }

    fn less_or_equal(&self, y: impl Into<Transaction>) -> Transaction {
        derived::le(self.operand(), y)
    }

    fn greater_than(&self, y: impl Into<Transaction>) -> Transaction {
        derived::gt(self.operand(), y)
    }

    fn greater_or_equal(&self, y: impl Into<Transaction>) -> Transaction {
        derived::ge(self.operand(), y)
    }
}

impl Operations for Transaction {
    fn operand(&self) -> Transaction {
        self.clone()
    }
}
