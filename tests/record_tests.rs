#[cfg(test)]
mod tests {
    use caustic_syntax::combinators::*;
    use caustic_syntax::derived::{abs, gt};
    use caustic_syntax::record::{FIELD_DELIMITER, Field, Kind, Record};
    use caustic_syntax::{Expression, Operations, SyntaxError, Transaction};

    // Helper: the key of `name` under a parent key, as the store will resolve it
    fn resolved(parent: &Transaction, kind_key: Transaction, direct: Transaction, name: &str) -> Transaction {
        branch(
            equal(read(kind_key), "reference"),
            concat(read(parent), ["@", name]),
            direct,
        )
    }

    fn root() -> Record {
        Record::new("root").unwrap()
    }

    // ========================================================================
    // Root Records
    // ========================================================================

    #[test]
    fn test_root_key_is_text() {
        let r = root();
        assert_eq!(r.key(), &text("root"));
        assert_eq!(r.get(), read("root"));
        assert_eq!(r.depth(), 0);
        assert!(r.parent().is_none());
    }

    #[test]
    fn test_root_kind_key() {
        assert_eq!(root().kind().key(), &text("root@kind"));
        assert_eq!(root().kind().get(), read("root@kind"));
    }

    #[test]
    fn test_root_rejects_delimiter() {
        let err = Record::new("users@alice").unwrap_err();
        match err {
            SyntaxError::Delimiter { segment, delimiter } => {
                assert_eq!(segment, "users@alice");
                assert_eq!(delimiter, FIELD_DELIMITER);
            }
            other => panic!("Expected Delimiter, got {:?}", other),
        }
    }

    #[test]
    fn test_root_rejects_empty_key() {
        assert!(matches!(Record::new(""), Err(SyntaxError::EmptySegment)));
    }

    // ========================================================================
    // Attribute Resolution
    // ========================================================================

    #[test]
    fn test_single_level_resolution() {
        let a = root().field("a").unwrap();
        let expected = branch(
            equal(read("root@kind"), "reference"),
            add(add(read("root"), "@"), "a"),
            "root@a",
        );
        assert_eq!(a.key(), &expected);
        assert_eq!(a.depth(), 1);
        assert_eq!(a.name(), Some("a"));
    }

    #[test]
    fn test_kind_tag_text() {
        assert_eq!(Transaction::from(Kind::Reference), text("reference"));
        assert_eq!(Kind::Structure.as_str(), "structure");
        assert_eq!(Kind::Attribute.as_str(), "attribute");
    }

    #[test]
    fn test_dynamic_kind_key_uses_concat() {
        let a = root().field("a").unwrap();
        assert_eq!(a.kind().key(), &concat(a.key(), ["@", "kind"]));
    }

    #[test]
    fn test_three_level_chain() {
        let a = root().field("a").unwrap();
        let b = a.field("b").unwrap();
        let c = b.attribute("c").unwrap();

        let key_a = resolved(&text("root"), text("root@kind"), text("root@a"), "a");
        let key_b = resolved(
            &key_a,
            concat(&key_a, ["@", "kind"]),
            concat(&key_a, ["@", "b"]),
            "b",
        );
        let key_c = resolved(
            &key_b,
            concat(&key_b, ["@", "kind"]),
            concat(&key_b, ["@", "c"]),
            "c",
        );

        assert_eq!(a.key(), &key_a);
        assert_eq!(b.key(), &key_b);
        assert_eq!(c.key(), &key_c);
        assert_eq!(c.get(), read(key_c));
    }

    #[test]
    fn test_chain_nests_one_branch_per_level() {
        let c = root()
            .field("a")
            .and_then(|a| a.field("b"))
            .and_then(|b| b.attribute("c"))
            .unwrap();

        // Follow the direct arm down to the root literal
        let mut levels = 0;
        let mut key = c.key().clone();
        while let Transaction::Expression(Expression::Branch { fail, .. }) = &key {
            levels += 1;
            key = match &**fail {
                Transaction::Expression(Expression::Add { lhs, .. }) => match &**lhs {
                    Transaction::Expression(Expression::Add { lhs, .. }) => (**lhs).clone(),
                    _ => panic!("Expected key@name"),
                },
                literal => literal.clone(),
            };
        }
        assert_eq!(levels, 3);
        assert_eq!(key, text("root@a"));
    }

    #[test]
    fn test_field_rejects_delimiter() {
        let err = root().field("a@b").unwrap_err();
        assert!(matches!(err, SyntaxError::Delimiter { .. }));
        assert!(root().attribute("").is_err());
    }

    #[test]
    fn test_path_and_parent() {
        let b = root().field("a").unwrap().field("b").unwrap();
        assert_eq!(b.path(), vec!["root", "a", "b"]);
        assert_eq!(b.parent().and_then(Record::name), Some("a"));
        assert_eq!(b.depth(), 2);
    }

    #[test]
    fn test_access_leaves_parent_untouched() {
        let r = root();
        let before = r.clone();
        let _ = r.field("a").unwrap();
        assert_eq!(r, before);
    }

    // ========================================================================
    // Fields
    // ========================================================================

    fn counter() -> Field {
        Field::from(Record::new("counter").unwrap())
    }

    #[test]
    fn test_field_get_and_set() {
        let f = counter();
        assert_eq!(f.get(), read("counter"));
        assert_eq!(f.set(5), write("counter", 5));
        assert_eq!(f.set(f.plus(1)), write("counter", add(read("counter"), 1)));
    }

    #[test]
    fn test_field_comparisons() {
        let f = counter();
        assert_eq!(f.greater_than(10), gt(read("counter"), 10));
        assert_eq!(f.less_than(10), less(read("counter"), 10));
        assert_eq!(
            f.less_or_equal(10),
            either(less(read("counter"), 10), equal(read("counter"), 10))
        );
        assert_eq!(f.greater_or_equal(1), negate(less(read("counter"), 1)));
        assert_eq!(f.equal_to("x"), equal(read("counter"), "x"));
        assert_eq!(f.not_equal_to("x"), negate(equal(read("counter"), "x")));
    }

    #[test]
    fn test_field_math() {
        let f = counter();
        let x = read("counter");
        assert_eq!(f.neg(), sub(ZERO, &x));
        assert_eq!(f.abs(), abs(&x));
        assert_eq!(f.minus(2), sub(&x, 2));
        assert_eq!(f.times(2), mul(&x, 2));
        assert_eq!(f.divided_by(2), div(&x, 2));
        assert_eq!(f.floor_div(2), floor(div(&x, 2)));
        assert_eq!(f.remainder(2), modulo(&x, 2));
        assert_eq!(f.power(2), pow(&x, 2));
        assert_eq!(f.power_mod(2, 5), modulo(pow(&x, 2), 5));
    }

    #[test]
    fn test_field_logic() {
        let f = counter();
        let x = read("counter");
        assert_eq!(f.not(), negate(&x));
        assert_eq!(f.and(true), both(&x, true));
        assert_eq!(f.or(false), either(&x, false));
        assert_eq!(f.xor(true), both(either(&x, true), negate(both(&x, true))));
    }

    #[test]
    fn test_field_text() {
        let name = Record::new("user").unwrap().attribute("name").unwrap();
        let x = name.get();
        assert_eq!(name.length(), length(&x));
        assert_eq!(name.contains("al"), contains(&x, "al"));
        assert_eq!(name.matches("^a"), matches(&x, "^a"));
        assert_eq!(name.index_of("l"), index_of(&x, "l"));
        assert_eq!(name.substring(1, 3), slice(&x, 1, 3));
        assert_eq!(name.substring_from(1), slice(&x, 1, length(&x)));
        assert_eq!(name.char_at(2), slice(&x, 2, add(2, 1)));
    }

    #[test]
    fn test_field_as_operand() {
        let a = Record::new("a").unwrap().attribute("v").unwrap();
        let b = Record::new("b").unwrap().attribute("v").unwrap();
        assert_eq!(a.less_than(&b), less(a.get(), b.get()));
        assert_eq!(add(&a, &b), add(a.get(), b.get()));
    }

    #[test]
    fn test_record_exposes_operations() {
        let r = root();
        assert_eq!(r.plus(1), add(read("root"), 1));
        assert_eq!(Transaction::from(&r), read("root"));
    }
}
