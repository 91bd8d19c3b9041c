use super::*;
use crate::ident::PLACEHOLDER;
use serde_json::json;

/// Every (indent, count) combination the layout tests walk through.
const FORMATS: [(usize, usize); 4] = [(0, 0), (2, 0), (2, 1), (2, 2)];

fn no_named() -> Vec<(String, Value)> {
    Vec::new()
}

fn no_positional() -> Vec<Value> {
    Vec::new()
}

#[test]
fn empty_clauses_render_nothing() {
    for kind in ClauseKind::ALL {
        let mut clause = Clause::new(kind);
        assert!(!clause.is_present(), "{kind} should start absent");
        for (indent, count) in FORMATS {
            let generated = clause.generate(indent, count);
            assert_eq!(generated.sql, "", "{kind}");
            assert!(generated.args.is_empty(), "{kind}");
        }
    }
}

#[test]
fn options_generate() {
    let mut clause = Clause::options();
    assert!(!clause.is_present());

    clause.accumulate(["people", "stuff", "things"], no_named());
    assert!(clause.is_present());

    clause.generate(0, 0);
    assert_eq!(clause.sql(), "people stuff things");
    assert!(clause.args().is_empty());

    clause.generate(2, 0);
    assert_eq!(clause.sql(), "  people\n  stuff\n  things");

    clause.generate(2, 1);
    assert_eq!(clause.sql(), "  people\n    stuff\n    things");

    clause.generate(2, 2);
    assert_eq!(clause.sql(), "  people\n      stuff\n      things");
}

#[test]
fn fields_generate() {
    let mut clause = Clause::fields();
    assert!(!clause.is_present());

    clause.push("*");
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "*");
    assert!(clause.args().is_empty());

    clause.accumulate(no_positional(), [("stuff", "things")]);
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "*,`things` AS `stuff`");
    assert!(clause.args().is_empty());

    clause.generate(2, 0);
    assert_eq!(clause.sql(), "  *,\n  `things` AS `stuff`");

    clause.generate(2, 1);
    assert_eq!(clause.sql(), "  *,\n    `things` AS `stuff`");

    clause.generate(2, 2);
    assert_eq!(clause.sql(), "  *,\n      `things` AS `stuff`");
}

#[test]
fn fields_named_literal_and_raw_alias() {
    let mut clause = Clause::fields();
    clause
        .push_named("one", 1)
        .push_part(Part::aliased_raw("COUNT(*)", "total"));
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "1 AS `one`,COUNT(*) AS `total`");
    assert!(clause.args().is_empty());
}

#[test]
fn from_generate() {
    let mut clause = Clause::from();
    assert!(!clause.is_present());

    clause.accumulate(["people"], [("stuff", "things")]);
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "FROM `people`,`things` AS `stuff`");
    assert!(clause.args().is_empty());

    clause.generate(2, 0);
    assert_eq!(clause.sql(), "FROM\n  `people`,\n  `things` AS `stuff`");

    clause.generate(2, 1);
    assert_eq!(clause.sql(), "FROM\n    `people`,\n    `things` AS `stuff`");

    clause.generate(2, 2);
    assert_eq!(clause.sql(), "FROM\n      `people`,\n      `things` AS `stuff`");
}

#[test]
fn from_quotes_dotted_tables() {
    let mut clause = Clause::from();
    clause.push("db.people");
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "FROM `db`.`people`");
}

#[test]
fn where_generate() {
    let mut clause = Clause::where_();
    assert!(!clause.is_present());

    clause.accumulate(["people"], [("stuff", "things")]);
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "WHERE %s AND `stuff`=%s");
    assert_eq!(clause.args(), [json!("people"), json!("things")]);

    clause.generate(2, 0);
    assert_eq!(clause.sql(), "WHERE\n  %s AND\n  `stuff`=%s");

    clause.generate(2, 1);
    assert_eq!(clause.sql(), "WHERE\n    %s AND\n    `stuff`=%s");

    clause.generate(2, 2);
    assert_eq!(clause.sql(), "WHERE\n      %s AND\n      `stuff`=%s");
    assert_eq!(clause.args(), [json!("people"), json!("things")]);
}

#[test]
fn group_by_generate() {
    let mut clause = Clause::group_by();
    assert!(!clause.is_present());

    clause.accumulate(["people", "stuff", "things"], no_named());
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "GROUP BY `people`,`stuff`,`things`");
    assert!(clause.args().is_empty());

    clause.generate(2, 0);
    assert_eq!(clause.sql(), "GROUP BY\n  `people`,\n  `stuff`,\n  `things`");

    clause.generate(2, 1);
    assert_eq!(
        clause.sql(),
        "GROUP BY\n    `people`,\n    `stuff`,\n    `things`"
    );

    clause.generate(2, 2);
    assert_eq!(
        clause.sql(),
        "GROUP BY\n      `people`,\n      `stuff`,\n      `things`"
    );
}

#[test]
fn having_generate() {
    let mut clause = Clause::having();
    assert!(!clause.is_present());

    clause.accumulate(["people"], [("stuff", "things")]);
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "HAVING %s AND `stuff`=%s");
    assert_eq!(clause.args(), [json!("people"), json!("things")]);

    clause.generate(2, 0);
    assert_eq!(clause.sql(), "HAVING\n  %s AND\n  `stuff`=%s");

    clause.generate(2, 1);
    assert_eq!(clause.sql(), "HAVING\n    %s AND\n    `stuff`=%s");

    clause.generate(2, 2);
    assert_eq!(clause.sql(), "HAVING\n      %s AND\n      `stuff`=%s");
}

#[test]
fn order_by_generate() {
    let mut clause = Clause::order_by();
    assert!(!clause.is_present());

    clause.accumulate(["people"], [("stuff", ASC), ("things", DESC)]);
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "ORDER BY `people`,`stuff` ASC,`things` DESC");
    assert!(clause.args().is_empty());

    clause.generate(2, 0);
    assert_eq!(
        clause.sql(),
        "ORDER BY\n  `people`,\n  `stuff` ASC,\n  `things` DESC"
    );

    clause.generate(2, 1);
    assert_eq!(
        clause.sql(),
        "ORDER BY\n    `people`,\n    `stuff` ASC,\n    `things` DESC"
    );

    clause.generate(2, 2);
    assert_eq!(
        clause.sql(),
        "ORDER BY\n      `people`,\n      `stuff` ASC,\n      `things` DESC"
    );
}

#[test]
fn order_by_unknown_direction_is_bare_column() {
    let mut clause = Clause::order_by();
    clause.push_named("stuff", "sideways").push_named("things", "desc");
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "ORDER BY `stuff`,`things` DESC");
}

#[test]
fn limit_generate() {
    let mut clause = Clause::limit();
    assert!(!clause.is_present());

    clause.accumulate([10, 5], no_named());
    for (indent, count) in FORMATS {
        clause.generate(indent, count);
        assert_eq!(clause.sql(), "LIMIT %s OFFSET %s");
        assert_eq!(clause.args(), [json!(10), json!(5)]);
    }
}

#[test]
fn limit_without_offset() {
    let mut clause = Clause::limit();
    clause.push(10);
    clause.generate(2, 1);
    assert_eq!(clause.sql(), "LIMIT %s");
    assert_eq!(clause.args(), [json!(10)]);
}

#[test]
fn limit_uses_only_first_two_values() {
    let mut clause = Clause::limit();
    clause.limit_offset(10, 5).push(99);
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "LIMIT %s OFFSET %s");
    assert_eq!(clause.args(), [json!(10), json!(5)]);
}

#[test]
fn set_generate() {
    let mut clause = Clause::set();
    assert!(!clause.is_present());

    clause.accumulate(no_positional(), [("fee", "fie"), ("foe", "fum")]);
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "SET `fee`=%s,`foe`=%s");
    assert_eq!(clause.args(), [json!("fie"), json!("fum")]);

    clause.generate(2, 0);
    assert_eq!(clause.sql(), "SET\n  `fee`=%s,\n  `foe`=%s");

    clause.generate(2, 1);
    assert_eq!(clause.sql(), "SET\n    `fee`=%s,\n    `foe`=%s");

    clause.generate(2, 2);
    assert_eq!(clause.sql(), "SET\n      `fee`=%s,\n      `foe`=%s");
}

#[test]
fn set_positional_is_raw_expression() {
    let mut clause = Clause::set();
    clause.push("`hits`=`hits`+1").push_named("fee", "fie");
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "SET `hits`=`hits`+1,`fee`=%s");
    assert_eq!(clause.args(), [json!("fie")]);
}

#[test]
fn values_generate() {
    let mut clause = Clause::values();
    assert!(!clause.is_present());

    clause.accumulate(no_positional(), [("fee", "fie"), ("foe", "fum")]);
    assert_eq!(clause.len(), 1);
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "VALUES (%s,%s)");
    assert_eq!(clause.args(), [json!("fie"), json!("fum")]);

    clause.accumulate(no_positional(), [("fee", "fie"), ("foe", "fum")]);
    assert_eq!(clause.len(), 2);

    clause.generate(0, 0);
    assert_eq!(clause.sql(), "VALUES (%s,%s),(%s,%s)");

    clause.generate(2, 0);
    assert_eq!(
        clause.sql(),
        "VALUES\n  (\n    %s,\n    %s\n  ),(\n    %s,\n    %s\n  )"
    );
    assert_eq!(clause.sql().lines().count(), 8);

    clause.generate(2, 1);
    assert_eq!(
        clause.sql(),
        "VALUES\n    (\n      %s,\n      %s\n    ),(\n      %s,\n      %s\n    )"
    );

    clause.generate(2, 2);
    assert_eq!(
        clause.sql(),
        "VALUES\n      (\n        %s,\n        %s\n      ),(\n        %s,\n        %s\n      )"
    );
    assert_eq!(
        clause.args(),
        [json!("fie"), json!("fum"), json!("fie"), json!("fum")]
    );
}

#[test]
fn values_args_are_row_then_column() {
    let mut clause = Clause::values();
    clause.row([("a", 1), ("b", 2)]).row([("a", 3), ("b", 4)]);
    clause.generate(0, 0);
    assert_eq!(clause.args(), [json!(1), json!(2), json!(3), json!(4)]);
}

#[test]
fn values_keep_every_supplied_value() {
    // A positional value and a named "0" land in the same row, side by side.
    let mut clause = Clause::values();
    clause.accumulate([json!("a")], [("0", "b")]);
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "VALUES (%s,%s)");
    assert_eq!(clause.args(), [json!("a"), json!("b")]);
    assert_eq!(
        clause.parts(),
        [Part::Row(vec![
            (None, json!("a")),
            (Some("0".to_string()), json!("b")),
        ])]
    );

    let mut clause = Clause::values();
    clause.row([("fee", 1), ("fee", 2)]);
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "VALUES (%s,%s)");
    assert_eq!(clause.args(), [json!(1), json!(2)]);
}

#[test]
fn values_empty_call_adds_no_row() {
    let mut clause = Clause::values();
    clause.accumulate(no_positional(), no_named());
    assert!(!clause.is_present());
}

#[test]
fn generate_is_idempotent() {
    let mut clause = Clause::where_();
    clause.accumulate(["people"], [("stuff", "things")]);

    let first = clause.generate(2, 1).clone();
    let second = clause.generate(2, 1).clone();
    assert_eq!(first, second);
    assert_eq!(second.args.len(), 2);
}

#[test]
fn generate_replaces_previous_render() {
    let mut clause = Clause::where_();
    clause.push_named("stuff", "things");
    clause.generate(2, 0);
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "WHERE `stuff`=%s");
    assert_eq!(clause.args().len(), 1);
}

#[test]
fn render_does_not_touch_state() {
    let mut clause = Clause::set();
    clause.push_named("fee", "fie");
    let rendered = clause.render(0, 0);
    assert_eq!(rendered.sql, "SET `fee`=%s");
    assert_eq!(clause.sql(), "");
    assert!(clause.args().is_empty());
}

#[test]
fn placeholders_match_args_for_every_kind() {
    for kind in ClauseKind::ALL {
        let mut clause = Clause::new(kind);
        clause.accumulate(["people", "stuff"], [("fee", "fie"), ("foe", "fum")]);
        for (indent, count) in FORMATS {
            let generated = clause.render(indent, count);
            assert_eq!(
                generated.sql.matches(PLACEHOLDER).count(),
                generated.args.len(),
                "{kind} at ({indent}, {count}): {}",
                generated.sql
            );
        }
    }
}

#[test]
fn argument_order_follows_text_order() {
    let mut clause = Clause::where_();
    clause
        .push_named("a", 1)
        .push(json!("raw"))
        .push_named("b", 2);
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "WHERE `a`=%s AND %s AND `b`=%s");
    assert_eq!(clause.args(), [json!(1), json!("raw"), json!(2)]);
}

#[test]
fn non_scalar_values_pass_through_as_arguments() {
    let mut clause = Clause::where_();
    clause.push_named("tags", json!(["a", "b"]));
    clause.generate(0, 0);
    assert_eq!(clause.sql(), "WHERE `tags`=%s");
    assert_eq!(clause.args(), [json!(["a", "b"])]);
}

// Positional OPTIONS/FROM/GROUP_BY/ORDER_BY entries never bind arguments.
#[test]
fn identifier_like_positionals_bind_nothing() {
    for kind in [
        ClauseKind::Options,
        ClauseKind::From,
        ClauseKind::GroupBy,
        ClauseKind::OrderBy,
    ] {
        let mut clause = Clause::new(kind);
        clause.push("people").push(42);
        assert!(clause.render(0, 0).args.is_empty(), "{kind}");
    }
}

#[test]
fn indent_zero_ignores_count() {
    let mut clause = Clause::from();
    clause.accumulate(["people", "stuff"], no_named());
    assert_eq!(clause.render(0, 5), clause.render(0, 0));
}
