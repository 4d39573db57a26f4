//! Org-mode table parsing and rendering tests

mod common;

use common::{grid, parse, render, widths};
use tablemode::table::{Alignment, Dialect, RowKind};

const ORG: Dialect = Dialect::Org;

#[test]
fn test_parse_org_table() {
    let table = parse("| Name | Age |\n|------+-----|\n| Ann | 31 |", ORG);

    assert_eq!(table.row_count(), 3);
    assert!(table.rows()[1].is_separator());
    assert_eq!(table.get_at(2, 0), "Ann");
    assert_eq!(widths(&table), vec![4, 3]);
}

#[test]
fn test_org_ignores_colons() {
    let table = parse("| a |\n|-:-|", ORG);
    assert_eq!(table.cols()[0].alignment, Alignment::Left);
}

#[test]
fn test_render_intersections() {
    let table = parse("|a|b|c|\n|-\n|1|2|3|", ORG);
    assert_eq!(
        render(&table, ORG),
        "| a   | b   | c   |\n|-----+-----+-----|\n| 1   | 2   | 3   |"
    );
}

#[test]
fn test_hline_only_table() {
    let table = parse("|-", ORG);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows()[0].kind, RowKind::Separator);
    assert_eq!(render(&table, ORG), "|-----|");
}

#[test]
fn test_incomplete_last_row() {
    let table = parse("| a | b |\n|---+---|\n| typing", ORG);

    assert_eq!(table.get_row(2), ["typing".to_string(), String::new()]);
    assert_eq!(
        render(&table, ORG),
        "| a      | b   |\n|--------+-----|\n| typing |     |"
    );
}

#[test]
fn test_round_trip_and_idempotence() {
    let inputs = [
        "| a | b |\n|---+---|\n| 1 | 2 |",
        "| 東京 | Tokyo |\n| 大阪 | Osaka |",
        "|x|\n|-\n|y|\n|-\n|z|",
    ];

    for input in inputs {
        let table = parse(input, ORG);
        let once = render(&table, ORG);
        let reparsed = parse(&once, ORG);

        assert_eq!(grid(&reparsed), grid(&table), "{input}");
        assert_eq!(render(&reparsed, ORG), once, "{input}");
    }
}
