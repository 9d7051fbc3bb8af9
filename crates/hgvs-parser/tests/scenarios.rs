//! End-to-end scenarios: one test per row of the concrete scenario table,
//! plus the property-style invariants that cut across all of them.

use hgvs_parser::{parse_description, render_node, Format, Node, NumberValue, ParseOutcome};

fn expect_matched(input: &str) -> Node {
    match parse_description(input) {
        ParseOutcome::Matched(node) => node,
        other => panic!("expected {input:?} to parse, got {other:?}"),
    }
}

fn expect_errored(input: &str) -> hgvs_parser::ParseError {
    match parse_description(input) {
        ParseOutcome::Errored(err) => err,
        other => panic!("expected {input:?} to fail, got {other:?}"),
    }
}

#[test]
fn scenario_1_simple_substitution() {
    let node = expect_matched("NM_004006.2:c.4375C>T");
    match node {
        Node::Description {
            coordinate_system: Some(b'c'),
            allele,
            ..
        } => match *allele {
            Node::Variant { location, operation } => {
                assert!(matches!(*location, Node::Point { .. }));
                assert!(matches!(*operation, Node::Substitution { .. }));
            }
            other => panic!("unexpected allele shape {other:?}"),
        },
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn scenario_2_deletion_with_sequence_payload() {
    let node = expect_matched("NC_000023.10:g.33038255delC");
    match node {
        Node::Description {
            coordinate_system: Some(b'g'),
            allele,
            ..
        } => match *allele {
            Node::Variant { operation, .. } => assert!(matches!(*operation, Node::Deletion(Some(_)))),
            other => panic!("unexpected {other:?}"),
        },
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn scenario_3_compound_variant_with_two_elements() {
    let node = expect_matched("NC_000023.10:g.[33038255C>T;33038256delA]");
    match node {
        Node::Description { allele, .. } => match *allele {
            Node::CompoundVariant(items) => assert_eq!(items.len(), 2),
            other => panic!("unexpected {other:?}"),
        },
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn scenario_4_range_with_insertion() {
    let node = expect_matched("LRG_199t1:c.79_80insTT");
    match node {
        Node::Description { allele, .. } => match *allele {
            Node::Variant { location, operation } => {
                assert!(matches!(*location, Node::Range { .. }));
                assert!(matches!(*operation, Node::Insertion(_)));
            }
            other => panic!("unexpected {other:?}"),
        },
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn scenario_5_uncertain_point_with_insertion() {
    let node = expect_matched("NM_004006.2:c.(4375_4376)insN");
    match node {
        Node::Description { allele, .. } => match *allele {
            Node::Variant { location, operation } => {
                assert!(matches!(*location, Node::UncertainPoint { .. }));
                assert!(matches!(*operation, Node::Insertion(_)));
            }
            other => panic!("unexpected {other:?}"),
        },
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn scenario_6_missing_location_points_at_end_of_string() {
    let err = expect_errored("NM_004006.2:c.");
    assert!(err.chain().any(|e| e.span.start == "NM_004006.2:c.".len()));
}

#[test]
fn scenario_7_invalid_sequence_reports_an_error_at_the_bad_byte() {
    let err = expect_errored("NM_004006.2:c.1X>A");
    assert!(err.chain().any(|e| e.span.start == "NM_004006.2:c.1".len()));
}

#[test]
fn scenario_8_trailing_garbage_fails_at_the_space() {
    let err = expect_errored("NM_004006.2:c.4375C>T garbage");
    assert!(err.chain().any(|e| e.span.start == "NM_004006.2:c.4375C>T".len()));
}

#[test]
fn property_plain_rendering_round_trips_every_accepted_scenario() {
    let inputs = [
        "NM_004006.2:c.4375C>T",
        "NC_000023.10:g.33038255delC",
        "NC_000023.10:g.[33038255C>T;33038256delA]",
        "LRG_199t1:c.79_80insTT",
        "NM_004006.2:c.(4375_4376)insN",
    ];
    for input in inputs {
        let node = expect_matched(input);
        let mut buf = Vec::new();
        render_node(&mut buf, Format::Plain, input, &node).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), input, "round-trip failed for {input:?}");
    }
}

#[test]
fn property_out_of_range_numbers_are_flagged_not_rejected() {
    let digits = "9".repeat(30);
    let input = format!("NM_004006.2:c.{digits}C>T");
    let node = expect_matched(&input);
    match node {
        Node::Description { allele, .. } => match *allele {
            Node::Variant { location, .. } => match *location {
                Node::Point {
                    magnitude, ..
                } => assert!(matches!(*magnitude, Node::Number(NumberValue::OutOfRange(_)))),
                other => panic!("unexpected {other:?}"),
            },
            other => panic!("unexpected {other:?}"),
        },
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn property_parsing_is_deterministic_across_repeated_calls() {
    let input = "NC_000023.10:g.[33038255C>T;33038256delA]";
    let first = parse_description(input);
    let second = parse_description(input);
    assert_eq!(first, second);
}
