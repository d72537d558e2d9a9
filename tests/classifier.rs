//! Integration tests for line classification through the public API

mod common;

use common::{names, SAMPLE_TS};
use outliner::config::{ColumnPolicy, OutlineConfig};
use outliner::outline::{
    classify, extract_outline, LineClassifier, OutlineBuilder, OutlineKind, RuleMatch,
};

#[test]
fn test_rule_priority_order() {
    let kinds: Vec<OutlineKind> = LineClassifier::default().kinds().collect();
    assert_eq!(
        kinds,
        vec![
            OutlineKind::Class,
            OutlineKind::Function,
            OutlineKind::Variable,
            OutlineKind::Attribute,
            OutlineKind::Enum,
            OutlineKind::TypeAlias,
            OutlineKind::Event,
        ]
    );
}

#[test]
fn test_statements_are_not_declarations() {
    for line in [
        "",
        "   ",
        "// just a comment",
        "return value;",
        "if (a == b) {",
        "} else {",
        "while (running) {",
        "items.forEach((item) => {",
        "doSomething();",
        "x == y;",
    ] {
        assert_eq!(classify(line), None, "{:?} classified", line);
    }
}

#[test]
fn test_arrow_and_comparison_right_hand_sides() {
    assert_eq!(classify("handler => {"), None);
    assert_eq!(classify("  value == other"), None);
    assert_eq!(classify("  Outer::inner"), None);
    assert_eq!(classify("  pending;"), None);
    let c = classify("  onClick = () => {").unwrap();
    assert_eq!((c.kind, c.name.as_str()), (OutlineKind::Attribute, "onClick"));
}

#[test]
fn test_optional_member_marker() {
    let c = classify("  label?: string;").unwrap();
    assert_eq!(c.kind, OutlineKind::Attribute);
    assert_eq!(c.name, "label");
}

#[test]
fn test_column_policy_is_applied_per_builder() {
    let lines = ["  const value = 1;"];

    let match_start = extract_outline(&lines[..], &OutlineConfig::default(), 0);
    assert_eq!(match_start.roots[0].column, Some(2));

    let fixed = OutlineConfig {
        column: ColumnPolicy::Fixed(5),
        ..OutlineConfig::default()
    };
    assert_eq!(extract_outline(&lines[..], &fixed, 0).roots[0].column, Some(5));

    let omit = OutlineConfig {
        column: ColumnPolicy::Omit,
        ..OutlineConfig::default()
    };
    let data = extract_outline(&lines[..], &omit, 0);
    assert_eq!(data.roots[0].column, None);
    assert_eq!(data.roots[0].position().column, 0);
}

#[test]
fn test_custom_rule_extends_the_outline() {
    fn match_test_case(line: &str) -> Option<RuleMatch> {
        let trimmed = line.trim_start();
        let rest = trimmed.strip_prefix("it(\"")?;
        let end = rest.find('"')?;
        Some(RuleMatch {
            name: rest[..end].to_string(),
            start: line.len() - trimmed.len(),
        })
    }

    let classifier =
        LineClassifier::new(ColumnPolicy::MatchStart).with_rule(OutlineKind::Event, match_test_case);
    let builder = OutlineBuilder::new().with_classifier(classifier);

    let data = builder.build([
        "function suite() {",
        "  it(\"adds numbers\", () => {",
        "  });",
        "}",
    ]);
    assert_eq!(names(&data.roots), vec!["suite"]);
    assert_eq!(names(&data.roots[0].children), vec!["adds numbers"]);
    assert_eq!(data.roots[0].children[0].kind, OutlineKind::Event);
}

#[test]
fn test_empty_classifier_finds_nothing() {
    let builder =
        OutlineBuilder::new().with_classifier(LineClassifier::empty(ColumnPolicy::MatchStart));
    let data = builder.build(SAMPLE_TS.lines());
    assert!(data.is_empty());
    assert_eq!(data.stats.lines_scanned, 47);
}

#[test]
fn test_every_kind_appears_in_mixed_input() {
    let data = OutlineBuilder::new().build([
        "module Shapes {",
        "  function draw() {",
        "  }",
        "}",
        "var total = 0;",
        "width: 10,",
        "enum Mode {",
        "}",
        "type Id = string;",
        "public event EventHandler Changed;",
    ]);

    let kinds: Vec<OutlineKind> = data.roots.iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            OutlineKind::Class,
            OutlineKind::Variable,
            OutlineKind::Attribute,
            OutlineKind::Enum,
            OutlineKind::TypeAlias,
            OutlineKind::Event,
        ]
    );
    assert_eq!(data.roots[0].children[0].kind, OutlineKind::Function);
    assert_eq!(data.roots[5].name, "Changed");
}
