use serde::Deserialize;
use std::fs;
use tagmark::{Error, Marker, translate};

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    source: String,
    html: String,
}

#[test]
fn fixture_cases() {
    let data = fs::read_to_string("tests/data/cases.json").expect("Failed to read cases.json");
    let cases: Vec<Case> = serde_json::from_str(&data).expect("Failed to parse cases.json");

    for case in cases.iter() {
        let result = translate(&case.source)
            .unwrap_or_else(|e| panic!("case {} unexpectedly failed: {e}", case.name));
        assert_eq!(result, case.html, "case {}", case.name);
    }
}

#[test]
fn unclosed_bold_fails() {
    assert!(matches!(
        translate("**bold"),
        Err(Error::Unbalanced(Marker::Bold))
    ));
}

#[test]
fn stray_closing_code_fails() {
    assert!(matches!(
        translate("code`"),
        Err(Error::Unbalanced(Marker::Code))
    ));
}

#[test]
fn odd_fence_count_fails() {
    assert!(matches!(
        translate("``` still open"),
        Err(Error::Unbalanced(Marker::Fence))
    ));
}

#[test]
fn imbalance_reported_in_table_order() {
    // Both the bold and italic counters end up nonzero; bold comes first
    // in the marker table, so it is the one reported.
    assert!(matches!(
        translate("_x**"),
        Err(Error::Unbalanced(Marker::Bold))
    ));
}

#[test]
fn balanced_input_preserves_token_count() {
    let output = translate("**a** b _c_").unwrap();
    assert_eq!(output.split_whitespace().count(), 3);
}

#[test]
fn plain_output_retranslates_as_plain_text() {
    let once = translate("just plain words").unwrap();
    let again = translate(&once).unwrap();
    assert_eq!(again, format!("<p>{once}</p>"));
}

#[test]
fn bare_marker_token_fires_both_checks() {
    // A lone "**" satisfies the starts-with and ends-with checks on the same
    // two characters, so both tags are emitted and the balance nets to zero.
    let output = translate("** solo **").unwrap();
    assert_eq!(output, "<p><b></b> solo <b></b></p>");
}

#[test]
fn fence_token_exempt_from_emphasis() {
    let output = translate("```**```").unwrap();
    assert_eq!(output, "<p><pre>**</pre></p>");
}

#[test]
fn emphasis_resumes_after_fence_closes() {
    let output = translate("``` a ``` then **b**").unwrap();
    assert_eq!(output, "<p><pre> a </pre> then <b>b</b></p>");
}

#[test]
fn blank_source_wraps_as_single_paragraph() {
    assert_eq!(translate("").unwrap(), "<p></p>");
    assert_eq!(translate("   ").unwrap(), "<p> </p>");
}

#[test]
fn unbalanced_second_paragraph_rejects_whole_document() {
    // All-or-nothing: a stray marker anywhere fails the entire translation.
    assert!(matches!(
        translate("fine here\r\n\n`broken"),
        Err(Error::Unbalanced(Marker::Code))
    ));
}
