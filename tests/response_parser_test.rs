use qonun::application::services::{
    parse_risk_score, parse_sections, ParsedAnalysis, DEFAULT_RISK_SCORE,
};

const SYNTHETIC_ANSWER: &str = "\
**1. Explanation:**
This agreement is a lease: one party lets premises to the other for monthly rent.

**2. Summary:**
A twelve-month lease with an automatic renewal clause.

**3. Key Points:**
* Rent is due on the first day of each month
* The deposit equals one month of rent
The renewal clause is discussed below.

**4. Risks:**

**5. Recommendations:**
* Negotiate a cap on the late-payment penalty
";

#[test]
fn given_synthetic_answer_when_parsing_then_fields_match_section_bodies() {
    let parsed = parse_sections(SYNTHETIC_ANSWER);

    assert_eq!(
        parsed.explanation,
        "This agreement is a lease: one party lets premises to the other for monthly rent."
    );
    assert_eq!(
        parsed.summary,
        "A twelve-month lease with an automatic renewal clause."
    );
    assert_eq!(
        parsed.key_points,
        vec![
            "Rent is due on the first day of each month".to_string(),
            "The deposit equals one month of rent".to_string(),
        ]
    );
    assert!(parsed.risks.is_empty());
    assert_eq!(
        parsed.recommendations,
        vec!["Negotiate a cap on the late-payment penalty".to_string()]
    );
}

#[test]
fn given_answer_without_recognized_headings_when_parsing_then_all_fields_default() {
    let parsed = parse_sections("The model ignored the requested structure entirely.");

    assert_eq!(parsed, ParsedAnalysis::default());
}

#[test]
fn given_empty_answer_when_parsing_then_all_fields_default() {
    assert_eq!(parse_sections(""), ParsedAnalysis::default());
}

#[test]
fn given_unrecognized_heading_when_parsing_then_its_body_is_discarded() {
    let answer = "\
**1. Explanation:**
Plain explanation.

**2. Legal References:**
* Article 386 of the Civil Code
";
    let parsed = parse_sections(answer);

    assert_eq!(parsed.explanation, "Plain explanation.");
    assert!(parsed.key_points.is_empty());
    assert!(parsed.risks.is_empty());
    assert!(parsed.recommendations.is_empty());
}

#[test]
fn given_repeated_heading_when_parsing_then_last_occurrence_wins() {
    let answer = "\
**1. Summary:**
First version.

**2. Summary:**
Second version.
";
    let parsed = parse_sections(answer);

    assert_eq!(parsed.summary, "Second version.");
}

#[test]
fn given_label_variants_when_parsing_then_substring_match_classifies() {
    let answer = "\
**1. Explain:**
Simple terms.

**2. Key Points and Obligations:**
* Obligation one

**3. Risk Assessment:**
* Severe penalty clause
";
    let parsed = parse_sections(answer);

    assert_eq!(parsed.explanation, "Simple terms.");
    assert_eq!(parsed.key_points, vec!["Obligation one".to_string()]);
    assert_eq!(parsed.risks, vec!["Severe penalty clause".to_string()]);
}

#[test]
fn given_text_before_first_heading_when_parsing_then_preamble_is_ignored() {
    let answer = "\
Here is my analysis of the document.

**1. Summary:**
The actual summary.
";
    let parsed = parse_sections(answer);

    assert_eq!(parsed.summary, "The actual summary.");
    assert_eq!(parsed.explanation, "");
}

#[test]
fn given_bulleted_lines_with_decoration_when_parsing_then_markers_are_stripped() {
    let answer = "\
**1. Key Points:**
  * Indented bullet
** Emphasized bullet **
* *
";
    let parsed = parse_sections(answer);

    // The bare "* *" strips down to nothing and is dropped.
    assert_eq!(
        parsed.key_points,
        vec!["Indented bullet".to_string(), "Emphasized bullet".to_string()]
    );
}

#[test]
fn given_parsed_output_reassembled_when_reparsing_then_fields_are_unchanged() {
    let first = parse_sections(SYNTHETIC_ANSWER);

    let reconstructed = format!(
        "**1. Explanation:**\n{}\n\n**2. Summary:**\n{}\n\n**3. Key Points:**\n{}\n\n**4. Risks:**\n{}\n\n**5. Recommendations:**\n{}\n",
        first.explanation,
        first.summary,
        bulleted(&first.key_points),
        bulleted(&first.risks),
        bulleted(&first.recommendations),
    );

    let second = parse_sections(&reconstructed);

    assert_eq!(first, second);
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("* {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn given_plain_number_when_parsing_risk_then_returns_value() {
    assert_eq!(parse_risk_score("73"), 73);
}

#[test]
fn given_surrounding_whitespace_when_parsing_risk_then_returns_value() {
    assert_eq!(parse_risk_score("  42 \n"), 42);
}

#[test]
fn given_non_numeric_text_when_parsing_risk_then_returns_default() {
    assert_eq!(parse_risk_score("high"), DEFAULT_RISK_SCORE);
}

#[test]
fn given_number_with_trailing_text_when_parsing_risk_then_returns_default() {
    assert_eq!(parse_risk_score("73 out of 100"), DEFAULT_RISK_SCORE);
}

#[test]
fn given_empty_response_when_parsing_risk_then_returns_default() {
    assert_eq!(parse_risk_score(""), DEFAULT_RISK_SCORE);
}
