//! Splits the model's free-text answer into the labeled analysis fields.
//!
//! The model is instructed (see `prompt_builder`) to emit numbered, bolded
//! headings such as `**1. Explanation:**`. Segmentation keys on that exact
//! shape, so the parser is deliberately strict about the heading pattern and
//! lenient about everything else: unknown headings and non-bulleted lines
//! inside list sections are dropped, and a missing section simply leaves its
//! field empty.

use std::sync::LazyLock;

use regex::Regex;

/// Advisory default when the risk-score response cannot be read as a number.
pub const DEFAULT_RISK_SCORE: i32 = 50;

/// Numbered label wrapped in double-asterisk emphasis, e.g. `**3. Key Points:**`.
static SECTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\d+\.\s*([^*]+):\*\*").unwrap());

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedAnalysis {
    pub explanation: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Splits `answer` on section headings and classifies each section body by
/// its label. Repeated labels overwrite (last occurrence wins); labels that
/// match no known field are discarded together with their body, as is any
/// text before the first heading.
pub fn parse_sections(answer: &str) -> ParsedAnalysis {
    let mut parsed = ParsedAnalysis::default();

    let headings: Vec<(String, usize, usize)> = SECTION_HEADING
        .captures_iter(answer)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            let label = caps.get(1).unwrap().as_str().to_string();
            (label, whole.start(), whole.end())
        })
        .collect();

    for (index, (label, _, body_start)) in headings.iter().enumerate() {
        let body_end = headings
            .get(index + 1)
            .map(|(_, next_start, _)| *next_start)
            .unwrap_or(answer.len());

        let label = label.trim().to_lowercase();
        let body = answer[*body_start..body_end].trim();

        if label.contains("explanation") || label.contains("explain") {
            parsed.explanation = body.to_string();
        } else if label.contains("summary") {
            parsed.summary = body.to_string();
        } else if label.contains("key point") {
            parsed.key_points = bulleted_lines(body);
        } else if label.contains("risk") {
            parsed.risks = bulleted_lines(body);
        } else if label.contains("recommendation") {
            parsed.recommendations = bulleted_lines(body);
        }
        // Anything else ("Legal References" in particular) is dropped.
    }

    parsed
}

/// Keeps only lines starting with an asterisk bullet, stripped of the bullet
/// markers and surrounding whitespace. Non-bulleted lines are dropped.
fn bulleted_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| line.starts_with('*'))
        .map(|line| line.trim_matches(['*', ' ']).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Reads the risk-only response as a base-10 integer. The call is advisory,
/// so any unparseable content falls back to [`DEFAULT_RISK_SCORE`] instead of
/// failing the request.
pub fn parse_risk_score(response_text: &str) -> i32 {
    response_text
        .trim()
        .parse()
        .unwrap_or(DEFAULT_RISK_SCORE)
}
