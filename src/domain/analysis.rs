/// The structured outcome of one document analysis request.
///
/// Built once from the model's sectioned answer plus the separate risk-score
/// call; immutable after construction and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub explanation: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk: i32,
    pub full_text: String,
}
