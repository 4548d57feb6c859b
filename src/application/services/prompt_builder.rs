//! Prompt templates for the three upstream call types.
//!
//! The analysis template is a contract shared with the response parser: the
//! numbered, bolded section headings the model is told to produce are exactly
//! what `response_parser` splits on. Changing the heading labels here without
//! updating the parser breaks section classification silently.

/// Full structured analysis of a legal document.
pub fn analysis_prompt(document_text: &str) -> String {
    format!(
        "You are a highly qualified legal expert specializing in contract analysis under the laws of Uzbekistan.\n\
         Analyze the following legal document in detail, using the Civil Code and other relevant legislation of the Republic of Uzbekistan.\n\
         Your goal is to protect the client's interests, identify all possible legal risks, unfair or ambiguous terms, and provide practical, actionable recommendations.\n\
         Be specific: cite relevant articles of law or legal practice where possible.\n\
         Structure your answer clearly and concisely.\n\n\
         Please provide the following sections (use clear headings):\n\
         1. Explanation: Explain the document in simple terms for a non-lawyer.\n\
         2. Summary: Give a concise summary of the document's main points.\n\
         3. Key Points: List the most important provisions and obligations.\n\
         4. Risks: Identify all potential legal and practical risks for the client (with severity and references to law if possible).\n\
         5. Recommendations: Give practical, actionable recommendations to the client (including what to negotiate, clarify, or refuse).\n\
         6. Legal References: List relevant articles of the Civil Code or other laws that apply.\n\n\
         Document:\n{document_text}"
    )
}

/// Single-purpose risk assessment; the model is told to answer with one
/// integer and nothing else.
pub fn risk_prompt(document_text: &str) -> String {
    format!(
        "Assess the risk for the client in this legal document on a scale from 0 to 100, where 0 means no risk and 100 means maximum risk. Respond with a single number only.\n\n\
         Document:\n{document_text}"
    )
}

/// Follow-up question over previously extracted document text.
pub fn chat_prompt(document_text: &str, question: &str) -> String {
    format!(
        "You are a legal expert specializing in Uzbek law. Answer the following question about the legal document.\n\
         Be specific and cite relevant laws when possible.\n\n\
         Document:\n{document_text}\n\n\
         Question: {question}"
    )
}
