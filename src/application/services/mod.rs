mod analysis_service;
mod prompt_builder;
mod registration_service;
mod response_parser;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use prompt_builder::{analysis_prompt, chat_prompt, risk_prompt};
pub use registration_service::{RegistrationError, RegistrationRequest, RegistrationService};
pub use response_parser::{parse_risk_score, parse_sections, ParsedAnalysis, DEFAULT_RISK_SCORE};
