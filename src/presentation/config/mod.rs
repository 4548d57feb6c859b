mod settings;

pub use settings::{DatabaseSettings, LlmSettings, ServerSettings, Settings, StaticSettings};
