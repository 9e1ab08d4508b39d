pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MAIL_SUBJECT: &str = "Your Skincare Routine Analysis";

#[derive(Clone, Debug)]
pub struct SkinRelayConfig {
    pub llm: LLMConfig,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    /// Tried in order until one model both resolves and generates.
    pub gemini_models: Vec<String>,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub sender: String,
    pub subject: String,
    pub transport: MailTransportConfig,
}

#[derive(Clone, Debug)]
pub enum MailTransportConfig {
    SendGrid { api_key: String },
    Smtp(SmtpConfig),
}

#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}
