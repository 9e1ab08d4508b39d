use anyhow::bail;
use clap::Parser;
use skinrelay_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_MAIL_SUBJECT, LLMConfig, MailConfig, MailTransportConfig,
    SkinRelayConfig, SmtpConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "skinrelay-api", version, about = "SkinRelay skincare analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub mail: MailArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(long = "metrics-enabled", env = "METRICS_ENABLED", default_value_t = true, action = clap::ArgAction::Set)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    /// Candidate models, tried in order.
    #[arg(
        long = "gemini-models",
        env = "GEMINI_MODELS",
        value_delimiter = ',',
        default_value = "gemini-2.5-flash,gemini-2.0-flash"
    )]
    pub gemini_models: Vec<String>,

    #[arg(long = "gemini-base-url", env = "GEMINI_API_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MailArgs {
    #[arg(long = "mail-sender", env = "MAIL_SENDER")]
    pub sender: String,

    #[arg(long = "mail-subject", env = "MAIL_SUBJECT", default_value = DEFAULT_MAIL_SUBJECT)]
    pub subject: String,

    #[arg(long = "sendgrid-api-key", env = "SENDGRID_API_KEY")]
    pub sendgrid_api_key: Option<String>,

    #[arg(long = "smtp-host", env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    #[arg(long = "smtp-port", env = "SMTP_PORT", default_value_t = 587)]
    pub smtp_port: u16,

    #[arg(long = "smtp-username", env = "SMTP_USERNAME", default_value = "")]
    pub smtp_username: String,

    #[arg(long = "smtp-password", env = "SMTP_PASSWORD", default_value = "")]
    pub smtp_password: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl TryFrom<Args> for SkinRelayConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let models: Vec<String> = args
            .llm
            .gemini_models
            .iter()
            .map(|model| model.trim().to_string())
            .filter(|model| !model.is_empty())
            .collect();

        if models.is_empty() {
            bail!("GEMINI_MODELS must name at least one model");
        }

        // SendGrid wins when both transports are configured.
        let transport = match (args.mail.sendgrid_api_key, args.mail.smtp_host) {
            (Some(api_key), _) if !api_key.is_empty() => MailTransportConfig::SendGrid { api_key },
            (_, Some(host)) if !host.is_empty() => MailTransportConfig::Smtp(SmtpConfig {
                host,
                port: args.mail.smtp_port,
                username: args.mail.smtp_username,
                password: args.mail.smtp_password,
            }),
            _ => bail!("either SENDGRID_API_KEY or SMTP_HOST must be set"),
        };

        Ok(SkinRelayConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_models: models,
                gemini_base_url: args.llm.gemini_base_url,
            },
            mail: MailConfig {
                sender: args.mail.sender,
                subject: args.mail.subject,
                transport,
            },
        })
    }
}
