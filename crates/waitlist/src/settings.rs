//! Environment-driven configuration.
//!
//! Settings come from environment variables (after an optional `.env` file has
//! been loaded by the binary):
//!
//! | Variable         | Default                         |
//! |------------------|---------------------------------|
//! | `GUILD_ID`       | required                        |
//! | `BOT_TOKEN`      | required                        |
//! | `LIMIT`          | `1000`                          |
//! | `API_BASE`       | `https://discord.com/api/v10`   |
//! | `OUTPUT_PATH`    | `list.md`                       |
//! | `ARCHIVE_DIR`    | `archive`                       |
//! | `REPORT_TITLE`   | `Ghostty Waiting List`          |
//! | `COMMUNITY_NAME` | `Ghostty`                       |
//! | `COMMUNITY_URL`  | the Ghostty beta channel        |

use std::path::PathBuf;

use derive_builder::Builder;
use derive_getters::Getters;
use serde::Deserialize;
use tracing::{debug, instrument};
use waitlist_discord::{DEFAULT_API_BASE, DiscordClientConfig, MAX_PAGE_LIMIT};
use waitlist_error::{ConfigError, WaitlistResult};
use waitlist_report::{
    DEFAULT_ARCHIVE_DIR, DEFAULT_COMMUNITY_NAME, DEFAULT_COMMUNITY_URL, DEFAULT_CURRENT_PATH,
    DEFAULT_TITLE, ReportTemplate, ReportWriter,
};

/// Default members page size.
pub const DEFAULT_LIMIT: u32 = MAX_PAGE_LIMIT;

/// Settings as they arrive from the environment, before validation.
#[derive(Deserialize)]
struct RawSettings {
    guild_id: Option<String>,
    bot_token: Option<String>,
    limit: u32,
    api_base: String,
    output_path: PathBuf,
    archive_dir: PathBuf,
    report_title: String,
    community_name: String,
    community_url: String,
}

/// Validated configuration for one report run.
#[derive(Clone, Getters, Builder)]
#[builder(setter(into))]
pub struct WaitlistConfig {
    /// Guild whose members are listed
    guild_id: String,
    /// Bot token used for the members endpoint
    bot_token: String,
    /// Members requested per page
    #[builder(default = "DEFAULT_LIMIT")]
    limit: u32,
    /// Discord REST API base URL
    #[builder(default = "DEFAULT_API_BASE.to_string()")]
    api_base: String,
    /// Latest report location
    #[builder(default = "PathBuf::from(DEFAULT_CURRENT_PATH)")]
    output_path: PathBuf,
    /// Directory for per-day reports
    #[builder(default = "PathBuf::from(DEFAULT_ARCHIVE_DIR)")]
    archive_dir: PathBuf,
    /// Texts surrounding the report data
    #[builder(default)]
    template: ReportTemplate,
}

impl WaitlistConfig {
    /// Creates a new builder for WaitlistConfig.
    pub fn builder() -> WaitlistConfigBuilder {
        WaitlistConfigBuilder::default()
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a required variable is missing or a
    /// value is out of range.
    pub fn from_env() -> WaitlistResult<Self> {
        Self::from_source(None)
    }

    /// Load configuration from an explicit variable map instead of the
    /// process environment. Keys are matched case-insensitively, and empty
    /// values count as unset.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a required variable is missing or a
    /// value is out of range.
    #[instrument(skip_all)]
    pub fn from_source(vars: Option<::config::Map<String, String>>) -> WaitlistResult<Self> {
        let settings = ::config::Config::builder()
            .set_default("limit", i64::from(DEFAULT_LIMIT))
            .and_then(|b| b.set_default("api_base", DEFAULT_API_BASE))
            .and_then(|b| b.set_default("output_path", DEFAULT_CURRENT_PATH))
            .and_then(|b| b.set_default("archive_dir", DEFAULT_ARCHIVE_DIR))
            .and_then(|b| b.set_default("report_title", DEFAULT_TITLE))
            .and_then(|b| b.set_default("community_name", DEFAULT_COMMUNITY_NAME))
            .and_then(|b| b.set_default("community_url", DEFAULT_COMMUNITY_URL))
            .map_err(|e| ConfigError::new(format!("Failed to set defaults: {}", e)))?
            .add_source(::config::Environment::default().ignore_empty(true).source(vars))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read environment: {}", e)))?;

        let raw: RawSettings = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;

        let config = Self {
            guild_id: raw.guild_id.unwrap_or_default(),
            bot_token: raw.bot_token.unwrap_or_default(),
            limit: raw.limit,
            api_base: raw.api_base,
            output_path: raw.output_path,
            archive_dir: raw.archive_dir,
            template: ReportTemplate::builder()
                .title(raw.report_title)
                .community_name(raw.community_name)
                .community_url(raw.community_url)
                .build()
                .map_err(|e| ConfigError::new(format!("Invalid report template: {}", e)))?,
        };
        config.validate()?;

        debug!(config = ?config, "Loaded configuration");
        Ok(config)
    }

    /// Check required values and ranges.
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first problem found.
    pub fn validate(&self) -> WaitlistResult<()> {
        if self.guild_id.trim().is_empty() {
            return Err(ConfigError::for_variable("GUILD_ID", "is required").into());
        }
        if self.bot_token.trim().is_empty() {
            return Err(ConfigError::for_variable("BOT_TOKEN", "is required").into());
        }
        if self.limit == 0 || self.limit > MAX_PAGE_LIMIT {
            return Err(ConfigError::for_variable(
                "LIMIT",
                format!("must be between 1 and {}, got {}", MAX_PAGE_LIMIT, self.limit),
            )
            .into());
        }
        Ok(())
    }

    /// Connection settings for the member client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the client settings cannot be built.
    pub fn discord_client_config(&self) -> WaitlistResult<DiscordClientConfig> {
        DiscordClientConfig::builder()
            .guild_id(self.guild_id.clone())
            .bot_token(self.bot_token.clone())
            .api_base(self.api_base.clone())
            .build()
            .map_err(|e| {
                ConfigError::new(format!("Invalid Discord client settings: {}", e)).into()
            })
    }

    /// Writer for the configured output locations.
    pub fn report_writer(&self) -> ReportWriter {
        ReportWriter::new(self.output_path.clone(), self.archive_dir.clone())
    }
}

impl std::fmt::Debug for WaitlistConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaitlistConfig")
            .field("guild_id", &self.guild_id)
            .field("bot_token", &"<redacted>")
            .field("limit", &self.limit)
            .field("api_base", &self.api_base)
            .field("output_path", &self.output_path)
            .field("archive_dir", &self.archive_dir)
            .field("template", &self.template)
            .finish()
    }
}
