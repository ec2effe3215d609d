use std::path::PathBuf;
use std::time::Duration;

use anyhow::bail;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use query_logging::LogDestination;
use symptom_engine::{
    ClientSettings, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_SITE_NAME, DEFAULT_SITE_URL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
    Off,
}

#[derive(Parser, Debug)]
#[command(name = "symptom-checker")]
#[command(author, version, about = "Describe your symptoms and ask an LLM for possible causes", long_about = None)]
pub struct Cli {
    /// API key for the completion endpoint
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sent as `HTTP-Referer` for app attribution
    #[arg(long, default_value = DEFAULT_SITE_URL)]
    pub site_url: String,

    /// Sent as `X-Title` for app attribution
    #[arg(long, default_value = DEFAULT_SITE_NAME)]
    pub site_name: String,

    /// Overall request timeout; without it a request runs until the transport gives up
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Where to write logs. Defaults to the log file for the form and the terminal for --once
    #[arg(long, value_enum)]
    pub log: Option<LogTarget>,

    #[arg(long, default_value = "symptom_checker.log")]
    pub log_file: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,

    /// Submit these symptoms once, print the answer and exit
    #[arg(long, value_name = "SYMPTOMS")]
    pub once: Option<String>,
}

impl Cli {
    pub fn client_settings(&self) -> anyhow::Result<ClientSettings> {
        let api_key = match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => bail!("no API key configured: pass --api-key or set OPENROUTER_API_KEY"),
        };

        Ok(ClientSettings {
            endpoint: self.endpoint.clone(),
            api_key,
            model: self.model.clone(),
            site_url: self.site_url.clone(),
            site_name: self.site_name.clone(),
            request_timeout: self.timeout_secs.map(Duration::from_secs),
            ..ClientSettings::default()
        })
    }

    pub fn log_destination(&self) -> LogDestination {
        let target = self.log.unwrap_or(if self.once.is_some() {
            LogTarget::Terminal
        } else {
            LogTarget::File
        });
        match target {
            LogTarget::File => LogDestination::File,
            // The form owns the terminal; terminal logs would tear the screen.
            LogTarget::Terminal | LogTarget::Both if self.once.is_none() => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
            LogTarget::Off => LogDestination::Off,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
