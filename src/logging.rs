// src/logging.rs

use flexi_logger::{FileSpec, FlexiLoggerError, Logger, LoggerHandle};
use log::info;

pub const LOG_FILE_BASENAME: &str = "geminichat";

/// Summary of one call to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCallLog {
    /// Endpoint without the query string, so the key never reaches the log.
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: Option<u16>,
    pub response_time_ms: u128,
}

impl ApiCallLog {
    pub fn to_line(&self) -> String {
        let status = self
            .response_status
            .map_or_else(|| "none".to_string(), |s| s.to_string());
        format!(
            "{} - {} - Status: {} - Time: {}ms",
            self.endpoint, self.request_summary, status, self.response_time_ms
        )
    }
}

/// Logs an API call through the `log` facade.
pub fn log_api_call(log: &ApiCallLog) {
    info!(target: "geminichat::api", "{}", log.to_line());
}

/// Sends log output to `geminichat.log` in the working directory so it never
/// draws over the terminal UI. `RUST_LOG` overrides `default_level`.
///
/// The returned handle must stay alive for as long as logging is needed.
pub fn init_logging(default_level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(default_level)?
        .log_to_file(
            FileSpec::default()
                .basename(LOG_FILE_BASENAME)
                .suppress_timestamp(),
        )
        .append()
        .format(flexi_logger::detailed_format)
        .start()
}
