use anyhow::Error;
use tracing::info;

/// Sample rider identity documented alongside the wire format. Keys are
/// test-only; never put a real key in source or logs.
pub const SAMPLE_PUBLIC_KEY: &str = "0xdeb4cfb63db134698e1879ea24904df074726cc0";
pub const SAMPLE_PRIVATE_KEY: &str =
    "d2c446110cfcecbdf05b2be528e72483de5b6f7ef9c7856df2f81f48e9f2748f";

pub struct Config {
    /// Base URL of the Clutch Hub API. When unset the tool runs offline
    /// against a locally built unsigned transaction.
    pub api_url: Option<String>,
    pub public_key: String,
    pub private_key: String,
    /// Optional path the raw transaction hex is written to.
    pub output_file: Option<String>,
}

impl Config {
    pub fn new() -> Result<Self, Error> {
        // Load environment variables from .env file
        let env_path = format!("{}/.env", env!("CARGO_MANIFEST_DIR"));
        dotenvy::from_path(env_path).ok();

        let api_url = std::env::var("CLUTCH_API_URL").ok();

        let public_key =
            std::env::var("CLUTCH_PUBLIC_KEY").unwrap_or(SAMPLE_PUBLIC_KEY.to_string());

        let private_key =
            std::env::var("CLUTCH_PRIVATE_KEY").unwrap_or(SAMPLE_PRIVATE_KEY.to_string());

        let output_file = std::env::var("TX_OUTPUT_FILE").ok();

        info!(
            "Configuration:\n\
             api_url: {}\n\
             public_key: {}\n\
             output_file: {}",
            api_url.as_deref().unwrap_or("(offline)"),
            public_key,
            output_file.as_deref().unwrap_or("(none)"),
        );

        Ok(Config {
            api_url,
            public_key,
            private_key,
            output_file,
        })
    }

    /// True when the run uses the documented sample identity end to end, in
    /// which case the output must reproduce the recorded vector.
    pub fn uses_sample_identity(&self) -> bool {
        self.api_url.is_none()
            && self.public_key == SAMPLE_PUBLIC_KEY
            && self.private_key == SAMPLE_PRIVATE_KEY
    }
}
