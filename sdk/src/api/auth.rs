use super::graphql::post_graphql;
use anyhow::Error;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::debug;

const GENERATE_TOKEN_MUTATION: &str = r"
    mutation GenerateToken($publicKey: String!) {
        generateToken(publicKey: $publicKey) {
            token
            expiresAt
        }
    }
";

#[derive(Debug, Deserialize)]
struct GeneratedToken {
    token: String,
    /// Unix timestamp in seconds after which the token is no longer valid.
    #[serde(rename = "expiresAt")]
    expires_at: i64,
}

/// Cached bearer token for the GraphQL API. The token itself is opaque to
/// the SDK; only its expiry is interpreted.
pub(crate) struct TokenManager {
    cached: Mutex<Option<GeneratedToken>>,
}

impl TokenManager {
    pub(crate) fn new() -> Self {
        Self {
            cached: Mutex::new(None),
        }
    }

    /// The current bearer token, requesting a fresh one from the service
    /// when none is cached or the cached one has expired. The cache lock is
    /// held across the refresh so concurrent callers share one request.
    pub(crate) async fn bearer_token(
        &self,
        client: &reqwest::Client,
        api_url: &str,
        public_key: &str,
    ) -> Result<String, Error> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref()
            && token.expires_at > Utc::now().timestamp()
        {
            return Ok(token.token.clone());
        }

        debug!("Requesting a new auth token");
        let data = post_graphql(
            client,
            api_url,
            GENERATE_TOKEN_MUTATION,
            json!({ "publicKey": public_key }),
            None,
        )
        .await?;
        let token: GeneratedToken = serde_json::from_value(
            data.get("generateToken")
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("No data returned from generateToken"))?,
        )
        .map_err(|e| anyhow::anyhow!("Failed to parse generateToken response: {e}"))?;

        let bearer = token.token.clone();
        *cached = Some(token);
        Ok(bearer)
    }
}
