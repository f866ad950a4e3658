// External collaborator plumbing: GraphQL queries, auth token cache and raw
// transaction submission. The signing core in `tx` never touches this.

mod auth;
mod graphql;

use crate::models::{RideRequestArgs, SignedTransaction, UnsignedTransaction};
use crate::tx::{self, SignTransactionError};
use crate::utils::strip_hex_prefix;
use anyhow::Error;
use auth::TokenManager;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const CREATE_UNSIGNED_RIDE_REQUEST_MUTATION: &str = r"
    mutation CreateUnsignedRideRequest($pickupLatitude: Float!, $pickupLongitude: Float!, $dropoffLatitude: Float!, $dropoffLongitude: Float!, $fare: Int!) {
        createUnsignedRideRequest(
            pickupLatitude: $pickupLatitude,
            pickupLongitude: $pickupLongitude,
            dropoffLatitude: $dropoffLatitude,
            dropoffLongitude: $dropoffLongitude,
            fare: $fare
        )
    }
";

/// Client for the Clutch Hub service. Fetches unsigned ride request
/// transactions over GraphQL, signs them locally and submits the signed
/// bytes. The private key never leaves the caller.
pub struct ClutchHubClient {
    client: reqwest::Client,
    api_url: String,
    public_key: String,
    token_manager: TokenManager,
}

impl ClutchHubClient {
    pub fn new(api_url: &str, public_key: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            public_key: public_key.to_string(),
            token_manager: TokenManager::new(),
        })
    }

    /// Fetch an unsigned ride request transaction from the service.
    pub async fn create_unsigned_ride_request(
        &self,
        args: &RideRequestArgs,
    ) -> Result<UnsignedTransaction, Error> {
        let token = self
            .token_manager
            .bearer_token(&self.client, &self.api_url, &self.public_key)
            .await?;

        debug!("Requesting an unsigned ride request transaction");
        let data = graphql::post_graphql(
            &self.client,
            &self.api_url,
            CREATE_UNSIGNED_RIDE_REQUEST_MUTATION,
            json!({
                "pickupLatitude": args.pickup.latitude,
                "pickupLongitude": args.pickup.longitude,
                "dropoffLatitude": args.dropoff.latitude,
                "dropoffLongitude": args.dropoff.longitude,
                "fare": args.fare,
            }),
            Some(&token),
        )
        .await?;

        let unsigned_tx = data
            .get("createUnsignedRideRequest")
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No data returned from createUnsignedRideRequest"))?;
        serde_json::from_value(unsigned_tx)
            .map_err(|e| anyhow::anyhow!("Failed to parse unsigned transaction: {e}"))
    }

    /// Sign an unsigned transaction with the given private key. Pure local
    /// computation, see [`tx::sign_transaction`].
    pub fn sign_transaction(
        &self,
        unsigned_tx: &UnsignedTransaction,
        private_key_hex: &str,
    ) -> Result<SignedTransaction, SignTransactionError> {
        tx::sign_transaction(unsigned_tx, private_key_hex)
    }

    /// Submit a signed transaction to the service. The payload travels as
    /// unprefixed hex; the service acknowledgment is returned as is.
    pub async fn submit_transaction(
        &self,
        from: &str,
        nonce: u64,
        signed_tx: &SignedTransaction,
    ) -> Result<Value, Error> {
        debug!("Submitting transaction from {from} with nonce {nonce}");
        let response = self
            .client
            .post(format!("{}/send-transaction", self.api_url))
            .json(&json!({
                "from": from,
                "nonce": nonce,
                "payload": strip_hex_prefix(&signed_tx.raw_transaction),
                "r": signed_tx.r,
                "s": signed_tx.s,
                "v": signed_tx.v,
            }))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("send-transaction request failed: {e}"))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("send-transaction response is not valid JSON: {e}"))?;
        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "send-transaction returned HTTP {status}: {body}"
            ));
        }
        Ok(body)
    }
}
