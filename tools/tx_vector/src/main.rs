mod config;

use anyhow::Error;
use clutch_hub_sdk::api::ClutchHubClient;
use clutch_hub_sdk::models::{CallPayload, Coordinates, RideRequestArgs, UnsignedTransaction};
use clutch_hub_sdk::tx;
use config::Config;
use serde_json::json;
use tracing::{info, warn};

/// Raw transaction the sample trip and sample key must produce. Shared with
/// the other implementations of the signing pipeline as a comparison vector.
const EXPECTED_RAW_TRANSACTION: &str = "0xf8dca86465623463666236336462313334363938653138373965613234393034646630373437323663633002a0398b3d8cbd56ca0ae7016947feae3ab5c98207c342ff1b79808cdc571bba65f4a01a46ca6c9e49ba6867463a3cce5d01b07e8f3621887ad64101531844407625a91cb84064313636656465386563653664383564316566353239633835393436333630326465633064333039613830626630346336303836366231323832333734343764aceb01e9d288403b300b626d50c988404c2529f6b47e10d288403b35ac4197d81888404c2b187e7693508203e8";

const SAMPLE_NONCE: u64 = 2;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let parse_error = "Failed to parse env filter directive";
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("reqwest=off".parse().expect(parse_error))
        .add_directive("hyper_util=off".parse().expect(parse_error));

    tracing_subscriber::fmt()
        .with_env_filter(filter) // reads RUST_LOG
        .init();

    info!("App started");

    let config = Config::new()?;
    let args = sample_trip();

    let client = match &config.api_url {
        Some(api_url) => Some(ClutchHubClient::new(api_url, &config.public_key)?),
        None => None,
    };

    let unsigned_tx = match &client {
        Some(client) => {
            let unsigned_tx = client.create_unsigned_ride_request(&args).await?;
            info!(
                "Fetched unsigned transaction for {} with nonce {}",
                unsigned_tx.from, unsigned_tx.nonce
            );
            unsigned_tx
        }
        None => local_unsigned_transaction(&config.public_key, &args),
    };

    let signed_tx = tx::sign_transaction(&unsigned_tx, &config.private_key)?;
    info!("r: {}", signed_tx.r);
    info!("s: {}", signed_tx.s);
    info!("v: {}", signed_tx.v);
    info!("rawTransaction: {}", signed_tx.raw_transaction);

    if config.uses_sample_identity() {
        if signed_tx.raw_transaction == EXPECTED_RAW_TRANSACTION {
            info!("Raw transaction matches the recorded sample vector");
        } else {
            warn!("Raw transaction does not match the recorded sample vector");
        }
    }

    if let Some(path) = &config.output_file {
        std::fs::write(path, &signed_tx.raw_transaction)
            .map_err(|e| anyhow::anyhow!("Failed to write {path}: {e}"))?;
        info!("Saved raw transaction to {path}");
    }

    if let Some(client) = &client {
        let ack = client
            .submit_transaction(&unsigned_tx.from, unsigned_tx.nonce, &signed_tx)
            .await?;
        info!("Service acknowledged the transaction: {ack}");
    }

    Ok(())
}

fn sample_trip() -> RideRequestArgs {
    RideRequestArgs {
        pickup: Coordinates {
            latitude: 27.18767371338689,
            longitude: 56.29034313023669,
        },
        dropoff: Coordinates {
            latitude: 27.209659671374624,
            longitude: 56.336684997461475,
        },
        fare: 1000,
    }
}

/// Offline stand-in for the service response, same shape the GraphQL API
/// returns.
fn local_unsigned_transaction(public_key: &str, args: &RideRequestArgs) -> UnsignedTransaction {
    UnsignedTransaction {
        from: public_key.to_string(),
        nonce: SAMPLE_NONCE,
        call: CallPayload::new(
            "RideRequest",
            json!({
                "pickup_location": {
                    "latitude": args.pickup.latitude,
                    "longitude": args.pickup.longitude,
                },
                "dropoff_location": {
                    "latitude": args.dropoff.latitude,
                    "longitude": args.dropoff.longitude,
                },
                "fare": args.fare,
            }),
        ),
    }
}
