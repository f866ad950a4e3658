use anyhow::Error;
use serde_json::{Value, json};
use tracing::warn;

/// POST a GraphQL document to `{api_url}/graphql` and extract its `data`.
///
/// An HTTP error status, an `errors` array in the body and an absent or
/// null `data` field all surface as errors; callers never see a partial
/// response.
pub(crate) async fn post_graphql(
    client: &reqwest::Client,
    api_url: &str,
    query: &str,
    variables: Value,
    bearer_token: Option<&str>,
) -> Result<Value, Error> {
    let mut request = client
        .post(format!("{api_url}/graphql"))
        .json(&json!({ "query": query, "variables": variables }));
    if let Some(token) = bearer_token {
        request = request.bearer_auth(token);
    }

    let response = request
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("GraphQL request failed: {e}"))?;
    let status = response.status();
    let body: Value = response
        .json()
        .await
        .map_err(|e| anyhow::anyhow!("GraphQL response is not valid JSON: {e}"))?;

    if !status.is_success() {
        return Err(anyhow::anyhow!("GraphQL request returned HTTP {status}: {body}"));
    }

    if let Some(errors) = body.get("errors").and_then(Value::as_array) {
        let joined = errors
            .iter()
            .filter_map(|error| error.get("message").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("\n");
        warn!("GraphQL query returned errors: {joined}");
        return Err(anyhow::anyhow!(
            "GraphQL query failed: {}",
            if joined.is_empty() {
                body.to_string()
            } else {
                joined
            }
        ));
    }

    match body.get("data") {
        Some(data) if !data.is_null() => Ok(data.clone()),
        _ => Err(anyhow::anyhow!("No data returned from the API")),
    }
}
