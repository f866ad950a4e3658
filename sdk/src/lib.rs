// Client SDK for the Clutch Hub ride service. Fetches unsigned ride request
// transactions from the GraphQL API, encodes and signs them locally with a
// deterministic byte format, and submits the signed bytes back to the service.
pub mod api;
pub mod models;
pub mod tx;
pub mod utils;
