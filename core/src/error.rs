use thiserror::Error;

/// Failures at the fetch boundary, before data reaches the transforms.
///
/// The transforms themselves are total functions and never return these;
/// a caller that hits a `FetchError` hands the core an empty collection
/// and keeps the failure flag for the presentation layer, so "fetch
/// failed" stays distinguishable from "no data exists".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("could not decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },
}
