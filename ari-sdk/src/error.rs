use thiserror::Error;

/// Errors surfaced by the SDK layer
///
/// The resource bindings perform no validation of their own; everything here
/// originates in the API or event layer and passes through unchanged.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    Api(#[from] ari_api::ApiError),

    #[error("Event error: {0}")]
    Events(#[from] ari_events::EventError),
}

/// Type alias for results that can return an SdkError
pub type Result<T> = std::result::Result<T, SdkError>;
