//! Add-channel operation for the bridges resource

use rest_client::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::operation::AriOperation;

/// Add a channel to a bridge
pub struct AddChannelOperation;

/// Request for adding a channel
#[derive(Debug, Clone, Serialize)]
pub struct AddChannelRequest {
    pub bridge_id: String,
    /// Ids of channels to add; allows comma separated values
    pub channel: String,
    /// Channel's role in the bridge
    pub role: Option<String>,
}

/// Response for adding a channel (no body)
#[derive(Debug, Deserialize)]
pub struct AddChannelResponse;

impl AriOperation for AddChannelOperation {
    type Request = AddChannelRequest;
    type Response = AddChannelResponse;

    const METHOD: Method = Method::Post;

    fn path(request: &Self::Request) -> String {
        format!("/bridges/{}/addChannel", request.bridge_id)
    }

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = vec![("channel", request.channel.clone())];
        if let Some(role) = &request.role {
            query.push(("role", role.clone()));
        }
        query
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response, ApiError> {
        Ok(AddChannelResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_contains_bridge_id() {
        let request = AddChannelRequest {
            bridge_id: "b1".to_string(),
            channel: "c1".to_string(),
            role: None,
        };
        assert_eq!(AddChannelOperation::path(&request), "/bridges/b1/addChannel");
    }

    #[test]
    fn test_query_without_role() {
        let request = AddChannelRequest {
            bridge_id: "b1".to_string(),
            channel: "c1,c2".to_string(),
            role: None,
        };
        assert_eq!(
            AddChannelOperation::query(&request),
            vec![("channel", "c1,c2".to_string())]
        );
    }

    #[test]
    fn test_query_with_role() {
        let request = AddChannelRequest {
            bridge_id: "b1".to_string(),
            channel: "c1".to_string(),
            role: Some("announcer".to_string()),
        };
        assert_eq!(
            AddChannelOperation::query(&request),
            vec![
                ("channel", "c1".to_string()),
                ("role", "announcer".to_string()),
            ]
        );
    }
}
