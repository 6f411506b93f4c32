use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Response shape shared by the automation server's set and get flows.
///
/// Transport failures and malformed bodies are folded into the `Error`
/// variant, so callers only ever branch on the status.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BridgeResponse {
    Success {
        key: String,
        #[serde(default)]
        value: Option<serde_json::Value>,
    },
    Error {
        message: String,
    },
}

/// Request body for the store operation
#[derive(Serialize)]
struct SetRequest<'a> {
    key: &'a str,
    value: &'a str,
}

/// HTTP client for the automation server's key/value endpoints
#[derive(Clone)]
pub struct BridgeClient {
    base_url: String,
    client: reqwest::Client,
}

impl BridgeClient {
    /// Create a new client for the given base URL, e.g. `http://127.0.0.1:1880`
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Store a key/value pair on the automation server
    pub async fn set_value(&self, key: &str, value: &str) -> BridgeResponse {
        let endpoint = set_endpoint(&self.base_url);
        debug!("Sending POST to {} with key: {}", endpoint, key);

        let result = self
            .client
            .post(&endpoint)
            .json(&SetRequest { key, value })
            .send()
            .await;

        normalize_response(result, key).await
    }

    /// Retrieve the value stored under a key
    pub async fn get_value(&self, key: &str) -> BridgeResponse {
        let endpoint = get_endpoint(&self.base_url, key);
        debug!("Sending GET to {}", endpoint);

        let result = self.client.get(&endpoint).send().await;

        normalize_response(result, key).await
    }
}

/// Endpoint for the store operation
fn set_endpoint(base_url: &str) -> String {
    format!("{}/set", base_url)
}

/// Endpoint for the retrieval operation, with the key escaped as a path segment
fn get_endpoint(base_url: &str, key: &str) -> String {
    format!("{}/get/{}", base_url, urlencoding::encode(key))
}

/// Collapse transport errors, non-2xx statuses and unparseable bodies into
/// the error variant
async fn normalize_response(
    result: Result<reqwest::Response, reqwest::Error>,
    key: &str,
) -> BridgeResponse {
    let response = match result.and_then(|response| response.error_for_status()) {
        Ok(response) => response,
        Err(e) => {
            error!("Automation server request for key \"{}\" failed: {}", key, e);
            return BridgeResponse::Error {
                message: e.to_string(),
            };
        }
    };

    match response.json::<BridgeResponse>().await {
        Ok(parsed) => parsed,
        Err(e) => {
            error!(
                "Automation server returned an unexpected body for key \"{}\": {}",
                key, e
            );
            BridgeResponse::Error {
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_endpoint() {
        assert_eq!(
            set_endpoint("http://127.0.0.1:1880"),
            "http://127.0.0.1:1880/set"
        );
    }

    #[test]
    fn test_get_endpoint() {
        assert_eq!(
            get_endpoint("http://127.0.0.1:1880", "mykey"),
            "http://127.0.0.1:1880/get/mykey"
        );
    }

    #[test]
    fn test_get_endpoint_escapes_key() {
        assert_eq!(
            get_endpoint("http://127.0.0.1:1880", "my key/1"),
            "http://127.0.0.1:1880/get/my%20key%2F1"
        );
    }

    #[test]
    fn test_parse_set_success() {
        let response: BridgeResponse =
            serde_json::from_str(r#"{"status":"success","key":"mykey"}"#).unwrap();

        assert_eq!(
            response,
            BridgeResponse::Success {
                key: "mykey".to_string(),
                value: None,
            }
        );
    }

    #[test]
    fn test_parse_get_success_with_value() {
        let response: BridgeResponse =
            serde_json::from_str(r#"{"status":"success","key":"k","value":{"n":1}}"#).unwrap();

        assert_eq!(
            response,
            BridgeResponse::Success {
                key: "k".to_string(),
                value: Some(serde_json::json!({"n": 1})),
            }
        );
    }

    #[test]
    fn test_parse_error() {
        let response: BridgeResponse =
            serde_json::from_str(r#"{"status":"error","message":"not found"}"#).unwrap();

        assert_eq!(
            response,
            BridgeResponse::Error {
                message: "not found".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_unknown_status_is_rejected() {
        let result = serde_json::from_str::<BridgeResponse>(r#"{"status":"pending"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_set_request() {
        let body = serde_json::to_string(&SetRequest {
            key: "mykey",
            value: "some value",
        })
        .unwrap();

        assert_eq!(body, r#"{"key":"mykey","value":"some value"}"#);
    }
}
