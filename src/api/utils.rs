use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{ApiError, ApiResult};

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    token: Option<&str>,
) -> ApiResult<Value> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint);
    debug!("GET {}", url);

    let mut request = client.get(&url);
    if let Some(token) = token {
        request = request.query(&[("token", token)]);
    }

    let res = request.send().await?;

    if !res.status().is_success() {
        return Err(ApiError::Status(res.status()));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .map_err(|e| ApiError::Malformed(format!("{}: {}", error_msg, e))),
        _ => Err(ApiError::Malformed(
            "Unexpected API response format: not an object".to_string(),
        )),
    }
}
