pub mod media;
pub mod users;

use serde::de::DeserializeOwned;

use crate::usecase::ports::gateway::GatewayError;

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub(crate) fn transport_error(url: &str, err: reqwest::Error) -> GatewayError {
    if err.is_decode() {
        GatewayError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else {
        GatewayError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

pub(crate) fn check_status(
    url: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(GatewayError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

pub(crate) async fn read_json<T: DeserializeOwned>(
    url: &str,
    response: reqwest::Response,
) -> Result<T, GatewayError> {
    let body = check_status(url, response)?
        .bytes()
        .await
        .map_err(|err| transport_error(url, err))?;
    serde_json::from_slice(&body).map_err(|err| GatewayError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })
}
