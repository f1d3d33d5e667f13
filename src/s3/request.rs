use crate::s3::ProviderError;
use bytes::Bytes;
use http::Method;
use reqwest::{
    Client, Response,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use std::collections::BTreeMap;
use url::Url;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// # Errors
///
/// Will return `Err` if can not make the request
pub async fn request(
    url: Url,
    method: Method,
    headers: &BTreeMap<String, String>,
    body: Option<Bytes>,
) -> Result<Response, ProviderError> {
    let headers = headers
        .iter()
        .map(|(k, v)| {
            Ok((
                k.parse::<HeaderName>()
                    .map_err(|e| ProviderError::Request(format!("header {k}: {e}")))?,
                v.parse::<HeaderValue>()
                    .map_err(|e| ProviderError::Request(format!("header {k}: {e}")))?,
            ))
        })
        .collect::<Result<HeaderMap, ProviderError>>()?;

    let client = Client::builder().user_agent(APP_USER_AGENT).build()?;

    log::debug!("{method} {url}");

    let request = client.request(method, url).headers(headers);

    let request = match body {
        Some(body) => request.body(body),
        None => request,
    };

    Ok(request.send().await?)
}
