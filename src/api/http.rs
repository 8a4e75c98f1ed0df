use crate::objects::ApiError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::AbortSignal;

#[derive(Debug, Clone, Copy)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

async fn fetch(
    url: &str,
    method: HttpMethod,
    headers: Option<HashMap<String, String>>,
    body: Option<String>,
    signal: Option<&AbortSignal>,
) -> Result<web_sys::Response, ApiError> {
    let mut opts = web_sys::RequestInit::new();

    opts.method(method.as_str());
    opts.signal(signal);

    if let Some(headers) = headers {
        let opt_headers = web_sys::Headers::new()?;

        for (key, val) in headers {
            opt_headers.append(&key, &val)?;
        }

        opts.headers(&opt_headers);
    }

    if let Some(val) = body {
        opts.body(Some(&JsValue::from_str(&val)));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)?;
    let window = web_sys::window().ok_or("error getting window")?;

    log::debug!("{} {}", method.as_str(), url);

    let resp: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    match resp.ok() {
        true => Ok(resp),
        false => {
            let body = read_text(&resp).await.unwrap_or_default();
            Err(ApiError::from_response(
                resp.status(),
                &resp.status_text(),
                &body,
            ))
        }
    }
}

async fn read_text(resp: &web_sys::Response) -> Result<String, ApiError> {
    JsFuture::from(resp.text()?)
        .await?
        .as_string()
        .ok_or_else(|| "error casting fetched value to string".into())
}

fn json_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();

    headers.insert("Content-Type".into(), "application/json".into());
    headers
}

pub async fn fetch_deserializable<T: DeserializeOwned>(
    url: &str,
    method: HttpMethod,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let resp = fetch(url, method, None, None, signal).await?;

    Ok(serde_json::from_str(&read_text(&resp).await?)?)
}

/// Sends `body` as JSON and decodes the JSON response.
pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    method: HttpMethod,
    body: &B,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let resp = fetch(
        url,
        method,
        Some(json_headers()),
        Some(serde_json::to_string(body)?),
        signal,
    )
    .await?;

    Ok(serde_json::from_str(&read_text(&resp).await?)?)
}

/// Issues a request whose response body is of no interest.
pub async fn send_empty(
    url: &str,
    method: HttpMethod,
    signal: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    fetch(url, method, None, None, signal).await.map(|_| ())
}
