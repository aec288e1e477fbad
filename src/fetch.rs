//! HTTP retrieval of upstream documents

use crate::error::{Result, StewError};

/// GET `url` and return the response body as text.
///
/// Fails on transport errors and on any non-success response status; no
/// partial body is ever returned.
pub fn get_text(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url).map_err(|e| StewError::RequestFailed {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(StewError::FetchFailed {
            url: url.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("unknown").to_string(),
        });
    }

    response.text().map_err(|e| StewError::RequestFailed {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
