//! Request Shaping
//!
//! Pure helpers that turn an operation into a URL and a raw reply into a
//! result. Kept free of I/O so they can be exercised directly.

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::TicketId;

/// Query parameter carrying the operation selector
pub const METHOD_PARAM: &str = "method";
/// Query parameter carrying the ticket id
pub const ID_PARAM: &str = "id";

/// Operations understood by the help-desk endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AllTickets,
    TicketById,
    CreateTicket,
    UpdateById,
    DeleteById,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::AllTickets => "allTickets",
            Operation::TicketById => "ticketById",
            Operation::CreateTicket => "createTicket",
            Operation::UpdateById => "updateById",
            Operation::DeleteById => "deleteById",
        }
    }
}

/// Build the request URL: base + `method` + optional `id`
pub fn request_url(base: &Url, op: Operation, id: Option<&TicketId>) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair(METHOD_PARAM, op.as_str());
        if let Some(id) = id {
            pairs.append_pair(ID_PARAM, id.as_str());
        }
    }
    url
}

/// Parse and check a configured base URL
pub fn parse_base_url(raw: &str) -> ApiResult<Url> {
    let url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme {}", other),
        }),
    }
}

/// Normalized reply body
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    Json(Value),
    /// No body (or 204 on delete)
    Success,
}

impl ApiReply {
    /// Decode the JSON body, None for a bare success marker
    pub fn decode<T: DeserializeOwned>(self) -> ApiResult<Option<T>> {
        match self {
            ApiReply::Json(value) => Ok(Some(serde_json::from_value(value)?)),
            ApiReply::Success => Ok(None),
        }
    }
}

/// A delete answered with 204 is done; the body is never read
pub fn is_no_content(op: Operation, status: u16) -> bool {
    op == Operation::DeleteById && status == 204
}

pub fn interpret_reply(op: Operation, status: u16, body: &str) -> ApiResult<ApiReply> {
    if is_no_content(op, status) {
        return Ok(ApiReply::Success);
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    if body.trim().is_empty() {
        return Ok(ApiReply::Success);
    }
    Ok(ApiReply::Json(serde_json::from_str(body)?))
}
