//! Help-Desk API Client
//!
//! One HTTP endpoint, operation chosen by query parameter, JSON bodies.

mod request;
mod ticket;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::{NewTicket, Ticket, TicketId, TicketPatch};

pub use request::{interpret_reply, is_no_content, parse_base_url, request_url, ApiReply, Operation};

/// The five ticket operations the controller relies on
#[allow(async_fn_in_trait)]
pub trait TicketService {
    async fn list_tickets(&self) -> ApiResult<Vec<Ticket>>;
    async fn get_ticket(&self, id: &TicketId) -> ApiResult<Ticket>;
    /// The reply is passed through as-is; callers reload rather than trust it
    async fn create_ticket(&self, ticket: &NewTicket) -> ApiResult<ApiReply>;
    async fn update_ticket(&self, id: &TicketId, patch: &TicketPatch) -> ApiResult<ApiReply>;
    async fn delete_ticket(&self, id: &TicketId) -> ApiResult<()>;
}

/// HTTP client bound to one base URL
#[derive(Debug, Clone)]
pub struct HelpDeskApi {
    base_url: Url,
    client: Client,
}

impl HelpDeskApi {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Single best-effort call. POST when there is a body, GET otherwise.
    async fn request(&self, op: Operation, id: Option<&TicketId>, body: Option<&Value>) -> ApiResult<ApiReply> {
        let url = request_url(&self.base_url, op, id);
        let method = if body.is_some() { Method::POST } else { Method::GET };
        log::debug!("[API] {} {}", method, url);

        let mut builder = self.client.request(method, url).header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::error!("[API] request failed: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status().as_u16();
        if is_no_content(op, status) {
            return Ok(ApiReply::Success);
        }
        let text = response.text().await.map_err(|e| {
            log::error!("[API] reading response failed: {}", e);
            ApiError::from(e)
        })?;

        interpret_reply(op, status, &text).map_err(|e| {
            log::error!("[API] {} failed: {}", op.as_str(), e);
            e
        })
    }
}
