//! Frontend Models
//!
//! Ticket records as exchanged with the help-desk API.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Server-assigned ticket identifier, kept as opaque text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TicketId(pub String);

impl TicketId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for TicketId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for TicketId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Self(s)),
            Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(serde::de::Error::custom(format!("invalid ticket id: {}", other))),
        }
    }
}

/// Ticket as held and rendered by the client
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "TicketRecord")]
pub struct Ticket {
    pub id: TicketId,
    pub name: String,
    pub description: String,
    pub status: bool,
    /// Creation time, epoch milliseconds
    pub created: i64,
}

/// Raw wire shape, before coercion
#[derive(Deserialize)]
struct TicketRecord {
    id: TicketId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Value,
    #[serde(default)]
    created: Value,
}

impl From<TicketRecord> for Ticket {
    fn from(raw: TicketRecord) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            description: raw.description.unwrap_or_default(),
            status: truthy(&raw.status),
            // A zero timestamp is as good as none
            created: created_millis(&raw.created).filter(|ms| *ms != 0).unwrap_or_else(now_millis),
        }
    }
}

/// Boolean coercion with JavaScript truthiness
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn created_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(s.trim()).ok().map(|d| d.timestamp_millis())),
        _ => None,
    }
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Create payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTicket {
    pub name: String,
    pub description: String,
}

/// Partial update payload; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

impl TicketPatch {
    pub fn status(status: bool) -> Self {
        Self { status: Some(status), ..Default::default() }
    }
}

impl From<NewTicket> for TicketPatch {
    fn from(t: NewTicket) -> Self {
        Self { name: Some(t.name), description: Some(t.description), status: None }
    }
}

/// Contents of the add/edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketForm {
    pub name: String,
    pub description: String,
}

impl TicketForm {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self { name: ticket.name.clone(), description: ticket.description.clone() }
    }

    /// The payload to send, or None when the name is blank
    pub fn to_payload(&self) -> Option<NewTicket> {
        if self.name.trim().is_empty() {
            return None;
        }
        Some(NewTicket { name: self.name.clone(), description: self.description.clone() })
    }
}
