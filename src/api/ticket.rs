//! Ticket Operations

use crate::error::{ApiError, ApiResult};
use crate::models::{NewTicket, Ticket, TicketId, TicketPatch};

use super::{ApiReply, HelpDeskApi, Operation, TicketService};

impl TicketService for HelpDeskApi {
    async fn list_tickets(&self) -> ApiResult<Vec<Ticket>> {
        let reply = self.request(Operation::AllTickets, None, None).await?;
        Ok(reply.decode()?.unwrap_or_default())
    }

    async fn get_ticket(&self, id: &TicketId) -> ApiResult<Ticket> {
        let reply = self.request(Operation::TicketById, Some(id), None).await?;
        reply.decode()?.ok_or(ApiError::EmptyBody)
    }

    // Mutations may echo a partial record, the whole ticket or `{success: true}`
    async fn create_ticket(&self, ticket: &NewTicket) -> ApiResult<ApiReply> {
        let body = serde_json::to_value(ticket)?;
        self.request(Operation::CreateTicket, None, Some(&body)).await
    }

    async fn update_ticket(&self, id: &TicketId, patch: &TicketPatch) -> ApiResult<ApiReply> {
        let body = serde_json::to_value(patch)?;
        self.request(Operation::UpdateById, Some(id), Some(&body)).await
    }

    async fn delete_ticket(&self, id: &TicketId) -> ApiResult<()> {
        self.request(Operation::DeleteById, Some(id), None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{interpret_reply, ApiReply, Operation};
    use serde_json::json;

    #[test]
    fn test_partial_create_reply_is_success() {
        let reply = interpret_reply(Operation::CreateTicket, 200, r#"{"id":5,"status":false}"#).unwrap();
        assert_eq!(reply, ApiReply::Json(json!({"id": 5, "status": false})));
    }

    #[test]
    fn test_update_reply_shapes() {
        let marker = interpret_reply(Operation::UpdateById, 200, r#"{"success":true}"#).unwrap();
        assert_eq!(marker, ApiReply::Json(json!({"success": true})));
        assert_eq!(interpret_reply(Operation::UpdateById, 200, "").unwrap(), ApiReply::Success);
    }
}
