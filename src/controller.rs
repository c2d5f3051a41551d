//! Application Controller
//!
//! Load, mutate, reload. Every successful mutation is followed by a full
//! list refetch; the board is never patched locally.

use crate::api::TicketService;
use crate::models::{Ticket, TicketId, TicketPatch};
use crate::store::{BoardState, ModalKind, NoticeKind};
use crate::ticket_view::TicketEvent;

/// Access to the board state. Updates are short and synchronous, never held
/// across an await.
pub trait BoardHandle {
    fn update_board<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R;

    fn read_board<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R;

    /// Surface an inline error
    fn notify(&self, kind: NoticeKind) {
        self.update_board(|b| b.push_notice(kind));
    }
}

pub struct Controller<A, B> {
    api: A,
    board: B,
}

impl<A: TicketService, B: BoardHandle> Controller<A, B> {
    pub fn new(api: A, board: B) -> Self {
        Self { api, board }
    }

    /// Initial load after the page controls are bound
    pub async fn start(&self) {
        log::info!("[APP] Starting, initial load");
        self.load_tickets().await;
    }

    /// Replace the list with a fresh list-all. Returns false on failure.
    pub async fn load_tickets(&self) -> bool {
        self.board.update_board(|b| b.loading = true);
        let loaded = match self.api.list_tickets().await {
            Ok(tickets) => {
                log::info!("[APP] Loaded {} tickets", tickets.len());
                self.board.update_board(|b| b.replace_tickets(tickets));
                true
            }
            Err(e) => {
                log::error!("[APP] Failed to load tickets: {}", e);
                self.board.notify(NoticeKind::LoadFailed);
                false
            }
        };
        self.board.update_board(|b| b.loading = false);
        loaded
    }

    pub fn add_ticket(&self) {
        self.board.update_board(|b| b.open_ticket_modal(None));
    }

    pub fn edit_ticket(&self, ticket: Ticket) {
        self.board.update_board(|b| b.open_ticket_modal(Some(ticket)));
    }

    pub fn request_delete(&self, ticket: Ticket) {
        self.board.update_board(|b| b.open_delete_modal(ticket));
    }

    /// Submit the form: create when nothing is being edited, update otherwise
    pub async fn save_ticket(&self) {
        let pending = self.board.read_board(|b| {
            b.form
                .to_payload()
                .map(|payload| (b.editing.as_ref().map(|t| t.id.clone()), payload))
        });
        let Some((editing, payload)) = pending else {
            log::warn!("[APP] Ignoring save with an empty name");
            return;
        };
        if !self.claim("save") {
            return;
        }

        let result = match &editing {
            Some(id) => self.api.update_ticket(id, &TicketPatch::from(payload)).await,
            None => self.api.create_ticket(&payload).await,
        };
        match result {
            Ok(_) => {
                self.board.update_board(|b| b.close_modal(ModalKind::TicketForm));
                self.load_tickets().await;
            }
            Err(e) => {
                log::error!("[APP] Failed to save ticket: {}", e);
                self.board.notify(NoticeKind::SaveFailed);
            }
        }
        self.release();
    }

    /// Push the new status, then reload whether or not the update worked
    pub async fn update_status(&self, id: TicketId, status: bool) {
        if !self.claim("status update") {
            return;
        }
        if let Err(e) = self.api.update_ticket(&id, &TicketPatch::status(status)).await {
            log::error!("[APP] Failed to update ticket status: {}", e);
            self.board.notify(NoticeKind::StatusFailed);
        }
        self.load_tickets().await;
        self.release();
    }

    pub async fn confirm_delete(&self) {
        let Some(id) = self.board.read_board(|b| b.editing.as_ref().map(|t| t.id.clone())) else {
            return;
        };
        if !self.claim("delete") {
            return;
        }
        match self.api.delete_ticket(&id).await {
            Ok(()) => {
                self.board.update_board(|b| b.close_modal(ModalKind::Delete));
                self.load_tickets().await;
            }
            Err(e) => {
                log::error!("[APP] Failed to delete ticket: {}", e);
                self.board.notify(NoticeKind::DeleteFailed);
            }
        }
        self.release();
    }

    /// Show the list copy at once, then swap in the server's full record
    pub async fn show_details(&self, ticket: Ticket) {
        let id = ticket.id.clone();
        self.board.update_board(|b| b.open_details(ticket));
        match self.api.get_ticket(&id).await {
            Ok(fresh) => self.board.update_board(|b| b.refresh_details(fresh)),
            Err(e) => log::warn!("[APP] Could not refresh ticket {}: {}", id, e),
        }
    }

    pub async fn handle_event(&self, event: TicketEvent) {
        match event {
            TicketEvent::StatusToggled { id, status } => self.update_status(id, status).await,
            TicketEvent::DetailsRequested(ticket) => self.show_details(ticket).await,
            TicketEvent::EditRequested(ticket) => self.edit_ticket(ticket),
            TicketEvent::DeleteRequested(ticket) => self.request_delete(ticket),
        }
    }

    fn claim(&self, action: &str) -> bool {
        let claimed = self.board.update_board(|b| b.begin_mutation());
        if !claimed {
            log::warn!("[APP] Ignoring {} while another change is in flight", action);
        }
        claimed
    }

    fn release(&self) {
        self.board.update_board(|b| b.end_mutation());
    }
}
