//! Board State Store
//!
//! The one authoritative snapshot of the ticket board, held in a Leptos
//! `reactive_stores::Store` for field-level reactivity.

use reactive_stores::Store;

use crate::models::{Ticket, TicketForm};

/// Kinds of inline error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    LoadFailed,
    SaveFailed,
    StatusFailed,
    DeleteFailed,
}

impl NoticeKind {
    pub fn message(&self) -> &'static str {
        match self {
            NoticeKind::LoadFailed => "Ошибка загрузки тикетов",
            NoticeKind::SaveFailed => "Ошибка сохранения тикета",
            NoticeKind::StatusFailed => "Ошибка обновления статуса",
            NoticeKind::DeleteFailed => "Ошибка удаления тикета",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
}

/// Which modal a backdrop click or close button refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    TicketForm,
    Delete,
    Details,
}

#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Latest successful list load, replaced wholesale
    pub tickets: Vec<Ticket>,
    /// Ticket targeted by the open edit or delete modal
    pub editing: Option<Ticket>,
    pub ticket_modal_open: bool,
    pub form: TicketForm,
    pub delete_modal_open: bool,
    /// Ticket shown in the details modal (None = closed)
    pub details: Option<Ticket>,
    pub loading: bool,
    /// A mutating request is in flight
    pub busy: bool,
    /// Newest first
    pub notices: Vec<Notice>,
    next_notice_id: u64,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_tickets(&mut self, tickets: Vec<Ticket>) {
        self.tickets = tickets;
    }

    /// Some(ticket) pre-fills the form for editing, None resets it for a new ticket
    pub fn open_ticket_modal(&mut self, ticket: Option<Ticket>) {
        self.form = ticket.as_ref().map(TicketForm::from_ticket).unwrap_or_default();
        self.editing = ticket;
        self.ticket_modal_open = true;
    }

    pub fn ticket_modal_title(&self) -> &'static str {
        if self.editing.is_some() {
            "Редактировать тикет"
        } else {
            "Добавить тикет"
        }
    }

    pub fn open_delete_modal(&mut self, ticket: Ticket) {
        self.editing = Some(ticket);
        self.delete_modal_open = true;
    }

    pub fn open_details(&mut self, ticket: Ticket) {
        self.details = Some(ticket);
    }

    /// Swap in a fresher copy, only if the same ticket is still shown
    pub fn refresh_details(&mut self, ticket: Ticket) {
        if self.details.as_ref().map(|t| &t.id) == Some(&ticket.id) {
            self.details = Some(ticket);
        }
    }

    pub fn close_modal(&mut self, modal: ModalKind) {
        match modal {
            ModalKind::TicketForm => {
                self.ticket_modal_open = false;
                self.editing = None;
            }
            ModalKind::Delete => {
                self.delete_modal_open = false;
                self.editing = None;
            }
            ModalKind::Details => self.details = None,
        }
    }

    pub fn is_open(&self, modal: ModalKind) -> bool {
        match modal {
            ModalKind::TicketForm => self.ticket_modal_open,
            ModalKind::Delete => self.delete_modal_open,
            ModalKind::Details => self.details.is_some(),
        }
    }

    /// Claim the single mutation slot; false if one is already running
    pub fn begin_mutation(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn end_mutation(&mut self) {
        self.busy = false;
    }

    pub fn push_notice(&mut self, kind: NoticeKind) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        self.notices.insert(0, Notice { id, kind });
        id
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketId;

    fn make_ticket(id: u64, name: &str) -> Ticket {
        Ticket {
            id: TicketId::from(id),
            name: name.to_string(),
            description: format!("about {}", name),
            status: false,
            created: 0,
        }
    }

    #[test]
    fn test_open_for_edit_prefills() {
        let mut board = BoardState::new();
        board.open_ticket_modal(Some(make_ticket(1, "Printer jam")));
        assert!(board.is_open(ModalKind::TicketForm));
        assert_eq!(board.form.name, "Printer jam");
        assert_eq!(board.form.description, "about Printer jam");
        assert_eq!(board.ticket_modal_title(), "Редактировать тикет");
    }

    #[test]
    fn test_open_for_create_resets() {
        let mut board = BoardState::new();
        board.open_ticket_modal(Some(make_ticket(1, "Printer jam")));
        board.close_modal(ModalKind::TicketForm);
        board.open_ticket_modal(None);
        assert_eq!(board.form, TicketForm::default());
        assert!(board.editing.is_none());
        assert_eq!(board.ticket_modal_title(), "Добавить тикет");
    }

    #[test]
    fn test_closing_clears_editing() {
        let mut board = BoardState::new();
        board.open_ticket_modal(Some(make_ticket(1, "a")));
        board.close_modal(ModalKind::TicketForm);
        assert!(board.editing.is_none());
        assert!(!board.is_open(ModalKind::TicketForm));

        board.open_delete_modal(make_ticket(2, "b"));
        assert_eq!(board.editing.as_ref().map(|t| t.id.clone()), Some(TicketId::from(2u64)));
        board.close_modal(ModalKind::Delete);
        assert!(board.editing.is_none());
        assert!(!board.is_open(ModalKind::Delete));
    }

    #[test]
    fn test_modals_are_independent() {
        let mut board = BoardState::new();
        board.open_details(make_ticket(1, "a"));
        board.open_delete_modal(make_ticket(2, "b"));
        board.close_modal(ModalKind::Details);
        assert!(board.is_open(ModalKind::Delete));
        assert!(!board.is_open(ModalKind::Details));
    }

    #[test]
    fn test_refresh_details_ignores_other_ticket() {
        let mut board = BoardState::new();
        board.open_details(make_ticket(1, "a"));
        board.refresh_details(make_ticket(2, "b"));
        assert_eq!(board.details.as_ref().map(|t| t.name.as_str()), Some("a"));
        board.refresh_details(make_ticket(1, "a2"));
        assert_eq!(board.details.as_ref().map(|t| t.name.as_str()), Some("a2"));
    }

    #[test]
    fn test_single_mutation_slot() {
        let mut board = BoardState::new();
        assert!(board.begin_mutation());
        assert!(!board.begin_mutation());
        board.end_mutation();
        assert!(board.begin_mutation());
    }

    #[test]
    fn test_notices_newest_first() {
        let mut board = BoardState::new();
        let first = board.push_notice(NoticeKind::LoadFailed);
        let second = board.push_notice(NoticeKind::DeleteFailed);
        assert_eq!(board.notices[0].id, second);
        board.dismiss_notice(first);
        assert_eq!(board.notices.len(), 1);
        assert_eq!(board.notices[0].kind.message(), "Ошибка удаления тикета");
    }
}
