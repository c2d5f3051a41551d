//! UI Components
//!
//! Leptos components for the ticket board.

mod modal;
mod ticket_card;
mod ticket_list;
mod ticket_form_modal;
mod delete_modal;
mod details_modal;

pub use modal::Modal;
pub use ticket_card::TicketCard;
pub use ticket_list::TicketList;
pub use ticket_form_modal::TicketFormModal;
pub use delete_modal::DeleteModal;
pub use details_modal::DetailsModal;
