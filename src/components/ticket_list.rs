//! Ticket List Component
//!
//! The ticket container: inline error notices on top, then one card per
//! ticket. The whole list is rebuilt whenever the ticket snapshot changes.

use leptos::prelude::*;

use crate::components::TicketCard;
use crate::context::use_app_context;
use crate::store::BoardStateStoreFields;
use crate::ticket_view::TicketEvent;

#[component]
pub fn TicketList() -> impl IntoView {
    let ctx = use_app_context();
    let on_event = Callback::new(move |event: TicketEvent| ctx.dispatch(event));

    view! {
        <div id="ticketsContainer" class="tickets-container">
            {move || ctx.store.notices().get().into_iter().map(|notice| view! {
                <div class="error">{notice.kind.message()}</div>
            }).collect_view()}

            {move || ctx.store.tickets().get().into_iter().map(|ticket| view! {
                <TicketCard ticket=ticket on_event=on_event />
            }).collect_view()}
        </div>
    }
}
