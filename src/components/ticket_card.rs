//! Ticket Card Component
//!
//! One ticket row, rendered from its view-model.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Ticket;
use crate::store::BoardStateStoreFields;
use crate::ticket_view::{TicketEvent, TicketView};

/// A single ticket in the list
///
/// # Arguments
/// * `ticket` - The record to display
/// * `on_event` - Receives every interaction; the card changes nothing itself
#[component]
pub fn TicketCard(
    ticket: Ticket,
    #[prop(into)] on_event: Callback<TicketEvent>,
) -> impl IntoView {
    let ctx = use_app_context();
    let vm = StoredValue::new(TicketView::new(ticket, move |event: TicketEvent| on_event.run(event)));

    let class = vm.with_value(|v| v.css_class());
    let checked = vm.with_value(|v| v.is_checked());
    let name = vm.with_value(|v| v.name().to_string());
    let created = vm.with_value(|v| v.created_label());
    let busy = move || ctx.store.busy().get();

    view! {
        <div class=class>
            <div class="ticket-header">
                <div class="ticket-status">
                    <input
                        type="checkbox"
                        class="status-checkbox"
                        prop:checked=checked
                        disabled=busy
                        on:change=move |_| vm.with_value(|v| v.toggle_status())
                    />
                </div>
                <div class="ticket-name" on:click=move |_| vm.with_value(|v| v.show_details())>
                    {name}
                </div>
                <div class="ticket-actions">
                    <button
                        class="ticket-action edit-btn"
                        title="Редактировать"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            vm.with_value(|v| v.edit());
                        }
                    >
                        "✎"
                    </button>
                    <button
                        class="ticket-action delete-btn"
                        title="Удалить"
                        disabled=busy
                        on:click=move |ev| {
                            ev.stop_propagation();
                            vm.with_value(|v| v.delete());
                        }
                    >
                        "×"
                    </button>
                </div>
            </div>
            <div class="ticket-meta">
                <span>{created}</span>
            </div>
        </div>
    }
}
