//! Details Modal
//!
//! Read-only view of one ticket. The fragment comes from the view-model
//! with every value already escaped.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::store::{BoardStateStoreFields, ModalKind};
use crate::ticket_view::TicketDetails;

#[component]
pub fn DetailsModal() -> impl IntoView {
    let ctx = use_app_context();
    let content = move || {
        ctx.store
            .details()
            .get()
            .map(|ticket| TicketDetails::local(&ticket).to_html())
            .unwrap_or_default()
    };

    view! {
        <Modal id="detailsModal" kind=ModalKind::Details>
            <h2>"Детали тикета"</h2>
            <div id="detailsContent" inner_html=content></div>
            <div class="modal-actions">
                <button type="button" id="closeDetailsBtn" on:click=move |_| ctx.close(ModalKind::Details)>
                    "Закрыть"
                </button>
            </div>
        </Modal>
    }
}
