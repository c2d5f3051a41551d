//! Ticket Form Modal
//!
//! Add/edit dialog. Opened blank for a new ticket, pre-filled for an edit.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::store::{BoardStateStoreFields, ModalKind};

#[component]
pub fn TicketFormModal() -> impl IntoView {
    let ctx = use_app_context();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|c| async move { c.save_ticket().await });
    };

    view! {
        <Modal id="ticketModal" kind=ModalKind::TicketForm>
            <h2 id="modalTitle">{move || ctx.store.with(|b| b.ticket_modal_title())}</h2>
            <form id="ticketForm" on:submit=on_submit>
                <label for="ticketName">"Краткое описание"</label>
                <input
                    type="text"
                    id="ticketName"
                    name="name"
                    required=true
                    prop:value=move || ctx.store.form().get().name
                    on:input=move |ev| {
                        ctx.store.form().write().name = event_target_value(&ev);
                    }
                />
                <label for="ticketDescription">"Подробное описание"</label>
                <textarea
                    id="ticketDescription"
                    name="description"
                    prop:value=move || ctx.store.form().get().description
                    on:input=move |ev| {
                        ctx.store.form().write().description = event_target_value(&ev);
                    }
                />
                <div class="modal-actions">
                    <button type="button" id="cancelBtn" on:click=move |_| ctx.close(ModalKind::TicketForm)>
                        "Отмена"
                    </button>
                    <button type="submit" disabled=move || ctx.store.busy().get()>"Ок"</button>
                </div>
            </form>
        </Modal>
    }
}
