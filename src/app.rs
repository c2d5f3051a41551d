//! HelpDesk App
//!
//! Main application component: header, ticket list and the three modals.

use std::time::Duration;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HelpDeskApi;
use crate::components::{DeleteModal, DetailsModal, TicketFormModal, TicketList};
use crate::context::AppContext;
use crate::store::{BoardState, BoardStateStoreFields};

#[component]
pub fn App(api: HelpDeskApi, notice_timeout: Duration) -> impl IntoView {
    // State
    let store = Store::new(BoardState::new());
    let ctx = AppContext::new(store, api, notice_timeout);

    // Provide context to all children
    provide_context(ctx);

    // Initial load on mount
    Effect::new(move |_| {
        ctx.spawn(|c| async move { c.start().await });
    });

    view! {
        <div class="container">
            <header class="header">
                <h1>"HelpDesk"</h1>
                <button
                    id="addTicketBtn"
                    class="add-ticket-btn"
                    on:click=move |_| ctx.controller().add_ticket()
                >
                    "Добавить тикет"
                </button>
            </header>

            <div
                id="loading"
                class="loading"
                style:display=move || if store.loading().get() { "block" } else { "none" }
            >
                "Загрузка..."
            </div>

            <TicketList />

            <TicketFormModal />
            <DeleteModal />
            <DetailsModal />
        </div>
    }
}
