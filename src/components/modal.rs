//! Modal Component
//!
//! Overlay shell shared by all dialogs. A click on the backdrop itself
//! (not on the content) closes the modal.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::ModalKind;

#[component]
pub fn Modal(
    id: &'static str,
    kind: ModalKind,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let is_open = move || ctx.store.with(|b| b.is_open(kind));

    view! {
        <div
            id=id
            class="modal"
            style:display=move || if is_open() { "block" } else { "none" }
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.target() == ev.current_target() {
                    ctx.close(kind);
                }
            }
        >
            <div class="modal-content">
                {children()}
            </div>
        </div>
    }
}
