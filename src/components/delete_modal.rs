//! Delete Confirmation Modal

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::store::{BoardStateStoreFields, ModalKind};

#[component]
pub fn DeleteModal() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Modal id="deleteModal" kind=ModalKind::Delete>
            <h2>"Удалить тикет"</h2>
            <p>"Вы уверены, что хотите удалить тикет? Это действие необратимо."</p>
            <div class="modal-actions">
                <button type="button" id="cancelDeleteBtn" on:click=move |_| ctx.close(ModalKind::Delete)>
                    "Отмена"
                </button>
                <button
                    type="button"
                    id="confirmDeleteBtn"
                    disabled=move || ctx.store.busy().get()
                    on:click=move |_| ctx.spawn(|c| async move { c.confirm_delete().await })
                >
                    "Ок"
                </button>
            </div>
        </Modal>
    }
}
