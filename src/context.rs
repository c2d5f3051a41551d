//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HelpDeskApi;
use crate::controller::{BoardHandle, Controller};
use crate::store::{BoardState, BoardStore, ModalKind, NoticeKind};
use crate::ticket_view::TicketEvent;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Board state (ticket list, modals, notices)
    pub store: BoardStore,
    api: StoredValue<HelpDeskApi, LocalStorage>,
    notice_timeout: Duration,
}

impl AppContext {
    pub fn new(store: BoardStore, api: HelpDeskApi, notice_timeout: Duration) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
            notice_timeout,
        }
    }

    pub fn controller(&self) -> Controller<HelpDeskApi, AppContext> {
        Controller::new(self.api.get_value(), *self)
    }

    /// Run a controller action on the local executor
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Controller<HelpDeskApi, AppContext>) -> Fut + 'static,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        let controller = self.controller();
        spawn_local(async move { action(controller).await });
    }

    pub fn dispatch(&self, event: TicketEvent) {
        self.spawn(move |c| async move { c.handle_event(event).await });
    }

    pub fn close(&self, modal: ModalKind) {
        self.update_board(|b| b.close_modal(modal));
    }
}

impl BoardHandle for AppContext {
    fn update_board<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        f(&mut *self.store.write())
    }

    fn read_board<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        self.store.with_untracked(|b| f(b))
    }

    /// Push the notice and schedule its removal
    fn notify(&self, kind: NoticeKind) {
        let id = self.update_board(|b| b.push_notice(kind));
        let ctx = *self;
        let millis = self.notice_timeout.as_millis().min(u32::MAX as u128) as u32;
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            ctx.update_board(|b| b.dismiss_notice(id));
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
