//! Update function for the catalog component.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`,
//! mutates the state, and returns whether the view should re-render.
//!
//! Key behaviors
//! - Every successful create, update, or delete sends exactly one
//!   `Msg::Refresh`; the local list is never patched in place.
//! - A failed mutation keeps the draft open, with the error message shown
//!   next to the active form. Retries are explicit user submissions.
//! - The create success notice dismisses itself after 3 seconds.
//! - In-flight requests are not cancelled when a surface closes; their
//!   resolution is applied to whatever state exists at that time, and the
//!   trailing refresh is idempotent.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::editor::EditorMode;
use super::messages::Msg;
use super::state::CatalogComponent;

/// How long the create success notice stays on screen.
const NOTICE_MILLIS: u32 = 3000;

pub fn update(component: &mut CatalogComponent, ctx: &Context<CatalogComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Refresh => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_records().await {
                    Ok(records) => link.send_message(Msg::Loaded(records)),
                    Err(err) => link.send_message(Msg::RefreshFailed(err.to_string())),
                }
            });
            false
        }
        Msg::Loaded(records) => {
            component.records = records;
            true
        }
        Msg::RefreshFailed(description) => {
            // The list keeps its last known state; no retry.
            error!("failed to refresh records:", description);
            false
        }
        Msg::StartCreate => {
            component.editor.start_create();
            component.selected = None;
            true
        }
        Msg::StartEdit(record) => {
            component.editor.start_edit(&record);
            component.selected = Some(record);
            true
        }
        Msg::Stage(field, value) => {
            component.editor.stage(field, value);
            true
        }
        Msg::SubmitCreate => {
            component.editor.error = None;
            let payload = component.editor.create_payload();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::create_record(&payload).await {
                    Ok(()) => link.send_message_batch(vec![Msg::CreateSucceeded, Msg::Refresh]),
                    Err(err) => link.send_message(Msg::MutationFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SubmitUpdate => {
            let EditorMode::Editing(id) = component.editor.mode else {
                return false;
            };
            component.editor.error = None;
            match component.editor.update_payload() {
                Ok(payload) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match api::update_record(id, &payload).await {
                            Ok(()) => {
                                link.send_message_batch(vec![Msg::UpdateSucceeded, Msg::Refresh])
                            }
                            Err(err) => link.send_message(Msg::MutationFailed(err.to_string())),
                        }
                    });
                }
                // Construction failure: nothing was sent, same surfacing as
                // any other mutation error.
                Err(description) => component.editor.error = Some(description),
            }
            true
        }
        Msg::Delete => {
            let EditorMode::Editing(id) = component.editor.mode else {
                return false;
            };
            component.editor.error = None;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete_record(id).await {
                    Ok(()) => link.send_message_batch(vec![Msg::DeleteSucceeded, Msg::Refresh]),
                    Err(err) => link.send_message(Msg::MutationFailed(err.to_string())),
                }
            });
            true
        }
        Msg::Close => {
            component.editor.close();
            component.selected = None;
            true
        }
        Msg::CreateSucceeded => {
            component.editor.close();
            component.notice = true;
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_MILLIS).await;
                link.send_message(Msg::DismissNotice);
            });
            true
        }
        Msg::UpdateSucceeded | Msg::DeleteSucceeded => {
            component.editor.close();
            component.selected = None;
            true
        }
        Msg::MutationFailed(description) => {
            component.editor.error = Some(description);
            true
        }
        Msg::DismissNotice => {
            component.notice = false;
            true
        }
    }
}
