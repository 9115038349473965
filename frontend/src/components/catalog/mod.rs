//! Catalog browser and editor: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `CatalogComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, fetch the collection so the shelf starts from the
//!   server's current state.

use yew::prelude::*;

mod editor;
mod helpers;
mod messages;
mod state;
mod styles;
mod update;
mod view;

pub use messages::Msg;
pub use state::CatalogComponent;

impl Component for CatalogComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CatalogComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Refresh);
        }
    }
}
