use yew::{html, Component, Context, Html};

/// Navigation bar. The routes are placeholders and the bar ships hidden
/// until navigation exists.
pub struct TopBar;

impl Component for TopBar {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TopBar
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="topbar hidden">
                <a href="/list">{"List"}</a>
                <a href="/books">{"Books"}</a>
            </div>
        }
    }
}
