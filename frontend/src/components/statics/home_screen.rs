use yew::{html, Component, Context, Html};

/// Static welcome panel shown above the catalog.
pub struct HomeScreen;

impl Component for HomeScreen {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        HomeScreen
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="home-screen">
                <h1>{"Welcome to your shelf"}</h1>
                <p>{"Turn your reading into a personal, interactive catalog: \
                     organize the books you love and keep your literary journey in one place."}</p>
                <h2>{"Start building your shelf right now!"}</h2>
            </div>
        }
    }
}
