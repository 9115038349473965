use crate::components::catalog::CatalogComponent;
use crate::components::statics::home_screen::HomeScreen;
use crate::components::statics::top_bar::TopBar;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <TopBar />
                <HomeScreen />
                <CatalogComponent />
            </div>
        }
    }
}
