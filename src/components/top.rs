use super::{notification::Notification, router::Router};
use yew::prelude::*;
use yew_router::BrowserRouter;

pub struct Top {}

impl Component for Top {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, _ctx: &Context<Self>) -> yew::Html {
        html! {
            <BrowserRouter>
                <Router/>
                <Notification/>
            </BrowserRouter>
        }
    }
}
