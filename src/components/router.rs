use crate::pages::{ChannelsPage, NotFoundPage, PreviewPage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum AppRoute {
    #[at("/")]
    Channels,
    #[at("/preview/:feed_id")]
    Preview { feed_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: &AppRoute) -> Html {
    match route {
        AppRoute::Channels => html! {<ChannelsPage/>},
        AppRoute::Preview { feed_id } => html! {<PreviewPage feed_id={feed_id.clone()}/>},
        AppRoute::NotFound => html! {<NotFoundPage/>},
    }
}

pub struct Router {}

impl Component for Router {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <Switch<AppRoute> render={Switch::render(switch)} />
        }
    }
}
