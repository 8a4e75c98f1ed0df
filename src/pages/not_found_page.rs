use crate::components::{router::AppRoute, NavBar};
use yew::{prelude::*, Html};
use yew_router::prelude::*;

pub struct NotFoundPage {}

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <NavBar/>
                <section class="section has-text-centered">
                    <p class="title">{"Page not found"}</p>
                    <Link<AppRoute> classes={classes!("button", "is-rounded")} to={AppRoute::Channels}>{"Back to channels"}</Link<AppRoute>>
                </section>
            </>
        }
    }

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }
}
