use crate::components::{FeedPreview, NavBar};
use yew::{prelude::*, Html, Properties};

pub struct PreviewPage {}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub feed_id: String,
}

impl Component for PreviewPage {
    type Message = ();
    type Properties = Props;

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                <NavBar/>
                <FeedPreview feed_id={ctx.props().feed_id.clone()}/>
            </>
        }
    }

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }
}
