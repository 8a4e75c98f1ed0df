use crate::components::{ChannelList, NavBar};
use yew::{prelude::*, Html};

pub struct ChannelsPage {}

impl Component for ChannelsPage {
    type Message = ();
    type Properties = ();

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <NavBar/>
                <ChannelList/>
            </>
        }
    }

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }
}
