use yew::prelude::*;

pub struct Icon {}

#[derive(Debug, Clone, PartialEq)]
pub enum IconStyle {
    Filled,
    Outlined,
}

#[derive(Clone, PartialEq, Properties)]
pub struct IconProperties {
    pub name: String,
    #[prop_or(IconStyle::Outlined)]
    pub style: IconStyle,
    #[prop_or_default]
    pub classes: Classes,
}

impl Component for Icon {
    type Message = ();
    type Properties = IconProperties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let font = match props.style {
            IconStyle::Filled => "material-icons",
            IconStyle::Outlined => "material-icons-outlined",
        };

        html! {<span class={classes!("icon", props.classes.clone())}><span class={font}>{&props.name}</span></span>}
    }
}
