use super::{icon::Icon, router::AppRoute};
use crate::utils;
use yew::prelude::*;
use yew_router::prelude::*;

pub struct NavBar {
    menu_expanded: bool,
    dark_mode: bool,
}

pub enum Message {
    ToggleMenu,
    ToggleTheme,
}

impl NavBar {
    fn apply_theme(&self) {
        if let Err(e) = utils::apply_theme(self.dark_mode) {
            log::warn!("could not switch theme: {}", e);
        }
    }
}

impl Component for NavBar {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let nav_bar = Self {
            menu_expanded: false,
            dark_mode: utils::applied_theme().unwrap_or_else(utils::prefers_dark_mode),
        };

        nav_bar.apply_theme();
        nav_bar
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::ToggleMenu => {
                self.menu_expanded = !self.menu_expanded;
            }
            Message::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                self.apply_theme();
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let is_active_class = match self.menu_expanded {
            true => Some("is-active"),
            false => None,
        };
        let (theme_icon, theme_label) = match self.dark_mode {
            true => ("light_mode", "Light mode"),
            false => ("dark_mode", "Dark mode"),
        };

        html! {
            <nav class="navbar is-danger" role="navigation">
                <div class="navbar-brand">
                    <div class="navbar-item title">{"YouTube Podcast Manager"}</div>
                    <a role="button" onclick={ctx.link().callback(|_| Message::ToggleMenu)} class={classes!("navbar-burger", is_active_class)} aria-label="menu" aria-expanded="false" data-target="navbarMenu">
                        <span aria-hidden="true"></span>
                        <span aria-hidden="true"></span>
                        <span aria-hidden="true"></span>
                    </a>
                </div>
                <div id="navbarMenu" class={classes!("navbar-menu", is_active_class)}>
                    <div class="navbar-start">
                        <Link<AppRoute> classes={classes!("navbar-item")} to={AppRoute::Channels}>{"Channels"}</Link<AppRoute>>
                    </div>
                    <div class="navbar-end">
                        <a class="navbar-item" title={theme_label} onclick={ctx.link().callback(|_| Message::ToggleTheme)}>
                            <Icon name={theme_icon}/>
                        </a>
                    </div>
                </div>
            </nav>
        }
    }
}
