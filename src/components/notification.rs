use crate::{
    agents::notifier::{self, Notifier},
    objects::{Toast, ToastVariant},
};
use uuid::Uuid;
use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

/// Stack of active toasts, bottom right.
pub struct Notification {
    notifier: Box<dyn Bridge<Notifier>>,
    toasts: Vec<Toast>,
}

pub enum Message {
    NotifierResponse(notifier::Response),
    Close(Uuid),
}

impl Notification {
    fn view_toast(&self, ctx: &Context<Self>, toast: &Toast) -> Html {
        let color = match toast.content.variant {
            ToastVariant::Success => "is-success",
            ToastVariant::Info => "is-info",
        };
        let id = toast.id;

        html! {
            <div class={classes!("notification", "is-light", color)} key={id.to_string()}>
                <button class="delete" aria-label="close" onclick={ctx.link().callback(move |_| Message::Close(id))}></button>
                <p class="has-text-weight-semibold">{&toast.content.title}</p>
                <p class="is-size-7">{&toast.content.description}</p>
            </div>
        }
    }
}

impl Component for Notification {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            notifier: Notifier::bridge(ctx.link().callback(Message::NotifierResponse)),
            toasts: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::NotifierResponse(resp) => match resp {
                notifier::Response::Toasts(toasts) => {
                    self.toasts = toasts;
                    true
                }
            },
            Message::Close(id) => {
                self.notifier.send(notifier::Request::Dismiss(id));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.toasts.is_empty() {
            return html! {};
        }

        html! {
            <div class="toasts">
                { self.toasts.iter().map(|t| self.view_toast(ctx, t)).collect::<Html>() }
            </div>
        }
    }
}
