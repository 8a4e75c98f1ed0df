use super::{icon::Icon, router::AppRoute};
use crate::{
    agents::notifier::{self, Notifier},
    api::ApiClient,
    objects::{ApiError, Preview, ToastContent, Video},
    utils,
    view_models::{
        copied::{CopyTicket, COPIED_RESET_MS},
        fetch::{Cancellation, FetchTicket, LoadStatus},
        preview::FeedPreview as FeedPreviewState,
    },
};
use yew::prelude::*;
use yew_agent::{Dispatched, Dispatcher};
use yew_router::prelude::*;

/// Channel summary, feed URL and recent episodes for one feed.
pub struct FeedPreview {
    client: ApiClient,
    cancellation: Cancellation,
    state: FeedPreviewState,
    notifier: Dispatcher<Notifier>,
}

pub enum Message {
    Loaded(FetchTicket, Result<Preview, ApiError>),
    Retry,
    CopyFeedUrl,
    Copied(Result<(), ApiError>),
    CopyExpired(CopyTicket<String>),
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub feed_id: String,
}

impl FeedPreview {
    fn load(&mut self, ctx: &Context<Self>) {
        let ticket = self.state.load(&ctx.props().feed_id);
        let client = self.client.clone();
        let feed_id = ctx.props().feed_id.clone();

        ctx.link().send_future(async move {
            let res = client.get_preview(&feed_id, ticket.cancellation()).await;
            Message::Loaded(ticket, res)
        });
    }

    fn feed_url(&self) -> String {
        self.client
            .config()
            .feed_url(self.state.feed_id(), utils::page_origin().as_deref())
    }

    fn view_loading(&self) -> Html {
        html! {
            <section class="section has-text-centered">
                <progress class="progress is-small is-danger" max="100"></progress>
                <p class="has-text-grey">{"Loading podcast feed..."}</p>
            </section>
        }
    }

    fn view_failed(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="section">
                <div class="notification is-danger is-light has-text-centered">
                    <p class="title is-5">{"Error Loading Feed"}</p>
                    <p>{self.state.error().unwrap_or_default()}</p>
                    <button class="button is-outlined mt-4" onclick={ctx.link().callback(|_| Message::Retry)}>{"Try again"}</button>
                </div>
            </section>
        }
    }

    fn view_feed_url(&self, ctx: &Context<Self>) -> Html {
        let (icon, label) = match self.state.is_copied() {
            true => ("check", "Copied!"),
            false => ("content_copy", "Copy URL"),
        };

        html! {
            <div class="card mb-5">
                <header class="card-header has-background-danger">
                    <p class="card-header-title has-text-white">{"Your Podcast Feed is Ready!"}</p>
                </header>
                <div class="card-content">
                    <p class="mb-3">{"Copy this URL and add it to your favorite podcast app:"}</p>
                    <div class="field has-addons">
                        <div class="control is-expanded">
                            <input class="input is-family-monospace" type="text" readonly={true} value={self.feed_url()}/>
                        </div>
                        <div class="control">
                            <button class="button is-danger" onclick={ctx.link().callback(|_| Message::CopyFeedUrl)}>
                                <Icon name={icon}/><span>{label}</span>
                            </button>
                        </div>
                    </div>
                    { match (self.state.status(), self.state.error()) {
                        (LoadStatus::Loaded, Some(e)) => html! { <p class="help is-danger">{e}</p> },
                        _ => html! {},
                    }}
                </div>
            </div>
        }
    }

    fn view_video(&self, video: &Video) -> Html {
        html! {
            <div class="box" key={video.id.clone()}>
                <article class="media">
                    <div class="media-left">
                        <figure class="image is-16by9" style="width: 240px">
                            <img src={video.thumbnail.clone()} alt={video.title.clone()}/>
                        </figure>
                    </div>
                    <div class="media-content">
                        <p class="title is-5">{&video.title}</p>
                        <p class="is-size-7 has-text-grey mb-2">
                            <span class="mr-4">{&video.published_at}</span>
                            <span>{&video.duration}</span>
                        </p>
                        <p class="content is-small">{&video.description}</p>
                        <a class="button is-small is-rounded is-outlined" href={video.url.clone()} target="_blank" rel="noopener noreferrer">
                            <Icon name="smart_display"/><span>{"Watch on YouTube"}</span>
                        </a>
                    </div>
                </article>
            </div>
        }
    }

    fn view_preview(&self, ctx: &Context<Self>, preview: &Preview) -> Html {
        html! {
            <section class="section">
                <Link<AppRoute> classes={classes!("button", "is-rounded", "mb-5")} to={AppRoute::Channels}>
                    <Icon name="arrow_back"/><span>{"Back to channels"}</span>
                </Link<AppRoute>>
                <div class="box mb-5">
                    <article class="media">
                        <div class="media-left">
                            <figure class="image is-128x128"><img class="is-rounded" src={preview.channel.thumbnail.clone()} alt={preview.channel.title.clone()}/></figure>
                        </div>
                        <div class="media-content">
                            <p class="title is-3">{&preview.channel.title}</p>
                            <p class="subtitle is-6">{&preview.channel.description}</p>
                        </div>
                    </article>
                </div>
                { self.view_feed_url(ctx) }
                <h3 class="title is-4 has-text-centered">{"Recent Episodes"}</h3>
                { preview.videos.iter().map(|v| self.view_video(v)).collect::<Html>() }
            </section>
        }
    }
}

impl Component for FeedPreview {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let cancellation = Cancellation::with_abort_controller();
        let mut feed_preview = Self {
            client: ApiClient::default(),
            state: FeedPreviewState::new(cancellation.clone()),
            cancellation,
            notifier: Notifier::dispatcher(),
        };

        feed_preview.load(ctx);
        feed_preview
    }

    fn changed(&mut self, ctx: &Context<Self>) -> bool {
        if ctx.props().feed_id != self.state.feed_id() {
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Loaded(ticket, res) => self.state.apply(&ticket, res),
            Message::Retry => {
                self.load(ctx);
                true
            }
            Message::CopyFeedUrl => {
                let url = self.feed_url();

                ctx.link().send_future(async move {
                    Message::Copied(utils::write_clipboard(&url).await)
                });
                false
            }
            Message::Copied(res) => {
                match res {
                    Ok(()) => {
                        let ticket = self.state.mark_copied();

                        ctx.link().send_future(async move {
                            utils::sleep(COPIED_RESET_MS).await;
                            Message::CopyExpired(ticket)
                        });
                        self.notifier.send(notifier::Request::Notify(ToastContent::success(
                            "URL copied",
                            "Feed URL copied to clipboard!",
                        )));
                    }
                    Err(e) => self.state.copy_failed(&e),
                }
                true
            }
            Message::CopyExpired(ticket) => self.state.expire_copied(&ticket),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match (self.state.status(), self.state.preview()) {
            (LoadStatus::Loaded, Some(preview)) => self.view_preview(ctx, preview),
            (LoadStatus::Failed, _) => self.view_failed(ctx),
            _ => self.view_loading(),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.cancellation.cancel();
    }
}
