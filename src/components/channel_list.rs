use super::{icon::Icon, router::AppRoute};
use crate::{
    agents::notifier::{self, Notifier},
    api::ApiClient,
    objects::{
        channel::{format_count, Channel},
        ApiError, ToastContent,
    },
    utils,
    view_models::{
        channel_list::{ChannelList as ChannelListState, FetchApplied},
        copied::{CopiedIndicators, CopyTicket, COPIED_RESET_MS, COPY_FAILED},
        fetch::{Cancellation, FetchOrigin, FetchTicket},
        mutation::{
            ChannelForm, Dialog, FormField, Mutation, MutationController, MutationKind,
            MutationOutcome,
        },
    },
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_agent::{Dispatched, Dispatcher};
use yew_router::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

/// The channel dashboard: search, grid/list views and the add/edit/delete dialogs.
pub struct ChannelList {
    client: ApiClient,
    cancellation: Cancellation,
    list: ChannelListState,
    dialogs: MutationController,
    copied: CopiedIndicators<String>,
    view_mode: ViewMode,
    notifier: Dispatcher<Notifier>,
}

pub enum Message {
    Loaded(FetchTicket, Result<Vec<Channel>, ApiError>),
    Refresh,
    SetQuery(String),
    SetViewMode(ViewMode),
    OpenAdd,
    OpenEdit(String),
    OpenDelete(String),
    CloseDialog,
    SetField(FormField, String),
    Submit,
    Mutated(MutationKind, Result<(), ApiError>),
    CopyFeedUrl(String),
    Copied(String, Result<(), ApiError>),
    CopyExpired(CopyTicket<String>),
}

impl ChannelList {
    fn fetch(&self, ctx: &Context<Self>, ticket: FetchTicket) {
        let client = self.client.clone();

        ctx.link().send_future(async move {
            let res = client.list_channels(ticket.cancellation()).await;
            Message::Loaded(ticket, res)
        });
    }

    fn execute(&self, ctx: &Context<Self>, mutation: Mutation) {
        let client = self.client.clone();
        let cancellation = self.cancellation.clone();
        let kind = mutation.kind();

        ctx.link().send_future(async move {
            let res = match &mutation {
                Mutation::Create(channel) => client
                    .create_channel(channel, &cancellation)
                    .await
                    .map(|_| ()),
                Mutation::Update(id, update) => client
                    .update_channel(id, update, &cancellation)
                    .await
                    .map(|_| ()),
                Mutation::Delete(id) => client.delete_channel(id, &cancellation).await,
            };
            Message::Mutated(kind, res)
        });
    }

    fn notify(&mut self, toast: ToastContent) {
        self.notifier.send(notifier::Request::Notify(toast));
    }

    fn view_header(&self, ctx: &Context<Self>) -> Html {
        let refreshing = self.list.is_refreshing();

        html! {
            <div class="level">
                <div class="level-left">
                    <div>
                        <h1 class="title">{"YouTube Podcast Manager"}</h1>
                        <p class="subtitle is-6">{"Convert your favorite YouTube channels into podcast feeds"}</p>
                    </div>
                </div>
                <div class="level-right">
                    <div class="buttons">
                        <button class={classes!("button", refreshing.then(|| "is-loading"))} title="Refresh" disabled={refreshing} onclick={ctx.link().callback(|_| Message::Refresh)}>
                            <Icon name="refresh"/>
                        </button>
                        <button class="button is-danger is-rounded" disabled={self.dialogs.is_pending()} onclick={ctx.link().callback(|_| Message::OpenAdd)}>
                            <Icon name="add"/><span>{"Add channel"}</span>
                        </button>
                    </div>
                </div>
            </div>
        }
    }

    fn view_search(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="field">
                <p class="control has-icons-left">
                    <input class="input is-rounded" type="search" placeholder="Search channels..." value={self.list.query().to_string()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Message::SetQuery(input.value())
                        })}/>
                    <Icon name="search" classes={classes!("is-left")}/>
                </p>
            </div>
        }
    }

    fn view_tabs(&self, ctx: &Context<Self>) -> Html {
        let tab = |mode: ViewMode, label: &'static str| {
            html! {
                <li class={classes!((self.view_mode == mode).then(|| "is-active"))}>
                    <a onclick={ctx.link().callback(move |_| Message::SetViewMode(mode))}><span>{label}</span></a>
                </li>
            }
        };

        html! {
            <div class="tabs is-toggle is-small">
                <ul>
                    { tab(ViewMode::Grid, "Grid View") }
                    { tab(ViewMode::List, "List View") }
                </ul>
            </div>
        }
    }

    fn view_error(&self) -> Html {
        match (self.list.error(), self.dialogs.dialog()) {
            (Some(e), None) => html! { <div class="notification is-danger is-light">{e}</div> },
            _ => html! {},
        }
    }

    fn view_channels(&self, ctx: &Context<Self>) -> Html {
        let channels = self.list.projection();

        if channels.is_empty() {
            if self.list.is_loading() {
                return html! { <p class="has-text-grey">{"Loading channels..."}</p> };
            }

            return match self.list.channels().is_empty() {
                true => html! {
                    <div class="box has-text-centered">
                        <p class="title is-5">{"No channels yet"}</p>
                        <p class="mb-4">{"Add your first YouTube channel to create a podcast feed."}</p>
                        <button class="button is-danger is-rounded" onclick={ctx.link().callback(|_| Message::OpenAdd)}>{"Add channel"}</button>
                    </div>
                },
                false => html! {
                    <div class="box has-text-centered">
                        <p class="title is-5">{"No channels found"}</p>
                        <p>{format!("No channels match \"{}\".", self.list.query())}</p>
                    </div>
                },
            };
        }

        match self.view_mode {
            ViewMode::Grid => html! {
                <div class="columns is-multiline">
                    { channels.iter().map(|c| html! {
                        <div class="column is-one-third" key={c.id.clone()}>{ self.view_channel_card(ctx, c) }</div>
                    }).collect::<Html>() }
                </div>
            },
            ViewMode::List => html! {
                <div>
                    { channels.iter().map(|c| self.view_channel_row(ctx, c)).collect::<Html>() }
                </div>
            },
        }
    }

    fn view_channel_card(&self, ctx: &Context<Self>, channel: &Channel) -> Html {
        html! {
            <div class="card">
                <div class="card-content">
                    <div class="media">
                        <div class="media-left"><figure class="image is-64x64"><img class="is-rounded" src={channel.thumbnail.clone()} alt={channel.title.clone()}/></figure></div>
                        <div class="media-content">
                            <p class="title is-5">{&channel.title}</p>
                            <p class="subtitle is-7">{format!("Updated {}", channel.updated_on())}</p>
                        </div>
                    </div>
                    <p class="content is-small">{&channel.description}</p>
                    <div class="tags">
                        <span class="tag">{format!("{} subscribers", format_count(channel.subscriber_count))}</span>
                        <span class="tag">{format!("{} videos", format_count(channel.video_count))}</span>
                    </div>
                </div>
                <footer class="card-footer">
                    { self.view_channel_actions(ctx, channel, "card-footer-item") }
                </footer>
            </div>
        }
    }

    fn view_channel_row(&self, ctx: &Context<Self>, channel: &Channel) -> Html {
        html! {
            <div class="box" key={channel.id.clone()}>
                <article class="media">
                    <div class="media-left"><figure class="image is-48x48"><img class="is-rounded" src={channel.thumbnail.clone()} alt={channel.title.clone()}/></figure></div>
                    <div class="media-content">
                        <p><strong>{&channel.title}</strong></p>
                        <p class="is-size-7 has-text-grey">
                            {format!("{} subscribers · Updated {}", format_count(channel.subscriber_count), channel.updated_on())}
                        </p>
                    </div>
                    <div class="media-right buttons">
                        { self.view_channel_actions(ctx, channel, "button is-small is-white") }
                    </div>
                </article>
            </div>
        }
    }

    fn view_channel_actions(&self, ctx: &Context<Self>, channel: &Channel, class: &'static str) -> Html {
        let copied = self.copied.is_copied(&channel.id);
        let (copy_icon, copy_label) = match copied {
            true => ("check", "Copied!"),
            false => ("content_copy", "Copy feed URL"),
        };
        let copy_id = channel.id.clone();
        let edit_id = channel.id.clone();
        let delete_id = channel.id.clone();

        html! {
            <>
                <a class={class} onclick={ctx.link().callback(move |_| Message::CopyFeedUrl(copy_id.clone()))}>
                    <Icon name={copy_icon}/><span>{copy_label}</span>
                </a>
                <Link<AppRoute> classes={classes!(class)} to={AppRoute::Preview { feed_id: channel.id.clone() }}>
                    <Icon name="podcasts"/><span>{"Preview"}</span>
                </Link<AppRoute>>
                <a class={class} onclick={ctx.link().callback(move |_| Message::OpenEdit(edit_id.clone()))}>
                    <Icon name="edit"/>
                </a>
                <a class={classes!(class, "has-text-danger")} onclick={ctx.link().callback(move |_| Message::OpenDelete(delete_id.clone()))}>
                    <Icon name="delete"/>
                </a>
            </>
        }
    }

    fn view_dialog(&self, ctx: &Context<Self>) -> Html {
        let (title, body, confirm) = match self.dialogs.dialog() {
            Some(Dialog::Add(form)) => (
                "Add New Channel",
                self.view_form(ctx, form, true),
                html! {"Add channel"},
            ),
            Some(Dialog::Edit { form, .. }) => (
                "Edit Channel",
                self.view_form(ctx, form, false),
                html! {"Save changes"},
            ),
            Some(Dialog::Delete(channel)) => (
                "Delete Channel",
                html! {
                    <>
                        <p class="mb-4">{"Are you sure you want to delete this channel? This action cannot be undone."}</p>
                        <article class="media">
                            <div class="media-left"><figure class="image is-48x48"><img class="is-rounded" src={channel.thumbnail.clone()} alt={channel.title.clone()}/></figure></div>
                            <div class="media-content">
                                <p><strong>{&channel.title}</strong></p>
                                <p class="is-size-7">{format!("{} subscribers · {} videos", format_count(channel.subscriber_count), format_count(channel.video_count))}</p>
                            </div>
                        </article>
                    </>
                },
                html! {"Delete"},
            ),
            None => return html! {},
        };
        let pending = self.dialogs.is_pending();
        let close = ctx.link().callback(|_| Message::CloseDialog);

        html! {
            <div class="modal is-active">
                <div class="modal-background" onclick={close.clone()}></div>
                <div class="modal-card">
                    <header class="modal-card-head">
                        <p class="modal-card-title">{title}</p>
                        <button class="delete" aria-label="close" onclick={close.clone()}></button>
                    </header>
                    <section class="modal-card-body">
                        { match self.list.error() {
                            Some(e) => html! { <div class="notification is-danger is-light">{e}</div> },
                            None => html! {},
                        }}
                        { body }
                    </section>
                    <footer class="modal-card-foot">
                        <button class={classes!("button", "is-danger", pending.then(|| "is-loading"))} disabled={pending} onclick={ctx.link().callback(|_| Message::Submit)}>{confirm}</button>
                        <button class="button" disabled={pending} onclick={close}>{"Cancel"}</button>
                    </footer>
                </div>
            </div>
        }
    }

    fn view_form(&self, ctx: &Context<Self>, form: &ChannelForm, with_url: bool) -> Html {
        let input = |field: FormField| {
            ctx.link().callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Message::SetField(field, input.value())
            })
        };

        html! {
            <>
                { match with_url {
                    true => html! {
                        <div class="field">
                            <label class="label" for="channel-url">{"YouTube channel URL"}</label>
                            <input class="input" id="channel-url" type="text" placeholder="https://www.youtube.com/@channel" value={form.url.clone()} oninput={input(FormField::Url)}/>
                            <p class="help">{"A channel URL, @handle or channel id."}</p>
                        </div>
                    },
                    false => html! {},
                }}
                <div class="field">
                    <label class="label" for="channel-title">{"Title"}</label>
                    <input class="input" id="channel-title" type="text" value={form.title.clone()} oninput={input(FormField::Title)}/>
                </div>
                <div class="field">
                    <label class="label" for="channel-description">{"Description"}</label>
                    <textarea class="textarea" id="channel-description" rows="3" value={form.description.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            Message::SetField(FormField::Description, input.value())
                        })}/>
                </div>
                <div class="field">
                    <label class="label" for="channel-thumbnail">{"Thumbnail URL"}</label>
                    <input class="input" id="channel-thumbnail" type="url" value={form.thumbnail.clone()} oninput={input(FormField::Thumbnail)}/>
                </div>
            </>
        }
    }
}

impl Component for ChannelList {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let cancellation = Cancellation::with_abort_controller();
        let mut channel_list = Self {
            client: ApiClient::default(),
            list: ChannelListState::new(cancellation.clone()),
            cancellation,
            dialogs: MutationController::default(),
            copied: CopiedIndicators::default(),
            view_mode: ViewMode::Grid,
            notifier: Notifier::dispatcher(),
        };

        let ticket = channel_list.list.begin_fetch(FetchOrigin::Mount);
        channel_list.fetch(ctx, ticket);
        channel_list
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Loaded(ticket, res) => match self.list.apply(&ticket, res) {
                FetchApplied::Stale => false,
                FetchApplied::Loaded => {
                    if ticket.origin() == FetchOrigin::Manual {
                        self.notify(ToastContent::success(
                            "Channels refreshed",
                            "Your channel list has been updated",
                        ));
                    }
                    true
                }
                FetchApplied::Failed => true,
            },
            Message::Refresh => {
                let ticket = self.list.begin_fetch(FetchOrigin::Manual);
                self.fetch(ctx, ticket);
                true
            }
            Message::SetQuery(query) => {
                self.list.set_query(query);
                true
            }
            Message::SetViewMode(mode) => {
                self.view_mode = mode;
                true
            }
            Message::OpenAdd => self.dialogs.open_add(&mut self.list),
            Message::OpenEdit(id) => match self.list.find(&id).cloned() {
                Some(channel) => self.dialogs.open_edit(&channel, &mut self.list),
                None => false,
            },
            Message::OpenDelete(id) => match self.list.find(&id).cloned() {
                Some(channel) => self.dialogs.open_delete(&channel, &mut self.list),
                None => false,
            },
            Message::CloseDialog => self.dialogs.close(),
            Message::SetField(field, value) => {
                self.dialogs.set_field(field, value);
                true
            }
            Message::Submit => {
                if let Some(mutation) = self.dialogs.submit(&mut self.list) {
                    self.execute(ctx, mutation);
                }
                true
            }
            Message::Mutated(kind, res) => {
                if self.cancellation.is_cancelled() {
                    return false;
                }

                match self.dialogs.complete(kind, res, &mut self.list) {
                    MutationOutcome::Succeeded { refresh, toast } => {
                        self.fetch(ctx, refresh);
                        self.notify(toast);
                    }
                    MutationOutcome::Failed => {}
                }
                true
            }
            Message::CopyFeedUrl(id) => {
                let url = self
                    .client
                    .config()
                    .feed_url(&id, utils::page_origin().as_deref());

                ctx.link().send_future(async move {
                    let res = utils::write_clipboard(&url).await;
                    Message::Copied(id, res)
                });
                false
            }
            Message::Copied(id, res) => {
                match res {
                    Ok(()) => {
                        self.list.withdraw_error(COPY_FAILED);
                        let ticket = self.copied.mark(id);

                        ctx.link().send_future(async move {
                            utils::sleep(COPIED_RESET_MS).await;
                            Message::CopyExpired(ticket)
                        });
                        self.notify(ToastContent::success(
                            "URL copied",
                            "The feed URL has been copied to the clipboard",
                        ));
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        self.list.report_error(COPY_FAILED.to_string());
                    }
                }
                true
            }
            Message::CopyExpired(ticket) => self.copied.expire(&ticket),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="section">
                { self.view_header(ctx) }
                { self.view_search(ctx) }
                { self.view_error() }
                { self.view_tabs(ctx) }
                { self.view_channels(ctx) }
                { self.view_dialog(ctx) }
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.cancellation.cancel();
    }
}
