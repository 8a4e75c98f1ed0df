use crate::{
    objects::{toast::TOAST_TTL_MS, Toast, ToastContent, ToastQueue},
    utils,
};
use std::collections::HashSet;
use uuid::Uuid;
use yew_agent::{Agent, AgentLink, Context, HandlerId};

/// Application-wide toast queue.
///
/// Every component bridging to or dispatching on this agent talks to the same instance.
pub struct Notifier {
    subscribers: HashSet<HandlerId>,
    link: AgentLink<Self>,
    queue: ToastQueue,
}

#[derive(Debug)]
pub enum Request {
    Notify(ToastContent),
    Dismiss(Uuid),
}

#[derive(Debug, Clone)]
pub enum Response {
    Toasts(Vec<Toast>),
}

#[derive(Debug)]
pub enum Message {
    Expire(Uuid),
}

impl Notifier {
    fn notify_subscribed(&self) {
        for subscriber in &self.subscribers {
            if subscriber.is_respondable() {
                self.link
                    .respond(*subscriber, Response::Toasts(self.queue.active().to_vec()));
            }
        }
    }
}

impl Agent for Notifier {
    type Reach = Context<Self>;
    type Message = Message;
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
            queue: ToastQueue::default(),
        }
    }

    fn update(&mut self, msg: Self::Message) {
        match msg {
            Message::Expire(id) => {
                if self.queue.expire(&id, utils::now()) {
                    self.notify_subscribed();
                }
            }
        }
    }

    fn handle_input(&mut self, msg: Self::Input, _id: HandlerId) {
        match msg {
            Request::Notify(content) => {
                log::info!("{}: {}", content.title, content.description);

                let id = self.queue.push(content, utils::now());
                self.link.send_future(async move {
                    utils::sleep(TOAST_TTL_MS).await;
                    Message::Expire(id)
                });
            }
            Request::Dismiss(id) => {
                if !self.queue.dismiss(&id) {
                    return;
                }
            }
        }
        self.notify_subscribed();
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
        self.notify_subscribed();
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}
