use super::{
    channel_list::ChannelList,
    fetch::{FetchOrigin, FetchTicket},
};
use crate::objects::{ApiError, Channel, ChannelUpdate, NewChannel, ToastContent};

pub const MISSING_URL: &str = "Please enter a valid YouTube channel URL.";
pub const MISSING_TITLE: &str = "Please enter a title for the channel.";
pub const ADD_FAILED: &str = "Failed to add channel. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update channel. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete channel. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Url,
    Title,
    Description,
    Thumbnail,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelForm {
    pub url: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

impl ChannelForm {
    fn from_channel(channel: &Channel) -> Self {
        Self {
            url: String::new(),
            title: channel.title.clone(),
            description: channel.description.clone(),
            thumbnail: channel.thumbnail.clone(),
        }
    }

    fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Url => self.url = value,
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Thumbnail => self.thumbnail = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Add(ChannelForm),
    Edit { channel: Channel, form: ChannelForm },
    Delete(Channel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// The single request a submitted dialog turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(NewChannel),
    Update(String, ChannelUpdate),
    Delete(String),
}

impl Mutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Mutation::Create(_) => MutationKind::Create,
            Mutation::Update(_, _) => MutationKind::Update,
            Mutation::Delete(_) => MutationKind::Delete,
        }
    }
}

#[derive(Debug)]
pub enum MutationOutcome {
    Succeeded {
        refresh: FetchTicket,
        toast: ToastContent,
    },
    Failed,
}

/// Add/edit/delete dialog state.
///
/// At most one dialog is open. A submitted mutation is in flight until [`complete`] is called;
/// meanwhile the dialog cannot be switched or resubmitted.
///
/// [`complete`]: MutationController::complete
#[derive(Debug, Default)]
pub struct MutationController {
    dialog: Option<Dialog>,
    pending: Option<MutationKind>,
}

impl MutationController {
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn open_add(&mut self, list: &mut ChannelList) -> bool {
        self.open(Dialog::Add(ChannelForm::default()), list)
    }

    /// Opens the edit dialog on the snapshot the list already holds.
    pub fn open_edit(&mut self, channel: &Channel, list: &mut ChannelList) -> bool {
        self.open(
            Dialog::Edit {
                channel: channel.clone(),
                form: ChannelForm::from_channel(channel),
            },
            list,
        )
    }

    pub fn open_delete(&mut self, channel: &Channel, list: &mut ChannelList) -> bool {
        self.open(Dialog::Delete(channel.clone()), list)
    }

    /// A freshly opened dialog starts without an error.
    fn open(&mut self, dialog: Dialog, list: &mut ChannelList) -> bool {
        if self.is_pending() {
            return false;
        }
        list.clear_error();
        self.dialog = Some(dialog);
        true
    }

    pub fn close(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        self.dialog.take().is_some()
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match &mut self.dialog {
            Some(Dialog::Add(form)) | Some(Dialog::Edit { form, .. }) => form.set(field, value),
            _ => {}
        }
    }

    /// Validates the open dialog and turns it into a request.
    ///
    /// Validation failures go to the error slot and yield `None`, as does submitting while a
    /// mutation is already in flight or with no dialog open.
    pub fn submit(&mut self, list: &mut ChannelList) -> Option<Mutation> {
        if self.is_pending() {
            return None;
        }

        let mutation = match self.dialog.as_ref()? {
            Dialog::Add(form) => {
                if form.url.trim().is_empty() {
                    list.report_error(MISSING_URL.to_string());
                    return None;
                }
                if form.title.trim().is_empty() {
                    list.report_error(MISSING_TITLE.to_string());
                    return None;
                }

                Mutation::Create(NewChannel {
                    channel_id: form.url.trim().to_string(),
                    title: form.title.trim().to_string(),
                    description: form.description.clone(),
                    thumbnail: form.thumbnail.trim().to_string(),
                    subscriber_count: 0,
                    video_count: 0,
                })
            }
            Dialog::Edit { channel, form } => Mutation::Update(
                channel.id.clone(),
                ChannelUpdate {
                    title: form.title.clone(),
                    description: form.description.clone(),
                    thumbnail: form.thumbnail.clone(),
                },
            ),
            Dialog::Delete(channel) => Mutation::Delete(channel.id.clone()),
        };

        list.clear_error();
        self.pending = Some(mutation.kind());

        Some(mutation)
    }

    /// Applies the response of the request returned by [`submit`](Self::submit).
    pub fn complete(
        &mut self,
        kind: MutationKind,
        res: Result<(), ApiError>,
        list: &mut ChannelList,
    ) -> MutationOutcome {
        self.pending = None;

        match res {
            Ok(()) => {
                self.dialog = None;

                let toast = match kind {
                    MutationKind::Create => ToastContent::success(
                        "Channel added",
                        "The new channel has been successfully added",
                    ),
                    MutationKind::Update => ToastContent::success(
                        "Channel updated",
                        "The channel has been successfully updated",
                    ),
                    MutationKind::Delete => ToastContent::info(
                        "Channel deleted",
                        "The channel has been successfully removed",
                    ),
                };

                MutationOutcome::Succeeded {
                    refresh: list.begin_fetch(FetchOrigin::AfterMutation),
                    toast,
                }
            }
            Err(e) => {
                log::error!("{:?} failed: {}", kind, e);

                let fallback = match kind {
                    MutationKind::Create => ADD_FAILED,
                    MutationKind::Update => UPDATE_FAILED,
                    MutationKind::Delete => DELETE_FAILED,
                };
                list.report_error(e.user_message(fallback));

                MutationOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_models::{
        channel_list::{tests::channel, FetchApplied},
        fetch::{Cancellation, LoadStatus},
    };

    /// In-memory backend that records every request it receives.
    #[derive(Default)]
    struct FakeBackend {
        channels: Vec<Channel>,
        requests: Vec<Mutation>,
        next_id: u32,
        fail_with: Option<ApiError>,
    }

    impl FakeBackend {
        fn execute(&mut self, mutation: Mutation) -> Result<(), ApiError> {
            self.requests.push(mutation.clone());

            if let Some(e) = self.fail_with.clone() {
                return Err(e);
            }

            match mutation {
                Mutation::Create(new) => {
                    self.next_id += 1;
                    let mut created =
                        channel(&format!("n{}", self.next_id), &new.title, &new.description);
                    created.channel_id = new.channel_id;
                    self.channels.push(created);
                }
                Mutation::Update(id, update) => {
                    let channel = self
                        .channels
                        .iter_mut()
                        .find(|c| c.id == id)
                        .ok_or_else(|| ApiError::NotFound(id.clone()))?;
                    channel.title = update.title;
                    channel.description = update.description;
                    channel.thumbnail = update.thumbnail;
                }
                Mutation::Delete(id) => {
                    let len = self.channels.len();
                    self.channels.retain(|c| c.id != id);
                    if len == self.channels.len() {
                        return Err(ApiError::NotFound(id));
                    }
                }
            }

            Ok(())
        }

        fn list(&self) -> Result<Vec<Channel>, ApiError> {
            Ok(self.channels.clone())
        }
    }

    fn setup(channels: Vec<Channel>) -> (FakeBackend, ChannelList, MutationController) {
        let backend = FakeBackend {
            channels,
            ..Default::default()
        };
        let mut list = ChannelList::new(Cancellation::default());
        let ticket = list.begin_fetch(FetchOrigin::Mount);
        list.apply(&ticket, backend.list());

        (backend, list, MutationController::default())
    }

    /// Runs the full submit → request → complete → refresh cycle.
    fn run(
        backend: &mut FakeBackend,
        list: &mut ChannelList,
        controller: &mut MutationController,
    ) -> Option<MutationOutcome> {
        let mutation = controller.submit(list)?;
        let kind = mutation.kind();
        let res = backend.execute(mutation);
        let outcome = controller.complete(kind, res, list);

        if let MutationOutcome::Succeeded { refresh, .. } = &outcome {
            assert_eq!(list.apply(refresh, backend.list()), FetchApplied::Loaded);
        }

        Some(outcome)
    }

    #[test]
    fn add_without_url_issues_no_request() {
        let (mut backend, mut list, mut controller) = setup(vec![]);

        controller.open_add(&mut list);
        controller.set_field(FormField::Title, "Tech Talks".into());

        assert!(run(&mut backend, &mut list, &mut controller).is_none());
        assert!(backend.requests.is_empty());
        assert_eq!(list.error(), Some(MISSING_URL));
        assert!(matches!(controller.dialog(), Some(Dialog::Add(_))));
    }

    #[test]
    fn add_without_title_issues_no_request() {
        let (mut backend, mut list, mut controller) = setup(vec![]);

        controller.open_add(&mut list);
        controller.set_field(FormField::Url, "https://youtube.com/@techtalks".into());
        controller.set_field(FormField::Title, "   ".into());

        assert!(run(&mut backend, &mut list, &mut controller).is_none());
        assert!(backend.requests.is_empty());
        assert_eq!(list.error(), Some(MISSING_TITLE));
    }

    #[test]
    fn add_sends_url_as_channel_id_and_refreshes() {
        let (mut backend, mut list, mut controller) = setup(vec![channel("1", "Existing", "")]);

        controller.open_add(&mut list);
        controller.set_field(FormField::Url, " https://youtube.com/@techtalks ".into());
        controller.set_field(FormField::Title, "Tech Talks".into());

        let outcome = run(&mut backend, &mut list, &mut controller).unwrap();

        match &backend.requests[0] {
            Mutation::Create(new) => {
                assert_eq!(new.channel_id, "https://youtube.com/@techtalks");
                assert_eq!(new.subscriber_count, 0);
                assert_eq!(new.video_count, 0);
            }
            other => panic!("unexpected request {:?}", other),
        }
        match outcome {
            MutationOutcome::Succeeded { toast, .. } => assert_eq!(toast.title, "Channel added"),
            MutationOutcome::Failed => panic!("add failed"),
        }
        assert!(controller.dialog().is_none());
        assert_eq!(list.channels(), backend.list().unwrap().as_slice());
        assert_eq!(list.channels().len(), 2);
    }

    #[test]
    fn add_rejection_surfaces_server_message() {
        let (mut backend, mut list, mut controller) = setup(vec![]);
        backend.fail_with = Some(ApiError::Validation("Channel already exists".into()));

        controller.open_add(&mut list);
        controller.set_field(FormField::Url, "UC123".into());
        controller.set_field(FormField::Title, "Dup".into());

        assert!(matches!(
            run(&mut backend, &mut list, &mut controller),
            Some(MutationOutcome::Failed)
        ));
        assert_eq!(list.error(), Some("Channel already exists"));
        assert!(matches!(controller.dialog(), Some(Dialog::Add(form)) if form.title == "Dup"));
        assert!(!controller.is_pending());
    }

    #[test]
    fn edit_prefills_form_and_updates_only_editable_fields() {
        let (mut backend, mut list, mut controller) = setup(vec![channel("1", "Old", "desc")]);
        let snapshot = list.find("1").unwrap().clone();

        controller.open_edit(&snapshot, &mut list);
        match controller.dialog() {
            Some(Dialog::Edit { form, .. }) => {
                assert_eq!(form.title, "Old");
                assert_eq!(form.description, "desc");
            }
            other => panic!("unexpected dialog {:?}", other),
        }

        controller.set_field(FormField::Title, "New".into());
        run(&mut backend, &mut list, &mut controller).unwrap();

        assert_eq!(
            backend.requests,
            vec![Mutation::Update(
                "1".into(),
                ChannelUpdate {
                    title: "New".into(),
                    description: "desc".into(),
                    thumbnail: String::new(),
                }
            )]
        );
        assert_eq!(list.find("1").unwrap().title, "New");
        assert_eq!(list.find("1").unwrap().channel_id, "UC1");
    }

    #[test]
    fn collection_reflects_fresh_fetch_not_local_patch() {
        let (mut backend, mut list, mut controller) =
            setup(vec![channel("1", "One", ""), channel("2", "Two", "")]);

        // someone else added a channel since the list was loaded
        backend.channels.push(channel("3", "Three", ""));

        let target = list.find("1").unwrap().clone();
        controller.open_delete(&target, &mut list);
        run(&mut backend, &mut list, &mut controller).unwrap();

        let ids: Vec<&str> = list.channels().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn delete_not_found_keeps_dialog_and_collection() {
        let (mut backend, mut list, mut controller) = setup(vec![channel("42", "Gone", "")]);
        let target = list.find("42").unwrap().clone();
        backend.channels.clear();

        controller.open_delete(&target, &mut list);
        let outcome = run(&mut backend, &mut list, &mut controller);

        assert!(matches!(outcome, Some(MutationOutcome::Failed)));
        assert_eq!(list.error(), Some(DELETE_FAILED));
        assert_eq!(controller.dialog(), Some(&Dialog::Delete(target)));
        assert_eq!(list.channels().len(), 1);
        assert_eq!(list.status(), LoadStatus::Loaded);
    }

    #[test]
    fn update_network_failure_uses_fallback() {
        let (mut backend, mut list, mut controller) = setup(vec![channel("1", "One", "")]);
        backend.fail_with = Some(ApiError::Network("offline".into()));

        let target = list.find("1").unwrap().clone();
        controller.open_edit(&target, &mut list);
        run(&mut backend, &mut list, &mut controller);

        assert_eq!(list.error(), Some(UPDATE_FAILED));
        assert!(matches!(controller.dialog(), Some(Dialog::Edit { .. })));
    }

    #[test]
    fn only_one_dialog_and_no_switch_while_pending() {
        let (_backend, mut list, mut controller) = setup(vec![channel("1", "One", "")]);
        let target = list.find("1").unwrap().clone();

        controller.open_add(&mut list);
        controller.open_delete(&target, &mut list);
        assert!(matches!(controller.dialog(), Some(Dialog::Delete(_))));

        let mutation = controller.submit(&mut list).unwrap();
        assert!(controller.is_pending());
        assert!(controller.submit(&mut list).is_none());
        assert!(!controller.open_add(&mut list));
        assert!(!controller.close());

        controller.complete(mutation.kind(), Ok(()), &mut list);
        assert!(controller.dialog().is_none());
        assert!(controller.open_add(&mut list));
    }

    #[test]
    fn successful_submit_clears_previous_error() {
        let (mut backend, mut list, mut controller) = setup(vec![channel("1", "One", "")]);

        controller.open_add(&mut list);
        run(&mut backend, &mut list, &mut controller);
        assert_eq!(list.error(), Some(MISSING_URL));

        controller.set_field(FormField::Url, "UC9".into());
        controller.set_field(FormField::Title, "Nine".into());
        controller.submit(&mut list).unwrap();
        assert_eq!(list.error(), None);
    }

    #[test]
    fn opening_a_dialog_clears_stale_error() {
        let (_backend, mut list, mut controller) = setup(vec![channel("1", "One", "")]);
        let target = list.find("1").unwrap().clone();

        list.report_error(crate::view_models::channel_list::LOAD_FAILED.to_string());
        assert!(controller.open_edit(&target, &mut list));
        assert_eq!(list.error(), None);

        controller.close();
        list.report_error("Could not copy the URL to the clipboard.".into());
        assert!(controller.open_add(&mut list));
        assert_eq!(list.error(), None);
    }

    #[test]
    fn refused_open_keeps_error_of_pending_dialog() {
        let (_backend, mut list, mut controller) = setup(vec![channel("1", "One", "")]);
        let target = list.find("1").unwrap().clone();

        controller.open_delete(&target, &mut list);
        controller.submit(&mut list).unwrap();
        list.report_error("still deleting".into());

        assert!(!controller.open_add(&mut list));
        assert_eq!(list.error(), Some("still deleting"));
    }
}
