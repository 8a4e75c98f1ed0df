use super::{
    copied::{CopiedIndicators, CopyTicket, COPY_FAILED},
    fetch::{Cancellation, FetchOrigin, FetchSequence, FetchTicket, LoadStatus},
};
use crate::objects::{ApiError, Preview};

pub const PREVIEW_FAILED: &str = "Failed to load preview. Please try again.";

/// State of the preview page for one feed id.
#[derive(Debug)]
pub struct FeedPreview {
    feed_id: String,
    status: LoadStatus,
    preview: Option<Preview>,
    error: Option<String>,
    sequence: FetchSequence,
    cancellation: Cancellation,
    copied: CopiedIndicators<String>,
}

impl FeedPreview {
    pub fn new(cancellation: Cancellation) -> Self {
        Self {
            feed_id: String::new(),
            status: LoadStatus::Idle,
            preview: None,
            error: None,
            sequence: FetchSequence::default(),
            cancellation,
            copied: CopiedIndicators::default(),
        }
    }

    /// Starts loading `feed_id`; whatever was shown before is discarded.
    pub fn load(&mut self, feed_id: &str) -> FetchTicket {
        self.feed_id = feed_id.to_string();
        self.status = LoadStatus::Loading;
        self.preview = None;
        self.error = None;
        self.sequence.issue(FetchOrigin::Mount, &self.cancellation)
    }

    pub fn apply(&mut self, ticket: &FetchTicket, res: Result<Preview, ApiError>) -> bool {
        if !self.sequence.is_current(ticket) {
            log::debug!("dropping stale preview response");
            return false;
        }

        match res {
            Ok(preview) => {
                self.preview = Some(preview);
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                log::error!("loading preview for {} failed: {}", self.feed_id, e);
                self.status = LoadStatus::Failed;
                self.error = Some(PREVIEW_FAILED.to_string());
            }
        }

        true
    }

    /// Records a successful copy, dropping an earlier clipboard error.
    pub fn mark_copied(&mut self) -> CopyTicket<String> {
        if self.error.as_deref() == Some(COPY_FAILED) {
            self.error = None;
        }
        self.copied.mark(self.feed_id.clone())
    }

    pub fn expire_copied(&mut self, ticket: &CopyTicket<String>) -> bool {
        self.copied.expire(ticket)
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_copied(&self.feed_id)
    }

    pub fn copy_failed(&mut self, e: &ApiError) {
        log::warn!("{}", e);
        self.error = Some(COPY_FAILED.to_string());
    }

    pub fn feed_id(&self) -> &str {
        &self.feed_id
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{ChannelSummary, Video};

    fn video(id: &str) -> Video {
        Video {
            id: id.into(),
            title: format!("Episode {}", id),
            description: String::new(),
            thumbnail: String::new(),
            published_at: "2024-01-01".into(),
            duration: "10:00".into(),
            url: format!("https://www.youtube.com/watch?v={}", id),
        }
    }

    fn preview(videos: Vec<Video>) -> Preview {
        Preview {
            channel: ChannelSummary {
                title: "Tech Talks".into(),
                description: String::new(),
                thumbnail: String::new(),
            },
            videos,
        }
    }

    #[test]
    fn keeps_server_order() {
        let mut state = FeedPreview::new(Cancellation::default());
        let ticket = state.load("abc");

        assert_eq!(state.status(), LoadStatus::Loading);
        assert!(state.apply(&ticket, Ok(preview(vec![video("v2"), video("v1")]))));

        let ids: Vec<&str> = state
            .preview()
            .unwrap()
            .videos
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(ids, vec!["v2", "v1"]);
        assert_eq!(state.status(), LoadStatus::Loaded);
    }

    #[test]
    fn changing_feed_discards_previous_preview() {
        let mut state = FeedPreview::new(Cancellation::default());
        let first = state.load("abc");
        state.apply(&first, Ok(preview(vec![video("v1")])));

        let second = state.load("def");
        assert!(state.preview().is_none());
        assert_eq!(state.feed_id(), "def");

        assert!(!state.apply(&first, Ok(preview(vec![video("old")]))));
        assert!(state.preview().is_none());

        state.apply(&second, Ok(preview(vec![])));
        assert!(state.preview().unwrap().videos.is_empty());
    }

    #[test]
    fn failure_sets_error() {
        let mut state = FeedPreview::new(Cancellation::default());
        let ticket = state.load("missing");

        state.apply(&ticket, Err(ApiError::NotFound("Feed or channel not found".into())));

        assert_eq!(state.status(), LoadStatus::Failed);
        assert_eq!(state.error(), Some(PREVIEW_FAILED));
    }

    #[test]
    fn late_response_after_cancel_is_ignored() {
        let cancellation = Cancellation::default();
        let mut state = FeedPreview::new(cancellation.clone());
        let ticket = state.load("abc");

        cancellation.cancel();

        assert!(!state.apply(&ticket, Ok(preview(vec![video("v1")]))));
        assert_eq!(state.status(), LoadStatus::Loading);
    }

    #[test]
    fn copied_flag_resets_only_for_latest_copy() {
        let mut state = FeedPreview::new(Cancellation::default());
        state.load("abc");

        let first = state.mark_copied();
        let second = state.mark_copied();

        assert!(!state.expire_copied(&first));
        assert!(state.is_copied());
        assert!(state.expire_copied(&second));
        assert!(!state.is_copied());
    }

    #[test]
    fn successful_copy_clears_clipboard_error() {
        let mut state = FeedPreview::new(Cancellation::default());
        let ticket = state.load("abc");
        state.apply(&ticket, Ok(preview(vec![video("v1")])));

        state.copy_failed(&ApiError::Clipboard("denied".into()));
        assert_eq!(state.error(), Some(COPY_FAILED));

        state.mark_copied();
        assert!(state.is_copied());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn copy_does_not_hide_load_failure() {
        let mut state = FeedPreview::new(Cancellation::default());
        let ticket = state.load("abc");
        state.apply(&ticket, Err(ApiError::Network("offline".into())));

        state.mark_copied();
        assert_eq!(state.error(), Some(PREVIEW_FAILED));
    }
}
