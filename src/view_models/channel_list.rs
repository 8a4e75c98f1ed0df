use super::fetch::{Cancellation, FetchOrigin, FetchSequence, FetchTicket, LoadStatus};
use crate::objects::{ApiError, Channel};

pub const LOAD_FAILED: &str = "Failed to load channels. Please try again.";

/// Result of handing a fetch response to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchApplied {
    Stale,
    Loaded,
    Failed,
}

/// Channels matching `query` in title or description, ignoring case, in collection order.
pub fn filter_channels<'a>(channels: &'a [Channel], query: &str) -> Vec<&'a Channel> {
    let needle = query.to_lowercase();

    channels.iter().filter(|c| c.matches(&needle)).collect()
}

/// In-memory mirror of the server's channel list.
///
/// The collection is only ever replaced wholesale by a fetch result. It also owns the page's
/// single error slot, which mutations write to as well.
#[derive(Debug)]
pub struct ChannelList {
    channels: Vec<Channel>,
    status: LoadStatus,
    error: Option<String>,
    query: String,
    sequence: FetchSequence,
    cancellation: Cancellation,
    manual_refresh_pending: bool,
}

impl ChannelList {
    pub fn new(cancellation: Cancellation) -> Self {
        Self {
            channels: Vec::new(),
            status: LoadStatus::Idle,
            error: None,
            query: String::new(),
            sequence: FetchSequence::default(),
            cancellation,
            manual_refresh_pending: false,
        }
    }

    pub fn begin_fetch(&mut self, origin: FetchOrigin) -> FetchTicket {
        self.status = LoadStatus::Loading;
        self.manual_refresh_pending = origin == FetchOrigin::Manual;
        self.sequence.issue(origin, &self.cancellation)
    }

    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        res: Result<Vec<Channel>, ApiError>,
    ) -> FetchApplied {
        if !self.sequence.is_current(ticket) {
            log::debug!("dropping stale channel list response");
            return FetchApplied::Stale;
        }

        self.manual_refresh_pending = false;

        match res {
            Ok(channels) => {
                self.channels = channels;
                self.status = LoadStatus::Loaded;
                self.error = None;
                FetchApplied::Loaded
            }
            Err(e) => {
                log::error!("loading channels failed: {}", e);
                self.status = LoadStatus::Failed;
                self.error = Some(LOAD_FAILED.to_string());
                FetchApplied::Failed
            }
        }
    }

    pub fn projection(&self) -> Vec<&Channel> {
        filter_channels(&self.channels, &self.query)
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn find(&self, id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.is_loading() && self.manual_refresh_pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces whatever is in the error slot.
    pub fn report_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Clears the error slot only if it still holds `message`.
    pub fn withdraw_error(&mut self, message: &str) -> bool {
        match self.error.as_deref() == Some(message) {
            true => {
                self.error = None;
                true
            }
            false => false,
        }
    }
}
