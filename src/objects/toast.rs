use uuid::Uuid;

/// How long a toast stays visible.
pub const TOAST_TTL_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastContent {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl ToastContent {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Success,
        }
    }

    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub content: ToastContent,
    /// Milliseconds since the epoch.
    pub expires_at: f64,
}

/// Active toasts in insertion order.
#[derive(Debug, Default)]
pub struct ToastQueue {
    entries: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, content: ToastContent, now: f64) -> Uuid {
        let id = Uuid::new_v4();

        self.entries.push(Toast {
            id,
            content,
            expires_at: now + f64::from(TOAST_TTL_MS),
        });

        id
    }

    /// Drops expired entries; returns whether anything changed.
    pub fn sweep(&mut self, now: f64) -> bool {
        let len = self.entries.len();

        self.entries.retain(|t| t.expires_at > now);
        len != self.entries.len()
    }

    /// Handles the timer scheduled for `id` when it was pushed.
    ///
    /// The entry goes regardless of the clock, since the timer may fire slightly before
    /// `expires_at`. Any other overdue entries go with it.
    pub fn expire(&mut self, id: &Uuid, now: f64) -> bool {
        let dismissed = self.dismiss(id);
        let swept = self.sweep(now);

        dismissed || swept
    }

    pub fn dismiss(&mut self, id: &Uuid) -> bool {
        let len = self.entries.len();

        self.entries.retain(|t| &t.id != id);
        len != self.entries.len()
    }

    pub fn active(&self) -> &[Toast] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_expire_after_ttl() {
        let mut queue = ToastQueue::default();

        queue.push(ToastContent::success("Channel added", "ok"), 1_000.0);
        queue.push(ToastContent::info("Channel deleted", "ok"), 2_000.0);

        assert!(!queue.sweep(3_999.0));
        assert_eq!(queue.active().len(), 2);

        assert!(queue.sweep(4_000.0));
        assert_eq!(queue.active().len(), 1);
        assert_eq!(queue.active()[0].content.title, "Channel deleted");

        assert!(queue.sweep(5_000.0));
        assert!(queue.active().is_empty());
    }

    #[test]
    fn dismiss_removes_only_that_entry() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastContent::success("a", ""), 0.0);
        queue.push(ToastContent::success("b", ""), 0.0);

        assert!(queue.dismiss(&first));
        assert!(!queue.dismiss(&first));
        assert_eq!(queue.active().len(), 1);
        assert_eq!(queue.active()[0].content.title, "b");
    }

    #[test]
    fn timer_firing_early_still_expires_its_entry() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastContent::success("URL copied", ""), 1_000.0);
        let second = queue.push(ToastContent::info("Channel deleted", ""), 1_500.0);

        assert!(queue.expire(&first, 3_999.0));
        assert_eq!(queue.active().len(), 1);
        assert_eq!(queue.active()[0].id, second);

        assert!(queue.expire(&second, 4_499.0));
        assert!(queue.active().is_empty());
        assert!(!queue.expire(&second, 5_000.0));
    }

    #[test]
    fn expiring_dismissed_entry_sweeps_overdue_ones() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastContent::success("a", ""), 0.0);
        queue.push(ToastContent::success("b", ""), 100.0);

        queue.dismiss(&first);
        assert!(queue.expire(&first, 3_100.0));
        assert!(queue.active().is_empty());
    }
}
