pub mod channel_list;
pub mod feed_preview;
pub mod icon;
pub mod nav_bar;
pub mod notification;
pub mod router;
pub mod top;

pub use channel_list::ChannelList;
pub use feed_preview::FeedPreview;
pub use nav_bar::NavBar;
pub use notification::Notification;
pub use top::Top;
