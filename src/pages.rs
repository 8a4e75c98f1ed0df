pub mod channels_page;
pub mod not_found_page;
pub mod preview_page;

pub use channels_page::ChannelsPage;
pub use not_found_page::NotFoundPage;
pub use preview_page::PreviewPage;
