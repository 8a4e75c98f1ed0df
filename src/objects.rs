pub mod api_config;
pub mod api_error;
pub mod channel;
pub(crate) mod nullable;
pub mod preview;
pub mod toast;

pub use api_config::ApiConfig;
pub use api_error::ApiError;
pub use channel::{Channel, ChannelUpdate, NewChannel};
pub use preview::{ChannelSummary, Preview, Video};
pub use toast::{Toast, ToastContent, ToastQueue, ToastVariant};
