//! Page state kept apart from rendering.
pub mod channel_list;
pub mod copied;
pub mod fetch;
pub mod mutation;
pub mod preview;
