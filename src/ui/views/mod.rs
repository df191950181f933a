pub mod comments;
pub mod music_store;

pub use comments::CommentsView;
pub use music_store::MusicStoreView;
