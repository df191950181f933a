pub mod comment;
pub mod music;
pub mod paging;

pub use comment::{CommentDto, CommentListEnvelope, CommentRegisterResponse, CommentSummary};
pub use music::{MusicCategory, MusicCategoryEnvelope, MusicListEnvelope, MusicTrack};
pub use paging::{PageButton, PageQuery, Pagination};
