pub mod comment_form;
pub mod cooldown;
pub mod paged_list;
pub mod selection;

pub use comment_form::CommentFormState;
pub use cooldown::Cooldown;
pub use paged_list::PagedList;
pub use selection::{SelectedTrack, SelectionMap, TrackKey};
