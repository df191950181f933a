use std::path::PathBuf;

use crate::http::CommentSubmission;
use crate::model::comment::CommentListEnvelope;
use crate::model::music::{MusicCategory, MusicListEnvelope, MusicQuery, MusicTrack};
use crate::model::paging::PageQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Every typed action in the app: commands dispatched by the panels and the
/// results the spawned requests answer with. List results carry the
/// generation tag of the request that produced them.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum Event {
    // Commands
    Initialize,
    LoadComments {
        url: String,
        generation: u64,
        query: PageQuery,
    },
    SubmitComment(CommentSubmission),
    UploadCommentImage {
        path: PathBuf,
    },
    LoadCategories,
    LoadMusicList {
        url: String,
        generation: u64,
        query: MusicQuery,
    },
    PlayTrack(MusicTrack),
    Toast(ToastKind, String),

    // Results
    CommentsFetched {
        generation: u64,
        envelope: CommentListEnvelope,
        query: PageQuery,
    },
    CommentsFailed {
        generation: u64,
        message: String,
    },
    CommentRegistered {
        comment_count: u64,
    },
    CommentRegisterFailed {
        message: String,
    },
    CommentImageUploaded {
        url: String,
    },
    CommentImageUploadFailed {
        message: String,
    },
    CategoriesFetched(Vec<MusicCategory>),
    CategoriesFailed {
        message: String,
    },
    MusicListFetched {
        generation: u64,
        envelope: MusicListEnvelope,
        query: MusicQuery,
    },
    MusicListFailed {
        generation: u64,
        message: String,
    },
}
