//! Domain entities - the core business objects.

mod comment;
mod post;
pub mod remedies;
mod scan;
pub mod seed;
mod user;
mod vote;

pub use comment::Comment;
pub use post::{BlogPost, BlogPostPatch, NewBlogPost};
pub use scan::{PostDraft, ScanHistory, ScanReport, ScanResult};
pub use user::{AuthorSnapshot, PublicUser, User, avatar_url};
pub use vote::{Vote, VoteTally};
