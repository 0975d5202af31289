//! Storage layout: which key holds which JSON document.

/// List of [`User`](crate::domain::User) records.
pub const USERS: &str = "users";

/// The signed-in [`PublicUser`](crate::domain::PublicUser).
pub const CURRENT_USER: &str = "user";

/// List of [`BlogPost`](crate::domain::BlogPost) records, newest first.
pub const BLOG_POSTS: &str = "blogPosts";

pub fn scan_history(user_id: &str) -> String {
    format!("scanHistory_{user_id}")
}

pub fn scan_result(scope: &str) -> String {
    format!("scanResults_{scope}")
}

pub fn post_draft(scope: &str) -> String {
    format!("postDraft_{scope}")
}
