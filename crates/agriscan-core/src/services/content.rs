use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::seed::demo_posts;
use crate::domain::{
    BlogPost, BlogPostPatch, Comment, NewBlogPost, PublicUser, ScanHistory, ScanResult, Vote,
};
use crate::error::DomainError;
use crate::ports::KeyValueStore;

use super::{documents, keys};

/// Community feed and per-user scan history.
///
/// Each collection is one JSON list under one key. Every call reads the full
/// list and every mutation writes it back before returning. Mutations hold
/// `write_lock` for the whole read-modify-write.
pub struct ContentStore {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl ContentStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Write the starter feed when no feed exists yet. Returns whether it did.
    pub async fn seed_if_empty(&self) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;

        if self.store.exists(keys::BLOG_POSTS).await? {
            return Ok(false);
        }
        self.write_posts(&demo_posts()).await?;

        tracing::info!(backend = self.store.backend(), "Seeded community feed");
        Ok(true)
    }

    /// All posts, newest first.
    pub async fn blog_posts(&self) -> Result<Vec<BlogPost>, DomainError> {
        let posts: Vec<BlogPost> =
            documents::read_list(self.store.as_ref(), keys::BLOG_POSTS).await?;
        tracing::debug!(count = posts.len(), "Loaded blog posts");
        Ok(posts)
    }

    pub async fn blog_post(&self, id: &str) -> Result<Option<BlogPost>, DomainError> {
        let posts = self.blog_posts().await?;
        Ok(posts.into_iter().find(|p| p.id == id))
    }

    /// Prepend a post to the feed. Post ids are unique within the feed.
    pub async fn save_blog_post(&self, post: BlogPost) -> Result<BlogPost, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut posts = self.blog_posts().await?;
        if posts.iter().any(|p| p.id == post.id) {
            return Err(DomainError::Duplicate(format!(
                "Post {} already exists",
                post.id
            )));
        }
        posts.insert(0, post.clone());
        self.write_posts(&posts).await?;

        tracing::info!(post_id = %post.id, author_id = %post.author.id, "Saved blog post");
        Ok(post)
    }

    /// Publish a post written by `author`.
    pub async fn create_post(
        &self,
        author: &PublicUser,
        draft: NewBlogPost,
    ) -> Result<BlogPost, DomainError> {
        if draft.plant_name.trim().is_empty()
            || draft.diagnosis.trim().is_empty()
            || draft.content.trim().is_empty()
        {
            return Err(DomainError::Validation(
                "Plant name, diagnosis and content are required".to_string(),
            ));
        }

        self.save_blog_post(BlogPost::new(author.author(), draft))
            .await
    }

    /// Shallow-merge `patch` into the post with `id`. A missing post is a
    /// no-op and yields `None`.
    pub async fn update_blog_post(
        &self,
        id: &str,
        patch: BlogPostPatch,
    ) -> Result<Option<BlogPost>, DomainError> {
        let _guard = self.write_lock.lock().await;
        self.patch_post(id, |_| Ok(patch)).await
    }

    /// Toggle `vote` on a post and persist the new tally.
    pub async fn cast_vote(&self, post_id: &str, vote: Vote) -> Result<BlogPost, DomainError> {
        let _guard = self.write_lock.lock().await;

        let post = self
            .patch_post(post_id, |post| {
                Ok(BlogPost::tally_patch(post.tally().toggle(vote)))
            })
            .await?
            .ok_or_else(|| DomainError::not_found("BlogPost", post_id))?;

        tracing::info!(
            post_id = %post_id,
            upvotes = post.upvotes,
            downvotes = post.downvotes,
            user_vote = ?post.user_vote,
            "Vote applied"
        );
        Ok(post)
    }

    /// Append a comment to the end of a post's comment list.
    pub async fn add_comment(
        &self,
        post_id: &str,
        author: &PublicUser,
        text: &str,
    ) -> Result<Comment, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::Validation(
                "Comment must not be empty".to_string(),
            ));
        }

        let _guard = self.write_lock.lock().await;

        let comment = Comment::new(author.author(), text.to_string());
        self.patch_post(post_id, |post| {
            let mut comments = post.comments.clone();
            comments.push(comment.clone());
            Ok(BlogPostPatch {
                comments: Some(comments),
                ..Default::default()
            })
        })
        .await?
        .ok_or_else(|| DomainError::not_found("BlogPost", post_id))?;

        tracing::info!(post_id = %post_id, comment_id = %comment.id, "Comment added");
        Ok(comment)
    }

    /// A user's saved scans, newest first.
    pub async fn scan_history(&self, user_id: &str) -> Result<Vec<ScanHistory>, DomainError> {
        Ok(documents::read_list(self.store.as_ref(), &keys::scan_history(user_id)).await?)
    }

    pub async fn save_scan_to_history(
        &self,
        user_id: &str,
        entry: ScanHistory,
    ) -> Result<ScanHistory, DomainError> {
        let _guard = self.write_lock.lock().await;

        let key = keys::scan_history(user_id);
        let mut history: Vec<ScanHistory> =
            documents::read_list(self.store.as_ref(), &key).await?;
        history.insert(0, entry.clone());
        documents::write(self.store.as_ref(), &key, &history, None).await?;

        tracing::info!(user_id = %user_id, scan_id = %entry.id, "Saved scan to history");
        Ok(entry)
    }

    /// Save a fresh scan result to a user's history.
    pub async fn record_scan(
        &self,
        user_id: &str,
        result: &ScanResult,
    ) -> Result<ScanHistory, DomainError> {
        self.save_scan_to_history(user_id, ScanHistory::from_result(result))
            .await
    }

    /// Flag a history entry as published to the feed.
    pub async fn mark_scan_posted(
        &self,
        user_id: &str,
        scan_id: &str,
    ) -> Result<Option<ScanHistory>, DomainError> {
        let _guard = self.write_lock.lock().await;

        let key = keys::scan_history(user_id);
        let mut history: Vec<ScanHistory> =
            documents::read_list(self.store.as_ref(), &key).await?;
        let Some(entry) = history.iter_mut().find(|h| h.id == scan_id) else {
            return Ok(None);
        };
        entry.posted_as_blog = true;
        let entry = entry.clone();
        documents::write(self.store.as_ref(), &key, &history, None).await?;

        Ok(Some(entry))
    }

    /// Caller must hold `write_lock`.
    async fn patch_post<F>(&self, id: &str, make_patch: F) -> Result<Option<BlogPost>, DomainError>
    where
        F: FnOnce(&BlogPost) -> Result<BlogPostPatch, DomainError>,
    {
        let mut posts = self.blog_posts().await?;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(post_id = %id, "Update skipped, no such post");
            return Ok(None);
        };

        make_patch(post)?.apply(post);
        let updated = post.clone();
        self.write_posts(&posts).await?;

        Ok(Some(updated))
    }

    async fn write_posts(&self, posts: &[BlogPost]) -> Result<(), DomainError> {
        documents::write(self.store.as_ref(), keys::BLOG_POSTS, posts, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Vote;
    use crate::testing::MemoryStore;

    async fn seeded() -> (Arc<MemoryStore>, ContentStore) {
        let store = Arc::new(MemoryStore::default());
        let content = ContentStore::new(store.clone());
        content.seed_if_empty().await.unwrap();
        (store, content)
    }

    fn grower() -> PublicUser {
        PublicUser {
            id: "u1".to_string(),
            name: "Grower".to_string(),
            email: "grower@example.com".to_string(),
            avatar: None,
        }
    }

    fn sample_result() -> ScanResult {
        ScanResult {
            plant_name: "Pepper Plant".to_string(),
            diagnosis: "Potassium Deficiency".to_string(),
            confidence: 93,
            image: "leaf.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_seed_only_once() {
        let (_store, content) = seeded().await;
        assert!(!content.seed_if_empty().await.unwrap());
        assert_eq!(content.blog_posts().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_upvote_then_repeat_restores_tally() {
        let (_store, content) = seeded().await;

        let post = content.cast_vote("1", Vote::Up).await.unwrap();
        assert_eq!(post.upvotes, 25);
        assert_eq!(post.user_vote, Some(Vote::Up));

        let post = content.cast_vote("1", Vote::Up).await.unwrap();
        assert_eq!(post.upvotes, 24);
        assert_eq!(post.user_vote, None);

        let reloaded = content.blog_post("1").await.unwrap().unwrap();
        assert_eq!(reloaded.tally(), post.tally());
    }

    #[tokio::test]
    async fn test_down_while_up_swings_two() {
        let (_store, content) = seeded().await;

        content.cast_vote("2", Vote::Up).await.unwrap();
        let post = content.cast_vote("2", Vote::Down).await.unwrap();

        assert_eq!(post.upvotes, 18);
        assert_eq!(post.downvotes, 2);
        assert_eq!(post.user_vote, Some(Vote::Down));
    }

    #[tokio::test]
    async fn test_vote_on_missing_post() {
        let (_store, content) = seeded().await;
        let err = content.cast_vote("404", Vote::Up).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_comment_appends_to_one_post_only() {
        let (_store, content) = seeded().await;
        let before = content.blog_posts().await.unwrap();

        let comment = content
            .add_comment("3", &grower(), "Thanks for the tip!")
            .await
            .unwrap();

        let after = content.blog_posts().await.unwrap();
        let post = after.iter().find(|p| p.id == "3").unwrap();
        assert_eq!(post.comments.len(), 3);
        assert_eq!(post.comments.last(), Some(&comment));
        assert_eq!(comment.author.name, "Grower");

        for (old, new) in before.iter().zip(after.iter()).filter(|(p, _)| p.id != "3") {
            assert_eq!(old, new);
        }
    }

    #[tokio::test]
    async fn test_blank_comment_rejected() {
        let (_store, content) = seeded().await;
        let err = content.add_comment("1", &grower(), "   \n").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            content.blog_post("1").await.unwrap().unwrap().comments.len(),
            1
        );
    }

    #[tokio::test]
    async fn test_created_post_is_prepended_and_round_trips() {
        let (_store, content) = seeded().await;

        let created = content
            .create_post(
                &grower(),
                NewBlogPost {
                    plant_name: "Basil".to_string(),
                    diagnosis: "Nitrogen Deficiency".to_string(),
                    image: "basil.jpg".to_string(),
                    content: "Lower leaves turned pale.".to_string(),
                    remedies: vec!["Add compost".to_string(), " ".to_string()],
                },
            )
            .await
            .unwrap();

        let posts = content.blog_posts().await.unwrap();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0], created);
        assert_eq!(posts[0].remedies, vec!["Add compost".to_string()]);
    }

    #[tokio::test]
    async fn test_duplicate_post_id_rejected() {
        let (_store, content) = seeded().await;
        let mut post = content.blog_post("1").await.unwrap().unwrap();
        post.content = "copy".to_string();

        let err = content.save_blog_post(post).await.unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_update_missing_post_is_noop() {
        let (store, content) = seeded().await;
        let before = store.raw(keys::BLOG_POSTS);

        let result = content
            .update_blog_post(
                "missing",
                BlogPostPatch {
                    content: Some("x".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.raw(keys::BLOG_POSTS), before);
    }

    #[tokio::test]
    async fn test_scan_history_round_trip_and_posting_flag() {
        let (_store, content) = seeded().await;

        let first = content.record_scan("u1", &sample_result()).await.unwrap();
        let second = content.record_scan("u1", &sample_result()).await.unwrap();

        let history = content.scan_history("u1").await.unwrap();
        assert_eq!(history, vec![second.clone(), first.clone()]);
        assert!(content.scan_history("someone-else").await.unwrap().is_empty());

        let marked = content.mark_scan_posted("u1", &first.id).await.unwrap();
        assert!(marked.unwrap().posted_as_blog);
        assert!(content
            .mark_scan_posted("u1", "missing")
            .await
            .unwrap()
            .is_none());

        let history = content.scan_history("u1").await.unwrap();
        assert!(!history[0].posted_as_blog);
        assert!(history[1].posted_as_blog);
    }

    #[tokio::test]
    async fn test_corrupt_feed_is_reported() {
        let store = Arc::new(MemoryStore::default());
        store.put(keys::BLOG_POSTS, "{not json");
        let content = ContentStore::new(store);

        let err = content.blog_posts().await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Store(crate::error::StoreError::Corrupt { .. })
        ));
    }
}
