use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuthorSnapshot, Comment, Vote, VoteTally};

/// Post entity - a diagnosis shared with the community feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub author: AuthorSnapshot,
    pub plant_name: String,
    pub diagnosis: String,
    pub image: String,
    pub content: String,
    pub remedies: Vec<String>,
    pub upvotes: u32,
    pub downvotes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_vote: Option<Vote>,
}

impl BlogPost {
    /// Create a new post with no votes and no comments.
    ///
    /// Remedies that are blank after trimming are dropped.
    pub fn new(author: AuthorSnapshot, draft: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            plant_name: draft.plant_name,
            diagnosis: draft.diagnosis,
            image: draft.image,
            content: draft.content,
            remedies: draft
                .remedies
                .into_iter()
                .filter(|r| !r.trim().is_empty())
                .collect(),
            upvotes: 0,
            downvotes: 0,
            comments: Vec::new(),
            created_at: Utc::now(),
            user_vote: None,
        }
    }

    pub fn tally(&self) -> VoteTally {
        VoteTally {
            upvotes: self.upvotes,
            downvotes: self.downvotes,
            user_vote: self.user_vote,
        }
    }

    /// Patch that writes `tally` back onto a post.
    pub fn tally_patch(tally: VoteTally) -> BlogPostPatch {
        BlogPostPatch {
            upvotes: Some(tally.upvotes),
            downvotes: Some(tally.downvotes),
            user_vote: Some(tally.user_vote),
            ..Default::default()
        }
    }
}

/// Fields a user fills in when publishing a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub plant_name: String,
    pub diagnosis: String,
    pub image: String,
    pub content: String,
    #[serde(default)]
    pub remedies: Vec<String>,
}

/// Shallow partial update of a post. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostPatch {
    pub plant_name: Option<String>,
    pub diagnosis: Option<String>,
    pub image: Option<String>,
    pub content: Option<String>,
    pub remedies: Option<Vec<String>>,
    pub upvotes: Option<u32>,
    pub downvotes: Option<u32>,
    pub comments: Option<Vec<Comment>>,
    pub user_vote: Option<Option<Vote>>,
}

impl BlogPostPatch {
    pub fn apply(self, post: &mut BlogPost) {
        if let Some(plant_name) = self.plant_name {
            post.plant_name = plant_name;
        }
        if let Some(diagnosis) = self.diagnosis {
            post.diagnosis = diagnosis;
        }
        if let Some(image) = self.image {
            post.image = image;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(remedies) = self.remedies {
            post.remedies = remedies;
        }
        if let Some(upvotes) = self.upvotes {
            post.upvotes = upvotes;
        }
        if let Some(downvotes) = self.downvotes {
            post.downvotes = downvotes;
        }
        if let Some(comments) = self.comments {
            post.comments = comments;
        }
        if let Some(user_vote) = self.user_vote {
            post.user_vote = user_vote;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> AuthorSnapshot {
        AuthorSnapshot::new("u1", "Grower", "")
    }

    #[test]
    fn test_new_post_drops_blank_remedies() {
        let post = BlogPost::new(
            author(),
            NewBlogPost {
                plant_name: "Basil".to_string(),
                diagnosis: "Iron Deficiency".to_string(),
                remedies: vec![
                    "Apply chelated iron".to_string(),
                    "   ".to_string(),
                    String::new(),
                ],
                ..Default::default()
            },
        );

        assert_eq!(post.remedies, vec!["Apply chelated iron".to_string()]);
        assert_eq!(post.upvotes, 0);
        assert!(post.comments.is_empty());
        assert_eq!(post.user_vote, None);
    }

    #[test]
    fn test_patch_is_shallow() {
        let mut post = BlogPost::new(author(), NewBlogPost::default());
        let before = post.clone();

        BlogPostPatch {
            content: Some("updated".to_string()),
            user_vote: Some(Some(Vote::Down)),
            ..Default::default()
        }
        .apply(&mut post);

        assert_eq!(post.content, "updated");
        assert_eq!(post.user_vote, Some(Vote::Down));
        assert_eq!(post.plant_name, before.plant_name);
        assert_eq!(post.id, before.id);
    }

    #[test]
    fn test_json_layout_is_camel_case() {
        let json = r#"{
            "id": "7",
            "author": {"id": "u1", "name": "Grower", "avatar": ""},
            "plantName": "Pepper Plant",
            "diagnosis": "Potassium Deficiency",
            "image": "leaf.png",
            "content": "",
            "remedies": [],
            "upvotes": 3,
            "downvotes": 1,
            "comments": [],
            "createdAt": "2026-02-24T08:15:00.000Z",
            "userVote": null
        }"#;

        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.plant_name, "Pepper Plant");
        assert_eq!(post.user_vote, None);
        assert_eq!(post.created_at.to_rfc3339(), "2026-02-24T08:15:00+00:00");
    }
}
