use serde::{Deserialize, Serialize};

/// Direction of a vote on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

/// Vote counts of a post together with the viewer's own vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTally {
    pub upvotes: u32,
    pub downvotes: u32,
    pub user_vote: Option<Vote>,
}

impl VoteTally {
    /// Apply a requested vote.
    ///
    /// The current vote's contribution is reverted first. Requesting the
    /// active direction again clears the vote; requesting the other
    /// direction swaps it, moving the tally by two.
    pub fn toggle(self, requested: Vote) -> Self {
        let mut next = self;

        match self.user_vote {
            Some(Vote::Up) => next.upvotes = next.upvotes.saturating_sub(1),
            Some(Vote::Down) => next.downvotes = next.downvotes.saturating_sub(1),
            None => {}
        }

        if self.user_vote == Some(requested) {
            next.user_vote = None;
        } else {
            match requested {
                Vote::Up => next.upvotes += 1,
                Vote::Down => next.downvotes += 1,
            }
            next.user_vote = Some(requested);
        }

        next
    }

    /// Net score shown next to a post.
    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }
}
