use std::collections::HashMap;

use crate::{
    foundation::error::{GridfeedError, GridfeedResult},
    post::model::Post,
};

/// Default cap on how many posts stay resident (and therefore get laid out) at once.
pub const MAX_RESIDENT_POSTS: usize = 240;

/// Caller-side resident window over the feed.
///
/// Keeps the post list in the shape the layout engine expects: deduplicated by id, sorted
/// newest first, and no longer than `max_posts`. Oldest posts are evicted once the cap is
/// exceeded so every relayout stays bounded.
#[derive(Clone, Debug)]
pub struct FeedWindow {
    posts: Vec<Post>,
    max_posts: usize,
}

/// What a merge into the window changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowUpdate {
    /// Posts that were not resident before.
    pub added: usize,
    /// Resident posts replaced by a fresher copy with the same id.
    pub replaced: usize,
    /// Ids evicted from the tail, in feed order.
    pub evicted: Vec<String>,
}

impl WindowUpdate {
    /// True when the merge left the window unchanged.
    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.replaced == 0 && self.evicted.is_empty()
    }
}

impl Default for FeedWindow {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            max_posts: MAX_RESIDENT_POSTS,
        }
    }
}

impl FeedWindow {
    /// Empty window holding at most `max_posts` posts.
    pub fn new(max_posts: usize) -> GridfeedResult<Self> {
        if max_posts == 0 {
            return Err(GridfeedError::validation("feed window max_posts must be > 0"));
        }
        Ok(Self {
            posts: Vec::new(),
            max_posts,
        })
    }

    /// Window seeded with an initial page.
    pub fn with_posts(
        max_posts: usize,
        posts: impl IntoIterator<Item = Post>,
    ) -> GridfeedResult<Self> {
        let mut window = Self::new(max_posts)?;
        window.extend(posts)?;
        Ok(window)
    }

    /// Merge a page of posts (initial load, pagination append or a freshly created post).
    ///
    /// Every incoming post is validated before anything is merged; on error the window is
    /// left untouched.
    pub fn extend(&mut self, page: impl IntoIterator<Item = Post>) -> GridfeedResult<WindowUpdate> {
        let page: Vec<Post> = page.into_iter().collect();
        for post in &page {
            post.validate()?;
        }

        let mut index: HashMap<String, usize> = self
            .posts
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        let mut update = WindowUpdate::default();
        for post in page {
            match index.get(&post.id) {
                Some(&i) => {
                    self.posts[i] = post;
                    update.replaced += 1;
                }
                None => {
                    index.insert(post.id.clone(), self.posts.len());
                    self.posts.push(post);
                    update.added += 1;
                }
            }
        }

        sort_newest_first(&mut self.posts);
        if self.posts.len() > self.max_posts {
            update.evicted = self
                .posts
                .drain(self.max_posts..)
                .map(|p| p.id)
                .collect();
        }

        tracing::debug!(
            added = update.added,
            replaced = update.replaced,
            evicted = update.evicted.len(),
            resident = self.posts.len(),
            "feed window merged page"
        );
        Ok(update)
    }

    /// Merge a single post.
    pub fn insert(&mut self, post: Post) -> GridfeedResult<WindowUpdate> {
        self.extend(std::iter::once(post))
    }

    /// Drop a post by id (e.g. after the author deletes it).
    pub fn remove(&mut self, id: &str) -> Option<Post> {
        let idx = self.posts.iter().position(|p| p.id == id)?;
        Some(self.posts.remove(idx))
    }

    /// Resident posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Whether a post with this id is resident.
    pub fn contains(&self, id: &str) -> bool {
        self.posts.iter().any(|p| p.id == id)
    }

    /// Number of resident posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// True when no posts are resident.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Resident cap.
    pub fn max_posts(&self) -> usize {
        self.max_posts
    }

    /// Oldest resident post; pagination cursors start after it.
    pub fn oldest(&self) -> Option<&Post> {
        self.posts.last()
    }

    /// Consume the window, yielding the ordered posts.
    pub fn into_posts(self) -> Vec<Post> {
        self.posts
    }
}

/// Sort descending by creation time; equal timestamps order by id so the result is total.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
#[path = "../../tests/unit/post/window.rs"]
mod tests;
