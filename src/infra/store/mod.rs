//! In-memory post storage.
//!
//! Posts live in a map keyed by id plus an id sequence that preserves
//! insertion order. New posts take the lowest unused positive id.

mod read;
mod write;

use std::collections::HashMap;

use metrics::gauge;
use tokio::sync::RwLock;

use crate::domain::posts::{Post, PostDraft, SEED_POSTS};

pub const METRIC_POSTS_CREATED: &str = "masterblog_posts_created_total";
pub const METRIC_POSTS_UPDATED: &str = "masterblog_posts_updated_total";
pub const METRIC_POSTS_DELETED: &str = "masterblog_posts_deleted_total";
pub const METRIC_POSTS_STORED: &str = "masterblog_posts_stored";

#[derive(Debug, Default)]
pub struct PostStore {
    posts: HashMap<u64, Post>,
    order: Vec<u64>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Smallest positive id not held by any stored post.
    pub fn next_id(&self) -> u64 {
        let mut candidate = 1;
        while self.posts.contains_key(&candidate) {
            candidate += 1;
        }
        candidate
    }

    pub fn insert(&mut self, draft: PostDraft) -> Post {
        let id = self.next_id();
        let post = Post::from_draft(id, draft);
        self.posts.insert(id, post.clone());
        self.order.push(id);
        post
    }

    pub fn overwrite(&mut self, id: u64, draft: PostDraft) -> Option<Post> {
        let post = self.posts.get_mut(&id)?;
        post.overwrite(draft);
        Some(post.clone())
    }

    pub fn remove(&mut self, id: u64) -> Option<Post> {
        let post = self.posts.remove(&id)?;
        self.order.retain(|stored| *stored != id);
        Some(post)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.order.iter().filter_map(|id| self.posts.get(id))
    }
}

/// Shared post store handed to the HTTP layer as both reader and writer.
#[derive(Debug, Default)]
pub struct InMemoryPosts {
    store: RwLock<PostStore>,
}

impl InMemoryPosts {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the two sample posts (ids 1 and 2).
    pub fn seeded() -> Self {
        let mut store = PostStore::new();
        for seed in SEED_POSTS.iter() {
            store.insert(PostDraft::from(seed));
        }
        gauge!(METRIC_POSTS_STORED).set(store.len() as f64);
        Self {
            store: RwLock::new(store),
        }
    }
}
