use std::sync::Arc;

use time::{Date, OffsetDateTime};

use crate::application::repos::{PostsRepo, PostsWriteRepo};

#[derive(Clone)]
pub struct PostService {
    pub(crate) reader: Arc<dyn PostsRepo>,
    pub(crate) writer: Arc<dyn PostsWriteRepo>,
    pub(crate) today: fn() -> Date,
}

impl PostService {
    pub fn new(reader: Arc<dyn PostsRepo>, writer: Arc<dyn PostsWriteRepo>) -> Self {
        Self {
            reader,
            writer,
            today: local_today,
        }
    }

    /// Replace the clock used to default the `date` of new posts.
    pub fn with_today(mut self, today: fn() -> Date) -> Self {
        self.today = today;
        self
    }
}

fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
