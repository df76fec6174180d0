pub use masterblog_api_types::{
    DeleteResponse, ErrorBody, PostListQuery, PostRecord, PostSearchQuery, PostWriteRequest,
};

use crate::application::posts::{CreatePostCommand, SearchPostsQuery, UpdatePostCommand};
use crate::domain::posts::Post;

impl From<Post> for PostRecord {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            date: post.date,
        }
    }
}

pub(crate) fn create_command(request: PostWriteRequest) -> CreatePostCommand {
    CreatePostCommand {
        title: request.title,
        content: request.content,
        author: request.author,
        date: request.date,
    }
}

pub(crate) fn update_command(id: u64, request: PostWriteRequest) -> UpdatePostCommand {
    UpdatePostCommand {
        id,
        title: request.title,
        content: request.content,
        author: request.author,
        date: request.date,
    }
}

pub(crate) fn search_query(query: PostSearchQuery) -> SearchPostsQuery {
    SearchPostsQuery {
        title: query.title,
        content: query.content,
        author: query.author,
        date: query.date,
    }
}

pub(crate) fn records(posts: Vec<Post>) -> Vec<PostRecord> {
    posts.into_iter().map(PostRecord::from).collect()
}
