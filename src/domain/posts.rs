mod data;

use std::{cmp::Ordering, str::FromStr};

use time::{
    Date,
    format_description::FormatItem,
    macros::{date, format_description},
};

use super::error::DomainError;

pub use data::{SEED_POSTS, SeedPost};

pub const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// Ordering key for posts whose date is missing or not `YYYY-MM-DD`.
pub const UNDATED_SORT_KEY: Date = date!(1900 - 01 - 01);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl Post {
    pub fn from_draft(id: u64, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            date: draft.date,
        }
    }

    /// Overwrite every writable field; absent optional fields are cleared.
    pub fn overwrite(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
        self.date = draft.date;
    }

    pub fn field(&self, field: PostField) -> &str {
        match field {
            PostField::Title => &self.title,
            PostField::Content => &self.content,
            PostField::Author => self.author.as_deref().unwrap_or(""),
            PostField::Date => self.date.as_deref().unwrap_or(""),
        }
    }

    pub fn sort_date(&self) -> Date {
        self.date
            .as_deref()
            .and_then(|raw| Date::parse(raw, DATE_FORMAT).ok())
            .unwrap_or(UNDATED_SORT_KEY)
    }
}

/// Writer-supplied post fields with the required pair already checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl PostDraft {
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
        date: Option<String>,
    ) -> Result<Self, DomainError> {
        let (Some(title), Some(content)) = (present(title), present(content)) else {
            return Err(DomainError::validation("title and content are required"));
        };

        Ok(Self {
            title,
            content,
            author,
            date,
        })
    }

    /// Fill the defaults applied on creation: author `Unknown`, date `today`.
    pub fn with_creation_defaults(mut self, today: Date) -> Self {
        if self.author.is_none() {
            self.author = Some(DEFAULT_AUTHOR.to_string());
        }
        if self.date.is_none() {
            self.date = Some(format_date(today));
        }
        self
    }
}

impl From<&SeedPost> for PostDraft {
    fn from(seed: &SeedPost) -> Self {
        Self {
            title: seed.title.to_string(),
            content: seed.content.to_string(),
            author: Some(seed.author.to_string()),
            date: Some(seed.date.to_string()),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).expect("valid calendar date")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Title,
    Content,
    Author,
    Date,
}

impl FromStr for PostField {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "title" => Ok(PostField::Title),
            "content" => Ok(PostField::Content),
            "author" => Ok(PostField::Author),
            "date" => Ok(PostField::Date),
            other => Err(DomainError::invalid_argument("sort", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(DomainError::invalid_argument("direction", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostOrder {
    pub field: PostField,
    pub direction: SortDirection,
}

impl PostOrder {
    /// Parse the `sort`/`direction` query pair. `direction` is only
    /// validated when a sort field is present.
    pub fn parse(sort: Option<&str>, direction: Option<&str>) -> Result<Option<Self>, DomainError> {
        let Some(sort) = sort.filter(|value| !value.is_empty()) else {
            return Ok(None);
        };

        let field = sort.parse()?;
        let direction = direction
            .map(SortDirection::from_str)
            .transpose()?
            .unwrap_or_default();

        Ok(Some(Self { field, direction }))
    }

    /// Stable sort: posts with equal keys keep their relative order in both directions.
    pub fn apply(self, posts: &mut [Post]) {
        posts.sort_by(|left, right| {
            let ordering = self.compare(left, right);
            match self.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    fn compare(self, left: &Post, right: &Post) -> Ordering {
        match self.field {
            PostField::Date => left.sort_date().cmp(&right.sort_date()),
            field => left
                .field(field)
                .to_lowercase()
                .cmp(&right.field(field).to_lowercase()),
        }
    }
}

/// Case-insensitive substring search; a post matches when any term matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostSearch {
    terms: Vec<(PostField, String)>,
}

impl PostSearch {
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
        date: Option<String>,
    ) -> Self {
        let terms = [
            (PostField::Title, title),
            (PostField::Content, content),
            (PostField::Author, author),
            (PostField::Date, date),
        ]
        .into_iter()
        .filter_map(|(field, term)| present(term).map(|term| (field, term.to_lowercase())))
        .collect();

        Self { terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.terms
            .iter()
            .any(|(field, term)| post.field(*field).to_lowercase().contains(term.as_str()))
    }
}
