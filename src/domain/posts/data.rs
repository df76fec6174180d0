pub struct SeedPost {
    pub title: &'static str,
    pub content: &'static str,
    pub author: &'static str,
    pub date: &'static str,
}

pub static SEED_POSTS: [SeedPost; 2] = [
    SeedPost {
        title: "First post",
        content: "This is the first post.",
        author: "Admin",
        date: "2023-06-01",
    },
    SeedPost {
        title: "Second post",
        content: "This is the second post.",
        author: "Editor",
        date: "2023-06-02",
    },
];
