//! Use Case Tests
//!
//! Pagination behavior against an in-memory repository that honors the
//! same ordering and cursor contract as the Postgres implementation.

use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use kernel::id::AccountId;
use kernel::page::PageRequest;

use crate::application::{CreatePostInput, CreatePostUseCase, ListPostsUseCase};
use crate::domain::entity::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostsError, PostsResult};

#[derive(Default)]
struct FakePostRepository {
    posts: Mutex<Vec<Post>>,
}

impl PostRepository for FakePostRepository {
    async fn create(&self, post: &Post) -> PostsResult<()> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn list(&self, page: &PageRequest) -> PostsResult<Vec<Post>> {
        let mut posts = self.posts.lock().unwrap().clone();

        // Same ordering contract as the SQL implementation
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.post_id.as_uuid().cmp(a.post_id.as_uuid()))
        });

        let rows = posts
            .into_iter()
            .filter(|p| match page.cursor() {
                Some(c) => (p.created_at, *p.post_id.as_uuid()) < (c.value, c.key),
                None => true,
            })
            .take(page.fetch_limit() as usize)
            .collect();

        Ok(rows)
    }
}

fn seeded_repo(count: usize) -> Arc<FakePostRepository> {
    let repo = FakePostRepository::default();
    let author = AccountId::new();

    let posts: Vec<Post> = (0..count)
        .map(|i| {
            let mut post = Post::new(
                author,
                format!("Post {}", i),
                "Some body text".to_string(),
            )
            .unwrap();
            post.created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, i as u32, 0).unwrap();
            post.updated_at = post.created_at;
            post
        })
        .collect();

    repo.posts.lock().unwrap().extend(posts);
    Arc::new(repo)
}

#[tokio::test]
async fn test_create_then_list_newest_first() {
    let repo = Arc::new(FakePostRepository::default());
    let author = AccountId::new();

    let create = CreatePostUseCase::new(repo.clone());
    create
        .execute(CreatePostInput {
            author_id: author,
            title: "First".to_string(),
            body: "body".to_string(),
        })
        .await
        .unwrap();
    let second = create
        .execute(CreatePostInput {
            author_id: author,
            title: "Second".to_string(),
            body: "body".to_string(),
        })
        .await
        .unwrap();

    let page = ListPostsUseCase::new(repo)
        .execute(PageRequest::first_page())
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].post_id, second.post_id);
    assert!(page.next.is_none());
}

#[tokio::test]
async fn test_create_rejects_invalid_content() {
    let repo = Arc::new(FakePostRepository::default());

    let result = CreatePostUseCase::new(repo)
        .execute(CreatePostInput {
            author_id: AccountId::new(),
            title: "  ".to_string(),
            body: "body".to_string(),
        })
        .await;

    assert!(matches!(result, Err(PostsError::Validation(_))));
}

#[tokio::test]
async fn test_pagination_walks_whole_set_without_overlap() {
    let repo = seeded_repo(7);
    let list = ListPostsUseCase::new(repo);

    let mut seen = Vec::new();
    let mut cursor = None;

    loop {
        let page = list
            .execute(PageRequest::new(Some(3), cursor).unwrap())
            .await
            .unwrap();
        seen.extend(page.items.iter().map(|p| *p.post_id.as_uuid()));

        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    assert_eq!(seen.len(), 7);
    let mut unique = seen.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 7, "pages overlapped or skipped rows");
}

#[tokio::test]
async fn test_pagination_with_timestamp_ties() {
    // All rows share one timestamp; only the id tie-break keeps the walk
    // stable.
    let repo = FakePostRepository::default();
    let author = AccountId::new();
    let stamp = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    for i in 0..5 {
        let mut post = Post::new(author, format!("Tied {}", i), "body".to_string()).unwrap();
        post.created_at = stamp;
        post.updated_at = stamp;
        repo.posts.lock().unwrap().push(post);
    }

    let list = ListPostsUseCase::new(Arc::new(repo));

    let first = list
        .execute(PageRequest::new(Some(2), None).unwrap())
        .await
        .unwrap();
    assert_eq!(first.items.len(), 2);
    let second = list
        .execute(PageRequest::new(Some(2), first.next).unwrap())
        .await
        .unwrap();
    assert_eq!(second.items.len(), 2);
    let third = list
        .execute(PageRequest::new(Some(2), second.next).unwrap())
        .await
        .unwrap();
    assert_eq!(third.items.len(), 1);
    assert!(third.next.is_none());

    let mut seen: Vec<_> = first
        .items
        .iter()
        .chain(&second.items)
        .chain(&third.items)
        .map(|p| *p.post_id.as_uuid())
        .collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 5);
}

#[tokio::test]
async fn test_exact_page_boundary_emits_no_cursor() {
    let repo = seeded_repo(4);
    let list = ListPostsUseCase::new(repo);

    let page = list
        .execute(PageRequest::new(Some(4), None).unwrap())
        .await
        .unwrap();

    assert_eq!(page.items.len(), 4);
    assert!(page.next.is_none());
}
