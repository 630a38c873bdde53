#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use shortlinks::application::services::LinkService;
use shortlinks::domain::context::OpContext;
use shortlinks::domain::entities::Link;
use shortlinks::domain::repositories::LinkRepository;
use shortlinks::infrastructure::persistence::InMemoryLinkRepository;
use shortlinks::routes::router;
use shortlinks::state::AppState;

pub const BASE_PATH: &str = "https://sho.rt";

pub fn create_test_service() -> Arc<LinkService<dyn LinkRepository>> {
    let repo: Arc<dyn LinkRepository> = Arc::new(InMemoryLinkRepository::new());
    Arc::new(LinkService::new(repo, BASE_PATH))
}

pub fn create_test_state() -> AppState {
    AppState::new(create_test_service(), Duration::from_secs(5))
}

pub fn create_test_server(state: AppState) -> TestServer {
    let app = router(state, None).unwrap();
    TestServer::new(app).unwrap()
}

/// Creates `count` links named `link1`, `link2`, ... in id order.
pub async fn seed_links(service: &LinkService<dyn LinkRepository>, count: usize) -> Vec<Link> {
    let ctx = OpContext::new();
    let mut links = Vec::with_capacity(count);

    for i in 1..=count {
        let link = service
            .create(
                &ctx,
                format!("https://example.com/{}", i),
                Some(format!("link{}", i)),
            )
            .await
            .unwrap();
        links.push(link);
    }

    links
}
