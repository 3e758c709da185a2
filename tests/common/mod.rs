#![allow(dead_code)]

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

use course_catalog::config::AppConfig;
use course_catalog::database::models::{Instructor, NewCourse, NewInstructor};
use course_catalog::database::{CourseRepository, InstructorRepository, MemoryStore};
use course_catalog::AppState;

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub store: MemoryStore,
    /// Instructor that owns every seeded course
    pub instructor: Instructor,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// Same seed data as src/testing/mod.rs, which integration tests cannot see;
// keep the two lists in sync.
pub fn course_entity_list(instructor: &Instructor) -> Vec<NewCourse> {
    vec![
        NewCourse::for_instructor("Kotlin & SpringBoot", "Development", instructor),
        NewCourse::for_instructor("SpringBoot Services & Docker", "Development", instructor),
        NewCourse::for_instructor("Micro Services Architecture", "Design", instructor),
    ]
}

pub fn instructor_entity_list() -> Vec<NewInstructor> {
    vec![
        NewInstructor::new("Ofir Nahshoni"),
        NewInstructor::new("Ofir the First"),
        NewInstructor::new("Ofir Nahshoni"),
        NewInstructor::new("Ofifir"),
    ]
}

/// Start the router in-process on a free port, backed by `state`
pub async fn serve(state: AppState) -> Result<(u16, String)> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    let app = course_catalog::app(state, &AppConfig::development());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    wait_ready(&base_url, Duration::from_secs(10)).await?;
    Ok((port, base_url))
}

async fn wait_ready(base_url: &str, timeout: Duration) -> Result<()> {
    let client = reqwest::Client::new();
    let deadline = Instant::now() + timeout;
    loop {
        if Instant::now() > deadline {
            break;
        }
        if let Ok(resp) = client.get(format!("{}/health", base_url)).send().await {
            if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    anyhow::bail!("server did not become ready on {} within {:?}", base_url, timeout)
}

/// Server over an in-memory store holding four instructors and three
/// courses taught by the first of them
pub async fn seeded_server() -> Result<TestServer> {
    let store = MemoryStore::new();

    let mut instructors = Vec::new();
    for instructor in instructor_entity_list() {
        instructors.push(InstructorRepository::insert(&store, &instructor).await?);
    }
    let instructor = instructors.remove(0);
    for course in course_entity_list(&instructor) {
        CourseRepository::insert(&store, &course).await?;
    }

    let (port, base_url) = serve(AppState::with_store(store.clone())).await?;
    Ok(TestServer {
        port,
        base_url,
        store,
        instructor,
    })
}
