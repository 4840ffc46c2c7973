//! Example of using a custom-configured client
//!
//! Run with: `cargo run --example custom_client`

use modrinth_sdk::request::{ApiRequest, ENDPOINT_PROJECT};
use modrinth_sdk::{ApiEnvironment, ModrinthClient, ModrinthServer, Project, Result};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Custom Client Configuration Example ===\n");

    example_staging().await?;
    example_error_handling().await?;
    example_raw_request().await?;
    example_concurrent_operations().await?;

    println!("\n=== All custom client examples completed! ===");
    Ok(())
}

async fn example_staging() -> Result<()> {
    println!("1. Client targeting the staging deployment:");

    let client = ModrinthClient::builder()
        .environment(ApiEnvironment::Staging)
        .timeout(Duration::from_secs(5))
        .user_agent("modrinth-sdk-demos/1.0")
        .build()?;

    match client.get_api_server_info().await {
        Ok(info) => println!("   ✓ {} answered: {} {}", client.server(), info.name, info.version),
        Err(e) => println!("   ✗ {} failed: {}", client.server(), e.user_message()),
    }

    println!();
    Ok(())
}

async fn example_error_handling() -> Result<()> {
    println!("2. Error handling:");

    let client = ModrinthClient::new()?;

    for slug in ["sodium", "this-project-definitely-does-not-exist-12345"] {
        match client.get_project(slug).await {
            Ok(project) => println!("   ✓ Found: {} ({})", project.title, project.id),
            Err(e) => match e.status_code() {
                Some(404) => println!("   ✗ Not found: {}", slug),
                Some(code) => println!("   ✗ HTTP error {}: {}", code, e.user_message()),
                None if e.is_recoverable() => println!("   ⟲ Temporary failure: {}", e),
                None => println!("   ✗ Error: {}", e.user_message()),
            },
        }
    }

    println!();
    Ok(())
}

async fn example_raw_request() -> Result<()> {
    println!("3. Issuing a request through the generic dispatcher:");

    let server = ModrinthServer::new(ApiEnvironment::Production);
    let client = ModrinthClient::builder().server(server).build()?;

    let request = ApiRequest::get(ENDPOINT_PROJECT)
        .path("lithium")
        .timeout(Duration::from_secs(3));
    println!("   GET {}", request.url(client.server()));

    let project: Project = client.call_api(&request).await?;
    println!("   ✓ {} has {} followers", project.title, project.followers);

    println!();
    Ok(())
}

async fn example_concurrent_operations() -> Result<()> {
    println!("4. Concurrent lookups sharing one client:");

    let client = ModrinthClient::new()?;
    let mut tasks = Vec::new();

    for slug in ["sodium", "lithium", "iris", "fabric-api", "modmenu"] {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            let start = std::time::Instant::now();
            let result = client.get_project(slug).await;
            (slug, result, start.elapsed())
        }));
    }

    for task in tasks {
        match task.await {
            Ok((slug, Ok(project), duration)) => {
                println!("   ✓ {} - {} downloads ({:.2?})", slug, project.downloads, duration)
            }
            Ok((slug, Err(e), duration)) => {
                println!("   ✗ {} - failed: {} ({:.2?})", slug, e, duration)
            }
            Err(e) => println!("   ✗ Task failed: {}", e),
        }
    }

    Ok(())
}
