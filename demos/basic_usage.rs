//! Basic usage examples for the modrinth-sdk library
//!
//! Run with: `cargo run --example basic_usage`

use modrinth_sdk::utils::truncate_text;
use modrinth_sdk::{ModrinthClient, Result, SearchIndex, SearchQuery};

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Modrinth SDK Basic Usage Examples ===\n");

    let client = ModrinthClient::new()?;

    // Example 1: Server information
    println!("1. Asking the API who it is:");
    let info = client.get_api_server_info().await?;
    println!("   {} {} - {}\n", info.name, info.version, info.documentation);

    // Example 2: Search with facets
    println!("2. Searching for Fabric optimization mods:");
    let query = SearchQuery::new("optimization")
        .facet(["categories:fabric"])
        .facet(["project_type:mod"])
        .index(SearchIndex::Downloads)
        .limit(5);
    let results = client.search(&query).await?;
    for (i, hit) in results.hits.iter().enumerate() {
        println!(
            "   {}. {} ({}) - {} downloads - {}",
            i + 1,
            hit.title,
            hit.slug,
            hit.downloads,
            truncate_text(&hit.description, 50)
        );
    }
    println!("   {} hits in total\n", results.total_hits);

    // Example 3: Project details
    println!("3. Getting details for 'sodium':");
    let project = client.get_project("sodium").await?;
    println!("   Title: {}", project.title);
    println!("   License: {}", project.license.name);
    println!("   Loaders: {}", project.loaders.join(", "));
    println!("   Versions published: {}\n", project.versions.len());

    // Example 4: Filtered versions
    println!("4. Fabric versions of 'sodium' for 1.20.1:");
    let versions = client
        .get_project_versions("sodium", Some(&["fabric"][..]), Some(&["1.20.1"][..]))
        .await?;
    for version in versions.iter().take(3) {
        println!(
            "   - {} ({:?}, published {})",
            version.version_number,
            version.version_type,
            version.date_published.format("%Y-%m-%d")
        );
    }
    println!();

    // Example 5: Dependencies
    println!("5. Dependencies of 'fabric-api':");
    let dependencies = client.get_project_dependencies("fabric-api").await?;
    println!(
        "   {} projects, {} versions",
        dependencies.projects.len(),
        dependencies.versions.len()
    );

    println!("\n=== Examples completed successfully! ===");
    Ok(())
}
