//! Download the newest file of a project into the current directory
//!
//! Run with: `cargo run --example download_version -- <project> [loader] [game-version]`

use modrinth_sdk::logging::init_logging;
use modrinth_sdk::utils::safe_file_name;
use modrinth_sdk::{HashAlgorithm, ModrinthClient, ModrinthError, Result, SdkConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = SdkConfig::load()?;
    init_logging(&config.logging)?;

    let mut args = std::env::args().skip(1);
    let project = args.next().unwrap_or_else(|| "sodium".to_string());
    let loader = args.next();
    let game_version = args.next();

    let client = ModrinthClient::from_config(&config)?;

    let loaders: Vec<&str> = loader.iter().map(String::as_str).collect();
    let game_versions: Vec<&str> = game_version.iter().map(String::as_str).collect();
    let versions = client
        .get_project_versions(
            &project,
            (!loaders.is_empty()).then_some(loaders.as_slice()),
            (!game_versions.is_empty()).then_some(game_versions.as_slice()),
        )
        .await?;

    let version = versions.first().ok_or_else(|| {
        ModrinthError::validation(format!("'{}' has no matching versions", project))
    })?;
    let file = version.primary_file().ok_or_else(|| {
        ModrinthError::validation(format!("version {} has no files", version.version_number))
    })?;

    println!(
        "Downloading {} {} ({} bytes)",
        project, version.version_number, file.size
    );
    let destination = safe_file_name(&file.filename).ok_or_else(|| {
        ModrinthError::validation(format!("unusable file name '{}'", file.filename))
    })?;
    let written = client.download_project_version(file, destination).await?;
    println!("Wrote {} bytes to {}", written, destination);

    // The API can map the file back to its version through its hash
    let found = client
        .get_project_version_from_hash(file.hashes.get(HashAlgorithm::Sha1), HashAlgorithm::Sha1)
        .await?;
    println!("Hash lookup resolved to version {}", found.id);

    Ok(())
}
