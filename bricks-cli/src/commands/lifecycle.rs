//! Platform lifecycle commands: up, down, status

use crate::docker::DockerManager;

const PLATFORM_URL: &str = "http://localhost:3000";

pub async fn up() -> anyhow::Result<()> {
    tracing::info!("starting platform locally...");
    let docker = DockerManager::new();

    if docker.is_running().await {
        println!("Platform is already running");
        println!("Access at: {PLATFORM_URL}");
        return Ok(());
    }

    if docker.start().await {
        println!("✓ Platform is now running at {PLATFORM_URL}");
        println!();
        println!("Setup instructions:");
        println!("1. Visit {PLATFORM_URL}");
        println!("2. Complete the setup wizard and create your account");
        println!("3. Go to Settings -> API Keys");
        println!("4. Create a new API key with 'management' scope");
        println!("5. Copy the API key to your .env file as FORMBRICKS_API_KEY");
        println!();
        println!("Note: the first setup may take a minute. Check Docker logs if needed.");
    } else {
        println!("✗ Failed to start platform");
        println!("Make sure:");
        println!("1. Docker is running");
        println!("2. Ports 3000 and 5432 are available");
        println!("3. You have sufficient system resources");
    }
    Ok(())
}

pub async fn down() -> anyhow::Result<()> {
    tracing::info!("stopping platform...");
    let docker = DockerManager::new();

    if docker.stop().await {
        println!("✓ Platform stopped and cleaned up");
    } else {
        println!("✗ Failed to stop services");
    }
    Ok(())
}

pub async fn status() -> anyhow::Result<()> {
    let docker = DockerManager::new();
    if docker.is_running().await {
        println!("✓ Platform is running");
        println!("  Access at: {PLATFORM_URL}");
    } else {
        println!("Platform is not running");
        println!("  Start with: bricks up");
    }
    Ok(())
}
