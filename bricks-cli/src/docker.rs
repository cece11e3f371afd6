//! Container orchestration wrapper
//!
//! Thin subprocess layer over `docker compose` for the platform's service
//! definition. Every operation reduces to boolean success; failures are
//! logged and never panic.

use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;

/// Fixed wait for platform initialization after `up`; there is no readiness
/// poll, the platform takes roughly this long to migrate and boot
const STARTUP_WAIT: Duration = Duration::from_secs(30);

pub struct DockerManager {
    compose_file: PathBuf,
    service: String,
}

impl Default for DockerManager {
    fn default() -> Self {
        Self {
            compose_file: PathBuf::from("docker-compose.yml"),
            service: "formbricks".to_string(),
        }
    }
}

impl DockerManager {
    pub fn new() -> Self {
        Self::default()
    }

    async fn compose(&self, args: &[&str]) -> std::io::Result<std::process::Output> {
        Command::new("docker")
            .arg("compose")
            .arg("-f")
            .arg(&self.compose_file)
            .args(args)
            .output()
            .await
    }

    /// Pull images and start services detached, then wait a fixed interval
    /// for initialization
    pub async fn start(&self) -> bool {
        tracing::info!("pulling latest platform image...");
        if let Err(e) = self.compose(&["pull"]).await {
            // Pull failure is tolerable; up may still work from cache
            tracing::warn!("image pull failed: {e}");
        }

        tracing::info!("starting services...");
        match self.compose(&["up", "-d"]).await {
            Ok(output) if output.status.success() => {
                tracing::info!("waiting for services to be ready...");
                tokio::time::sleep(STARTUP_WAIT).await;
                true
            }
            Ok(output) => {
                tracing::error!(
                    "failed to start services: {}",
                    String::from_utf8_lossy(&output.stderr)
                );
                false
            }
            Err(e) => {
                tracing::error!("docker is not available: {e}");
                false
            }
        }
    }

    /// Stop services, remove volumes, and prune
    pub async fn stop(&self) -> bool {
        match self.compose(&["down", "-v"]).await {
            Ok(output) if output.status.success() => {
                let _ = Command::new("docker")
                    .args(["system", "prune", "-f"])
                    .output()
                    .await;
                true
            }
            Ok(output) => {
                tracing::error!(
                    "failed to stop services: {}",
                    String::from_utf8_lossy(&output.stderr)
                );
                false
            }
            Err(e) => {
                tracing::error!("docker is not available: {e}");
                false
            }
        }
    }

    /// Whether the platform service shows up in `compose ps`
    pub async fn is_running(&self) -> bool {
        match self.compose(&["ps"]).await {
            Ok(output) => String::from_utf8_lossy(&output.stdout).contains(&self.service),
            Err(_) => false,
        }
    }
}
