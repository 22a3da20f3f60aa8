//! Handler for the `check` command.

use std::io::{Read, Write};

use tracing::info;

use super::output;
use crate::adapter::inbound::concourse::{CheckRequest, Version};
use crate::application::deployment::DeploymentDriver;
use crate::error::Result;
use crate::infrastructure::bootstrap;

/// Execute the check command.
pub async fn execute<R: Read, W: Write>(input: R, out: W) -> Result<()> {
    let request: CheckRequest = serde_json::from_reader(input)?;
    let driver = bootstrap::build_driver(&request.source)?;
    run(&driver, &request, out).await
}

/// Resolve versions newer than the request's and write them oldest first.
pub async fn run<W: Write>(driver: &DeploymentDriver, request: &CheckRequest, out: W) -> Result<()> {
    let app_id = request.source.app_id()?;
    let reference = request
        .version
        .as_ref()
        .map_or("", |v| v.reference.as_str());

    let versions = driver.check(app_id, reference).await?;
    info!(app_id = %app_id, count = versions.len(), "Found versions");

    let response: Vec<Version> = versions.into_iter().map(Version::new).collect();
    output::write_json(out, &response)
}
