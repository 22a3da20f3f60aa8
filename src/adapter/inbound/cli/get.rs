//! Handler for the `in` command.

use std::io::{Read, Write};

use tracing::{debug, info};

use super::command::InArgs;
use super::output;
use crate::adapter::inbound::concourse::{InRequest, VersionResponse};
use crate::application::deployment::DeploymentDriver;
use crate::error::Result;
use crate::infrastructure::bootstrap;

/// Execute the in command.
pub async fn execute<R: Read, W: Write>(args: &InArgs, input: R, out: W) -> Result<()> {
    debug!(destination = %args.destination.display(), "Fetching app version");
    let request: InRequest = serde_json::from_reader(input)?;
    let driver = bootstrap::build_driver(&request.source)?;
    run(&driver, &request, out).await
}

/// Look up the requested version and echo it back.
pub async fn run<W: Write>(driver: &DeploymentDriver, request: &InRequest, out: W) -> Result<()> {
    let app_id = request.source.app_id()?;
    let reference = request
        .version
        .as_ref()
        .map_or("", |v| v.reference.as_str());

    let version = driver.fetch(app_id, reference).await?;
    info!(app_id = %app_id, version = %version, "Fetched app");

    output::write_json(out, &VersionResponse::new(version))
}
