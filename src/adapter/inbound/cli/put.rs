//! Handler for the `out` command.

use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use tracing::info;

use super::command::OutArgs;
use super::output;
use crate::adapter::inbound::concourse::{OutRequest, VersionResponse};
use crate::application::deployment::{DeployRequest, DeploymentDriver};
use crate::application::template::TemplateRenderer;
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;

/// Execute the out command.
pub async fn execute<R: Read, W: Write>(args: &OutArgs, input: R, out: W) -> Result<()> {
    let request: OutRequest = serde_json::from_reader(input)?;
    let driver = bootstrap::build_driver(&request.source)?;
    run(&driver, &request, &args.sources, out).await
}

/// Render the descriptor found under `sources`, deploy it and write the
/// resulting version.
pub async fn run<W: Write>(
    driver: &DeploymentDriver,
    request: &OutRequest,
    sources: &Path,
    out: W,
) -> Result<()> {
    let params = &request.params;
    if params.app_json.is_empty() {
        return Err(ConfigError::MissingField { field: "app_json" }.into());
    }

    let descriptor = TemplateRenderer::new(sources).render(
        &params.app_json,
        &params.replacements,
        &params.replacement_files,
    )?;

    let version = driver
        .deploy(DeployRequest {
            descriptor,
            timeout: Duration::from_secs(params.time_out),
            restart_if_no_update: params.restart_if_no_update,
        })
        .await?;
    info!(version = %version, "Deployed app");

    output::write_json(out, &VersionResponse::new(version))
}
