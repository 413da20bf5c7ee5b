use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use dnsctl_core::{ImportService, ServiceContext};

use crate::output::CommandOutput;

pub async fn run(ctx: &Arc<ServiceContext>, file: &Path) -> Result<CommandOutput> {
    let report = ImportService::new(Arc::clone(ctx))
        .import_zone_file(file, false)
        .await?;
    Ok(CommandOutput::Report(report))
}

/// Dry run: parse and report without connecting.
pub async fn preview(file: &Path) -> Result<CommandOutput> {
    let report = ImportService::preview_zone_file(file).await?;
    Ok(CommandOutput::Report(report))
}
