use std::sync::Arc;

use anyhow::Result;
use dnsctl_core::{ServiceContext, Table, ZoneService};

use super::confirm;
use crate::output::CommandOutput;

pub async fn create(ctx: &Arc<ServiceContext>, name: &str) -> Result<CommandOutput> {
    let zone = ZoneService::new(Arc::clone(ctx)).create_zone(name).await?;

    let mut table = Table::new(&["id", "zone", "serial"]);
    table.add_row(vec![zone.id, zone.name, zone.serial.unwrap_or_default()]);
    Ok(CommandOutput::Table(table))
}

/// The zone is resolved before prompting so a typo fails without asking.
pub async fn delete(ctx: &Arc<ServiceContext>, name: &str, really: bool) -> Result<CommandOutput> {
    let zones = ZoneService::new(Arc::clone(ctx));
    let zone_id = zones.resolve_zone_id(name).await?;
    confirm(really, name)?;
    zones.delete_zone(&zone_id).await?;
    Ok(CommandOutput::Nothing)
}

pub async fn list(ctx: &Arc<ServiceContext>) -> Result<CommandOutput> {
    let table = ZoneService::new(Arc::clone(ctx)).list_zones().await?;
    Ok(CommandOutput::Table(table))
}

pub async fn print(ctx: &Arc<ServiceContext>, name: &str) -> Result<CommandOutput> {
    let text = ZoneService::new(Arc::clone(ctx)).dump_zone(name).await?;
    Ok(CommandOutput::Text(text))
}
