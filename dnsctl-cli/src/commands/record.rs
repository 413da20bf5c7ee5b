use std::sync::Arc;

use anyhow::Result;
use dnsctl_core::{Alignment, RecordService, ServiceContext, Table};
use dnsctl_provider::{DnsRecord, RecordFilter};

use super::confirm;
use crate::output::CommandOutput;

pub async fn list(
    ctx: &Arc<ServiceContext>,
    zone: &str,
    filter: &RecordFilter,
) -> Result<CommandOutput> {
    let table = RecordService::new(Arc::clone(ctx))
        .list_records(zone, filter)
        .await?;
    Ok(CommandOutput::Table(table))
}

pub async fn add(
    ctx: &Arc<ServiceContext>,
    zone: &str,
    host: &str,
    record_type: &str,
    data: &str,
    ttl: Option<u32>,
) -> Result<CommandOutput> {
    let record = RecordService::new(Arc::clone(ctx))
        .add_record(zone, host, record_type, data, ttl)
        .await?;
    Ok(CommandOutput::Table(record_table(vec![record])))
}

pub async fn edit(
    ctx: &Arc<ServiceContext>,
    zone: &str,
    host: &str,
    data: Option<&str>,
    ttl: Option<u32>,
    id: Option<&str>,
) -> Result<CommandOutput> {
    let edited = RecordService::new(Arc::clone(ctx))
        .edit_records(zone, host, data, ttl, id)
        .await?;
    if edited.is_empty() {
        tracing::warn!("No records named '{host}' were changed");
    }
    Ok(CommandOutput::Table(record_table(edited)))
}

pub async fn remove(
    ctx: &Arc<ServiceContext>,
    zone: &str,
    host: &str,
    id: Option<&str>,
    really: bool,
) -> Result<CommandOutput> {
    let records = RecordService::new(Arc::clone(ctx));
    let ids = records.removal_targets(zone, host, id).await?;
    if ids.is_empty() {
        tracing::warn!("No records named '{host}' in {zone}");
        return Ok(CommandOutput::Nothing);
    }

    confirm(really, "yes")?;
    let deleted = records.delete_records(&ids).await?;

    let mut table = Table::new(&["record"]);
    for id in deleted {
        table.add_row(vec![id]);
    }
    Ok(CommandOutput::Table(table))
}

fn record_table(records: Vec<DnsRecord>) -> Table {
    let mut table = Table::new(&["id", "record", "type", "ttl", "value"])
        .with_align("record", Alignment::Right);
    for record in records {
        table.add_row(vec![
            record.id,
            record.host,
            record.record_type,
            record.ttl.to_string(),
            record.data,
        ]);
    }
    table
}
