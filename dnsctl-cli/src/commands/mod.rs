//! Command dispatch

mod import;
mod record;
mod zone;

use std::sync::Arc;

use anyhow::{Context, Result};
use dnsctl_core::ServiceContext;

use crate::cli::{Cli, Command};
use crate::config::CliConfig;
use crate::output::{self, CommandOutput};

/// Run the parsed command line and print its output.
///
/// A dry-run import is answered offline; every other command needs credentials.
pub async fn run(cli: &Cli) -> Result<()> {
    let output = match &cli.command {
        Command::Import {
            file,
            dry_run: true,
        } => import::preview(file).await?,
        command => dispatch(&connect(cli)?, command).await?,
    };
    output::print(&output, cli.format)
}

fn connect(cli: &Cli) -> Result<Arc<ServiceContext>> {
    let config = CliConfig::load(cli.config.as_deref())?.with_env();
    let credentials = config
        .credentials()
        .context("No API credentials configured (set SL_USERNAME and SL_API_KEY or use --config)")?;
    let provider = dnsctl_provider::create_provider(credentials)?;
    tracing::debug!("Connected with provider {}", provider.id());
    Ok(Arc::new(ServiceContext::new(provider)))
}

async fn dispatch(ctx: &Arc<ServiceContext>, command: &Command) -> Result<CommandOutput> {
    match command {
        Command::Create { zone } => zone::create(ctx, zone).await,
        Command::Delete { zone, really } => zone::delete(ctx, zone, *really).await,
        Command::List(args) => match &args.zone {
            Some(zone) => record::list(ctx, zone, &args.filter()).await,
            None => zone::list(ctx).await,
        },
        Command::Print { zone } => zone::print(ctx, zone).await,
        Command::Import { file, .. } => import::run(ctx, file).await,
        Command::Add {
            zone,
            record,
            record_type,
            data,
            ttl,
        } => record::add(ctx, zone, record, record_type, data, *ttl).await,
        Command::Edit {
            zone,
            record,
            data,
            ttl,
            id,
        } => record::edit(ctx, zone, record, data.as_deref(), *ttl, id.as_deref()).await,
        Command::Remove {
            zone,
            record,
            id,
            really,
        } => record::remove(ctx, zone, record, id.as_deref(), *really).await,
    }
}

/// Ask for `confirmation` unless `really` was given.
fn confirm(really: bool, confirmation: &str) -> Result<()> {
    if really || crate::prompt::no_going_back(confirmation)? {
        Ok(())
    } else {
        Err(crate::prompt::Aborted.into())
    }
}
