//! Command line definition

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use dnsctl_provider::RecordFilter;

/// Manage DNS zones and resource records
#[derive(Parser, Debug)]
#[command(name = "dnsctl", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: <config dir>/dnsctl/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create zone
    Create {
        /// Zone name (example.com)
        zone: String,
    },

    /// Delete zone
    Delete {
        /// Zone name (example.com) or id
        zone: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        really: bool,
    },

    /// List zones, or the records of one zone
    List(ListArgs),

    /// Print zone in BIND format
    Print {
        /// Zone name (example.com) or id
        zone: String,
    },

    /// Import a BIND style zone file
    Import {
        /// Path to the zone file; its first line must be `$ORIGIN <zone>.`
        file: PathBuf,
        /// Don't change anything, show what was parsed
        #[arg(long = "dry-run", alias = "dryRun")]
        dry_run: bool,
    },

    /// Add resource record
    Add {
        /// Zone name (example.com) or id
        zone: String,
        /// Resource record (www)
        record: String,
        /// Record type (A, AAAA, CNAME, MX, NS, PTR, SPF, SRV, TXT)
        #[arg(value_name = "TYPE")]
        record_type: String,
        /// Record data. Only minor validation is done
        data: String,
        /// Time to live
        #[arg(long)]
        ttl: Option<u32>,
    },

    /// Update resource records (bulk/single)
    Edit {
        /// Zone name (example.com) or id
        zone: String,
        /// Resource record (www)
        record: String,
        /// New record data
        #[arg(long)]
        data: Option<String>,
        /// New time to live
        #[arg(long)]
        ttl: Option<u32>,
        /// Modify only the given id
        #[arg(long)]
        id: Option<String>,
    },

    /// Remove resource records
    Remove {
        /// Zone name (example.com) or id
        zone: String,
        /// Resource record (www)
        record: String,
        /// Remove only the given id
        #[arg(long)]
        id: Option<String>,
        /// Skip the confirmation prompt
        #[arg(long)]
        really: bool,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Zone name (example.com) or id; lists all zones when omitted
    pub zone: Option<String>,

    /// Record data, such as an IP address
    #[arg(long, requires = "zone")]
    pub data: Option<String>,

    /// Host record, such as www
    #[arg(long, requires = "zone", value_name = "HOST")]
    pub record: Option<String>,

    /// TTL value in seconds, such as 86400
    #[arg(long, requires = "zone")]
    pub ttl: Option<u32>,

    /// Record type, such as A or CNAME
    #[arg(long = "type", requires = "zone", value_name = "TYPE")]
    pub record_type: Option<String>,
}

impl ListArgs {
    pub fn filter(&self) -> RecordFilter {
        RecordFilter {
            record_type: self.record_type.clone(),
            host: self.record.clone(),
            ttl: self.ttl,
            data: self.data.clone(),
        }
    }
}
