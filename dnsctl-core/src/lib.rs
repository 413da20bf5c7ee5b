//! dnsctl Core Library
//!
//! Business logic behind the `dnsctl` command line, independent of how results are shown:
//! - BIND zone file parsing (`zonefile`)
//! - Zone file import (`ImportService`)
//! - Zone and resource record management (`ZoneService`, `RecordService`)
//!
//! Every remote call goes through a [`dnsctl_provider::DnsProvider`] held by the
//! [`ServiceContext`], so the services can be driven by any implementation of the trait.

pub mod error;
pub mod services;
pub mod types;
pub mod utils;
pub mod zonefile;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ImportService, RecordService, ServiceContext, ZoneService};
pub use types::{Alignment, ImportAction, ImportReport, OutcomeRow, Table};
