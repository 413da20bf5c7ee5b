//! 类型定义模块

mod import;
mod table;

pub use import::{ImportAction, ImportReport, OutcomeRow};
pub use table::{Alignment, Table};

// Re-export provider 库的公共类型
pub use dnsctl_provider::{CreateRecordRequest, DnsRecord, RecordFilter, Zone};
