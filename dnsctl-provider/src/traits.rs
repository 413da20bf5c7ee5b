use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{CreateRecordRequest, DnsRecord, RecordFilter, Zone};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（例如 `SoftLayer_Exception_ObjectNotFound`）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
    /// HTTP 状态码
    pub status: u16,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
            status,
        }
    }

    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            status,
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时说明请求针对的对象
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录 ID（用于 `RecordNotFound`）
    pub record_id: Option<String>,
    /// Zone 名称或 ID（用于 `ZoneNotFound`）
    pub zone: Option<String>,
    /// 请求参数名（用于 `InvalidParameter`）
    pub param: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone: impl Into<String>) -> Self {
        Self {
            zone: Some(zone.into()),
            ..Self::default()
        }
    }

    pub fn record(record_id: impl Into<String>) -> Self {
        Self {
            record_id: Some(record_id.into()),
            ..Self::default()
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Remote DNS account API.
///
/// Every method is one blocking round-trip from the caller's point of view; callers
/// await each call before issuing the next.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Identifiers of every zone whose name equals `name` exactly.
    ///
    /// An empty vector means the zone does not exist on the account.
    async fn find_zone_ids(&self, name: &str) -> Result<Vec<String>>;

    /// All zones on the account.
    async fn list_zones(&self) -> Result<Vec<Zone>>;

    /// Create an empty zone with the given SOA serial.
    async fn create_zone(&self, name: &str, serial: &str) -> Result<Zone>;

    /// Delete a zone and all of its records.
    async fn delete_zone(&self, zone_id: &str) -> Result<()>;

    /// The zone rendered as BIND zone-file text.
    async fn dump_zone(&self, zone_id: &str) -> Result<String>;

    /// Records of a zone, restricted by `filter`.
    async fn list_records(&self, zone_id: &str, filter: &RecordFilter) -> Result<Vec<DnsRecord>>;

    /// Create one resource record.
    async fn create_record(&self, req: &CreateRecordRequest) -> Result<DnsRecord>;

    /// Replace an existing record (matched by `record.id`) with the given values.
    async fn edit_record(&self, record: &DnsRecord) -> Result<bool>;

    /// Delete one resource record.
    async fn delete_record(&self, record_id: &str) -> Result<()>;
}
