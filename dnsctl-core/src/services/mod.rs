//! 业务逻辑服务层

mod import_service;
mod record_service;
mod zone_service;

pub use import_service::ImportService;
pub use record_service::{RecordService, DEFAULT_RECORD_TTL};
pub use zone_service::ZoneService;

use std::sync::Arc;

use dnsctl_provider::{DnsProvider, ProviderError};

use crate::error::CoreError;

/// 服务上下文 - 持有所有依赖
///
/// 前端创建此上下文并注入 provider 实现（CLI 注入 SoftLayer 客户端，测试注入 mock）。
pub struct ServiceContext {
    provider: Arc<dyn DnsProvider>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(provider: Arc<dyn DnsProvider>) -> Self {
        Self { provider }
    }

    /// 获取 Provider 实例
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn DnsProvider> {
        &self.provider
    }

    /// 记录 Provider 错误并转换为 `CoreError`
    pub fn handle_provider_error(&self, operation: &str, err: ProviderError) -> CoreError {
        if err.is_expected() {
            log::warn!("[{}] {operation} failed: {err}", self.provider.id());
        } else {
            log::error!("[{}] {operation} failed: {err}", self.provider.id());
        }
        CoreError::Provider(err)
    }
}
