//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dnsctl_provider::{
    CreateRecordRequest, DnsProvider, DnsRecord, ProviderError, RecordFilter, Result, Zone,
};
use tokio::sync::RwLock;

use crate::services::ServiceContext;

// ===== MockProvider =====

#[derive(Default)]
struct MockState {
    zones: Vec<Zone>,
    records: Vec<DnsRecord>,
    next_id: u64,
    /// 每次调用的记录（`method:argument`）
    calls: Vec<String>,
    fail_lookups: bool,
    forget_created_zones: bool,
    create_zone_error: Option<ProviderError>,
    /// create_record 时 data 命中则返回此错误
    record_errors: HashMap<String, ProviderError>,
}

impl MockState {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        (1000 + self.next_id).to_string()
    }
}

/// In-memory account that records every call made to it.
pub struct MockProvider {
    state: RwLock<MockState>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MockState::default()),
        }
    }

    /// Add a zone without going through `create_zone`; returns its id.
    pub async fn add_zone(&self, name: &str) -> String {
        let mut state = self.state.write().await;
        let id = state.next_id();
        state.zones.push(Zone {
            id: id.clone(),
            name: name.to_string(),
            serial: Some("2024010101".to_string()),
            update_date: None,
        });
        id
    }

    /// Add a record without going through `create_record`.
    pub async fn seed_record(
        &self,
        zone_id: &str,
        host: &str,
        record_type: &str,
        ttl: u32,
        data: &str,
    ) -> DnsRecord {
        let mut state = self.state.write().await;
        let record = DnsRecord {
            id: state.next_id(),
            domain_id: zone_id.to_string(),
            host: host.to_string(),
            record_type: record_type.to_string(),
            ttl,
            data: data.to_string(),
            mx_priority: None,
        };
        state.records.push(record.clone());
        record
    }

    pub async fn zone_ids(&self, name: &str) -> Vec<String> {
        let state = self.state.read().await;
        state
            .zones
            .iter()
            .filter(|z| z.name == name)
            .map(|z| z.id.clone())
            .collect()
    }

    pub async fn records(&self, zone_id: &str) -> Vec<DnsRecord> {
        let state = self.state.read().await;
        state
            .records
            .iter()
            .filter(|r| r.domain_id == zone_id)
            .cloned()
            .collect()
    }

    pub async fn calls(&self) -> Vec<String> {
        self.state.read().await.calls.clone()
    }

    /// Number of create/edit/delete calls.
    pub async fn mutation_count(&self) -> usize {
        self.state
            .read()
            .await
            .calls
            .iter()
            .filter(|c| {
                ["create_", "edit_", "delete_"]
                    .iter()
                    .any(|prefix| c.starts_with(prefix))
            })
            .count()
    }

    /// Make `find_zone_ids` fail with a network error.
    pub async fn fail_lookups(&self, fail: bool) {
        self.state.write().await.fail_lookups = fail;
    }

    /// Make `create_zone` succeed without storing the zone.
    pub async fn forget_created_zones(&self, forget: bool) {
        self.state.write().await.forget_created_zones = forget;
    }

    pub async fn fail_create_zone(&self, err: Option<ProviderError>) {
        self.state.write().await.create_zone_error = err;
    }

    /// Make `create_record` fail for records carrying `data`.
    pub async fn fail_record_data(&self, data: &str, err: ProviderError) {
        self.state
            .write()
            .await
            .record_errors
            .insert(data.to_string(), err);
    }

    async fn record_call(&self, call: String) {
        self.state.write().await.calls.push(call);
    }
}

#[async_trait]
impl DnsProvider for MockProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn find_zone_ids(&self, name: &str) -> Result<Vec<String>> {
        self.record_call(format!("find_zone_ids:{name}")).await;
        if self.state.read().await.fail_lookups {
            return Err(ProviderError::NetworkError {
                provider: "mock".to_string(),
                detail: "connection refused".to_string(),
            });
        }
        Ok(self.zone_ids(name).await)
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        self.record_call("list_zones".to_string()).await;
        Ok(self.state.read().await.zones.clone())
    }

    async fn create_zone(&self, name: &str, serial: &str) -> Result<Zone> {
        self.record_call(format!("create_zone:{name}")).await;
        let mut state = self.state.write().await;
        if let Some(err) = state.create_zone_error.clone() {
            return Err(err);
        }
        let zone = Zone {
            id: state.next_id(),
            name: name.to_string(),
            serial: Some(serial.to_string()),
            update_date: None,
        };
        if !state.forget_created_zones {
            state.zones.push(zone.clone());
        }
        Ok(zone)
    }

    async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        self.record_call(format!("delete_zone:{zone_id}")).await;
        let mut state = self.state.write().await;
        let before = state.zones.len();
        state.zones.retain(|z| z.id != zone_id);
        if state.zones.len() == before {
            return Err(zone_not_found(zone_id));
        }
        state.records.retain(|r| r.domain_id != zone_id);
        Ok(())
    }

    async fn dump_zone(&self, zone_id: &str) -> Result<String> {
        self.record_call(format!("dump_zone:{zone_id}")).await;
        let state = self.state.read().await;
        let zone = state
            .zones
            .iter()
            .find(|z| z.id == zone_id)
            .ok_or_else(|| zone_not_found(zone_id))?;

        let mut text = format!("$ORIGIN {}.\n", zone.name);
        for r in state.records.iter().filter(|r| r.domain_id == zone_id) {
            text.push_str(&format!("{} {} IN {} {}\n", r.host, r.ttl, r.record_type, r.data));
        }
        Ok(text)
    }

    async fn list_records(&self, zone_id: &str, filter: &RecordFilter) -> Result<Vec<DnsRecord>> {
        self.record_call(format!("list_records:{zone_id}")).await;
        let state = self.state.read().await;
        if !state.zones.iter().any(|z| z.id == zone_id) {
            return Err(zone_not_found(zone_id));
        }
        Ok(state
            .records
            .iter()
            .filter(|r| r.domain_id == zone_id && filter.matches(r))
            .cloned()
            .collect())
    }

    async fn create_record(&self, req: &CreateRecordRequest) -> Result<DnsRecord> {
        self.record_call(format!("create_record:{}", req.host)).await;
        let mut state = self.state.write().await;
        if let Some(err) = state.record_errors.get(&req.data) {
            return Err(err.clone());
        }
        if !state.zones.iter().any(|z| z.id == req.domain_id) {
            return Err(zone_not_found(&req.domain_id));
        }
        let record = DnsRecord {
            id: state.next_id(),
            domain_id: req.domain_id.clone(),
            host: req.host.clone(),
            record_type: req.record_type.clone(),
            ttl: req.ttl.unwrap_or(86400),
            data: req.data.clone(),
            mx_priority: None,
        };
        state.records.push(record.clone());
        Ok(record)
    }

    async fn edit_record(&self, record: &DnsRecord) -> Result<bool> {
        self.record_call(format!("edit_record:{}", record.id)).await;
        let mut state = self.state.write().await;
        match state.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(true)
            }
            None => Err(record_not_found(&record.id)),
        }
    }

    async fn delete_record(&self, record_id: &str) -> Result<()> {
        self.record_call(format!("delete_record:{record_id}")).await;
        let mut state = self.state.write().await;
        let before = state.records.len();
        state.records.retain(|r| r.id != record_id);
        if state.records.len() == before {
            return Err(record_not_found(record_id));
        }
        Ok(())
    }
}

fn zone_not_found(zone_id: &str) -> ProviderError {
    ProviderError::ZoneNotFound {
        provider: "mock".to_string(),
        zone: zone_id.to_string(),
        raw_message: None,
    }
}

fn record_not_found(record_id: &str) -> ProviderError {
    ProviderError::RecordNotFound {
        provider: "mock".to_string(),
        record_id: record_id.to_string(),
        raw_message: None,
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext` 和它背后的 mock provider
pub fn create_test_context() -> (Arc<ServiceContext>, Arc<MockProvider>) {
    let provider = Arc::new(MockProvider::new());
    let ctx = Arc::new(ServiceContext::new(provider.clone()));
    (ctx, provider)
}

/// API 拒绝请求时的典型错误
pub fn test_error(detail: &str) -> ProviderError {
    ProviderError::InvalidParameter {
        provider: "mock".to_string(),
        param: "data".to_string(),
        detail: detail.to_string(),
    }
}
