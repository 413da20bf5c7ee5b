//! SoftLayer DnsProvider trait 实现

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

use crate::error::{ProviderError, Result};
use crate::providers::common::{exact_match, normalize_domain_name};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{CreateRecordRequest, DnsRecord, RecordFilter, Zone};

use super::http::object_query;
use super::types::{NewSoftlayerDomain, NewSoftlayerRecord, Parameters};
use super::{SoftlayerDomain, SoftlayerProvider, SoftlayerRecord, ZONE_MASK};

impl SoftlayerProvider {
    /// 将 SoftLayer domain 转换为 Zone
    pub(crate) fn domain_to_zone(domain: SoftlayerDomain) -> Zone {
        let update_date = domain
            .update_date
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Zone {
            id: domain.id.to_string(),
            name: domain.name,
            serial: domain.serial.map(|s| s.to_string()),
            update_date,
        }
    }

    /// 将 SoftLayer 记录转换为 `DnsRecord`（类型统一大写）
    pub(crate) fn sl_record_to_dns_record(record: SoftlayerRecord) -> DnsRecord {
        DnsRecord {
            id: record.id.to_string(),
            domain_id: record.domain_id.to_string(),
            host: record.host,
            record_type: record.record_type.to_uppercase(),
            ttl: record.ttl,
            data: record.data,
            mx_priority: record.mx_priority,
        }
    }

    /// 将 `DnsRecord` 转换回 `editObject` 模板
    pub(crate) fn dns_record_to_sl_record(&self, record: &DnsRecord) -> Result<SoftlayerRecord> {
        Ok(SoftlayerRecord {
            id: self.numeric_id("id", &record.id)?,
            domain_id: self.numeric_id("domainId", &record.domain_id)?,
            host: record.host.clone(),
            record_type: record.record_type.to_lowercase(),
            ttl: record.ttl,
            data: record.data.clone(),
            mx_priority: record.mx_priority,
        })
    }

    /// Object identifiers are integers on the wire.
    fn numeric_id(&self, param: &str, id: &str) -> Result<u64> {
        id.trim()
            .parse::<u64>()
            .map_err(|_| ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: param.to_string(),
                detail: format!("'{id}' is not a numeric identifier"),
            })
    }

    /// `objectFilter` for `getResourceRecords`.
    pub(crate) fn record_object_filter(filter: &RecordFilter) -> Option<Value> {
        if filter.is_empty() {
            return None;
        }

        let mut fields = Map::new();
        if let Some(ref record_type) = filter.record_type {
            fields.insert("type".to_string(), exact_match(&record_type.to_lowercase()));
        }
        if let Some(ref host) = filter.host {
            fields.insert("host".to_string(), exact_match(host));
        }
        if let Some(ttl) = filter.ttl {
            fields.insert("ttl".to_string(), json!({ "operation": ttl }));
        }
        if let Some(ref data) = filter.data {
            fields.insert("data".to_string(), exact_match(data));
        }

        Some(json!({ "resourceRecords": Value::Object(fields) }))
    }
}

#[async_trait]
impl DnsProvider for SoftlayerProvider {
    fn id(&self) -> &'static str {
        "softlayer"
    }

    async fn find_zone_ids(&self, name: &str) -> Result<Vec<String>> {
        let name = normalize_domain_name(name);
        let filter = json!({ "domains": { "name": exact_match(&name) } });
        let query = object_query(Some("mask[id,name]"), Some(&filter));

        let domains: Vec<SoftlayerDomain> = self
            .get("SoftLayer_Account/getDomains", &query, ErrorContext::zone(&name))
            .await?;

        // The filter is case-insensitive; zone names are compared exactly here
        Ok(domains
            .into_iter()
            .filter(|d| d.name.eq_ignore_ascii_case(&name))
            .map(|d| d.id.to_string())
            .collect())
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let query = object_query(Some(ZONE_MASK), None);
        let domains: Vec<SoftlayerDomain> = self
            .get("SoftLayer_Account/getDomains", &query, ErrorContext::default())
            .await?;
        Ok(domains.into_iter().map(Self::domain_to_zone).collect())
    }

    async fn create_zone(&self, name: &str, serial: &str) -> Result<Zone> {
        let name = normalize_domain_name(name);
        let body = Parameters::single(NewSoftlayerDomain {
            name: &name,
            serial,
            resource_records: Vec::new(),
        });

        let domain: SoftlayerDomain = self
            .post(
                "SoftLayer_Dns_Domain/createObject",
                &body,
                ErrorContext::zone(&name),
            )
            .await?;

        log::info!("[softlayer] Created zone {} (id {})", domain.name, domain.id);
        Ok(Self::domain_to_zone(domain))
    }

    async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        let id = self.numeric_id("id", zone_id)?;
        self.delete(&format!("SoftLayer_Dns_Domain/{id}"), ErrorContext::zone(zone_id))
            .await?;
        Ok(())
    }

    async fn dump_zone(&self, zone_id: &str) -> Result<String> {
        let id = self.numeric_id("id", zone_id)?;
        self.get(
            &format!("SoftLayer_Dns_Domain/{id}/getZoneFileContents"),
            "",
            ErrorContext::zone(zone_id),
        )
        .await
    }

    async fn list_records(&self, zone_id: &str, filter: &RecordFilter) -> Result<Vec<DnsRecord>> {
        let id = self.numeric_id("id", zone_id)?;
        let object_filter = Self::record_object_filter(filter);
        let query = object_query(None, object_filter.as_ref());

        let records: Vec<SoftlayerRecord> = self
            .get(
                &format!("SoftLayer_Dns_Domain/{id}/getResourceRecords"),
                &query,
                ErrorContext::zone(zone_id),
            )
            .await?;

        Ok(records
            .into_iter()
            .map(Self::sl_record_to_dns_record)
            .collect())
    }

    async fn create_record(&self, req: &CreateRecordRequest) -> Result<DnsRecord> {
        let domain_id = self.numeric_id("domainId", &req.domain_id)?;
        let body = Parameters::single(NewSoftlayerRecord {
            domain_id,
            host: &req.host,
            record_type: req.record_type.to_lowercase(),
            data: &req.data,
            ttl: req.ttl,
        });

        let context = ErrorContext {
            zone: Some(req.domain_id.clone()),
            param: Some("data".to_string()),
            ..ErrorContext::default()
        };

        let record: SoftlayerRecord = self
            .post("SoftLayer_Dns_Domain_ResourceRecord/createObject", &body, context)
            .await?;

        Ok(Self::sl_record_to_dns_record(record))
    }

    async fn edit_record(&self, record: &DnsRecord) -> Result<bool> {
        let template = self.dns_record_to_sl_record(record)?;
        let body = Parameters::single(template);
        self.put(
            &format!("SoftLayer_Dns_Domain_ResourceRecord/{}/editObject", record.id),
            &body,
            ErrorContext::record(&record.id),
        )
        .await
    }

    async fn delete_record(&self, record_id: &str) -> Result<()> {
        let id = self.numeric_id("id", record_id)?;
        self.delete(
            &format!("SoftLayer_Dns_Domain_ResourceRecord/{id}"),
            ErrorContext::record(record_id),
        )
        .await?;
        Ok(())
    }
}
