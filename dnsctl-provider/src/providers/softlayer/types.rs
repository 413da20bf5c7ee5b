//! SoftLayer API 类型定义

use serde::{Deserialize, Serialize};

/// Error body returned with every non-2xx response.
#[derive(Debug, Deserialize)]
pub struct SoftlayerErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// `SoftLayer_Dns_Domain`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftlayerDomain {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub serial: Option<u64>,
    #[serde(default)]
    pub update_date: Option<String>,
}

/// `SoftLayer_Dns_Domain_ResourceRecord`, both as response and as `editObject` template.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftlayerRecord {
    pub id: u64,
    pub domain_id: u64,
    pub host: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mx_priority: Option<u16>,
}

/// `createObject` template for a resource record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSoftlayerRecord<'a> {
    pub domain_id: u64,
    pub host: &'a str,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// `createObject` template for a zone.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSoftlayerDomain<'a> {
    pub name: &'a str,
    pub serial: &'a str,
    pub resource_records: Vec<NewSoftlayerRecord<'a>>,
}

/// Every service method takes its arguments wrapped in `{"parameters": [...]}`.
#[derive(Debug, Serialize)]
pub struct Parameters<T: Serialize> {
    pub parameters: [T; 1],
}

impl<T: Serialize> Parameters<T> {
    pub fn single(value: T) -> Self {
        Self { parameters: [value] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_from_account_listing() {
        let json = r#"{"id":1234,"name":"example.com","serial":2024010101,"updateDate":"2024-01-01T10:00:00-06:00"}"#;
        let domain: SoftlayerDomain = serde_json::from_str(json).unwrap();
        assert_eq!(domain.id, 1234);
        assert_eq!(domain.serial, Some(2_024_010_101));
        assert!(domain.update_date.is_some());
    }

    #[test]
    fn record_with_mx_priority() {
        let json = r#"{"id":9,"domainId":1234,"host":"@","type":"mx","ttl":86400,"data":"mail.example.com.","mxPriority":10}"#;
        let record: SoftlayerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.record_type, "mx");
        assert_eq!(record.mx_priority, Some(10));
    }

    #[test]
    fn parameters_wrap_single_argument() {
        let body = Parameters::single(NewSoftlayerRecord {
            domain_id: 1234,
            host: "www",
            record_type: "a".to_string(),
            data: "10.0.0.1",
            ttl: Some(86400),
        });
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["parameters"][0]["domainId"], 1234);
        assert_eq!(json["parameters"][0]["type"], "a");
        assert_eq!(json["parameters"][0]["ttl"], 86400);
    }

    #[test]
    fn error_body_without_code() {
        let body: SoftlayerErrorBody = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(body.error, "boom");
        assert!(body.code.is_none());
    }
}
