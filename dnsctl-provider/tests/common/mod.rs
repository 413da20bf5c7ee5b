//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use dnsctl_provider::{
    CreateRecordRequest, DnsProvider, DnsRecord, ProviderCredentials, RecordFilter,
    create_provider,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got Err({:?})", res.as_ref().err());
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {:?}",
            format_args!($($msg)+),
            res.as_ref().err()
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装 Provider 和测试 zone
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub zone: String,
    pub zone_id: Option<String>,
}

impl TestContext {
    /// 从 `SL_USERNAME` / `SL_API_KEY` / `TEST_ZONE` 创建测试上下文
    pub fn softlayer() -> Option<Self> {
        let username = env::var("SL_USERNAME").ok()?;
        let api_key = env::var("SL_API_KEY").ok()?;
        let endpoint_url = env::var("SL_ENDPOINT_URL").ok();
        let zone = env::var("TEST_ZONE").ok()?;

        let credentials = ProviderCredentials::Softlayer {
            username,
            api_key,
            endpoint_url,
        };
        let provider = create_provider(credentials).ok()?;

        Some(Self {
            provider,
            zone,
            zone_id: None,
        })
    }

    /// 查找测试 zone 的 ID（必须唯一）
    pub async fn find_zone_id(&mut self) -> Option<String> {
        if self.zone_id.is_some() {
            return self.zone_id.clone();
        }

        let ids = self.provider.find_zone_ids(&self.zone).await.ok()?;
        match ids.as_slice() {
            [id] => {
                self.zone_id = Some(id.clone());
                Some(id.clone())
            }
            _ => None,
        }
    }

    /// 创建测试记录并返回创建的记录
    pub async fn create_test_record(&self, zone_id: &str) -> Option<DnsRecord> {
        let request = CreateRecordRequest {
            domain_id: zone_id.to_string(),
            host: generate_test_record_name(),
            record_type: "TXT".to_string(),
            data: "integration-test".to_string(),
            ttl: Some(600),
        };

        self.provider.create_record(&request).await.ok()
    }

    /// 清理测试记录
    pub async fn cleanup_record(&self, record_id: &str) {
        let _ = self.provider.delete_record(record_id).await;
    }

    /// 查找并清理所有测试记录（以 _test- 开头的记录）
    pub async fn cleanup_all_test_records(&self, zone_id: &str) {
        let filter = RecordFilter {
            record_type: Some("TXT".to_string()),
            ..RecordFilter::default()
        };

        if let Ok(records) = self.provider.list_records(zone_id, &filter).await {
            for record in records {
                if record.host.starts_with("_test-") {
                    let _ = self.provider.delete_record(&record.id).await;
                }
            }
        }
    }
}
