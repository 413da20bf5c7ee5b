//! SoftLayer Provider 集成测试
//!
//! 运行方式:
//! ```bash
//! SL_USERNAME=xxx SL_API_KEY=xxx TEST_ZONE=example.com \
//!     cargo test -p dnsctl-provider --test softlayer_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::TestContext;
use dnsctl_provider::{ProviderCredentials, ProviderError, RecordFilter, create_provider};

// ============ 基础测试 ============

/// 工厂创建不发请求，无需凭证即可运行
#[test]
fn test_softlayer_provider_from_factory() {
    let provider = require_ok!(create_provider(ProviderCredentials::Softlayer {
        username: "SL000000".to_string(),
        api_key: "offline-key".to_string(),
        endpoint_url: Some("http://127.0.0.1:9/rest/v3.1".to_string()),
    }));
    assert_eq!(provider.id(), "softlayer");
}

#[tokio::test]
#[ignore]
async fn test_softlayer_invalid_credentials() {
    skip_if_no_credentials!("SL_USERNAME");

    let provider = require_ok!(create_provider(ProviderCredentials::Softlayer {
        username: std::env::var("SL_USERNAME").unwrap_or_default(),
        api_key: "definitely-not-a-valid-key".to_string(),
        endpoint_url: None,
    }));

    let result = provider.list_zones().await;
    assert!(
        matches!(result, Err(ProviderError::InvalidCredentials { .. })),
        "错误的 API key 应返回 InvalidCredentials: {result:?}"
    );
}

#[tokio::test]
#[ignore]
async fn test_softlayer_list_zones() {
    skip_if_no_credentials!("SL_USERNAME", "SL_API_KEY", "TEST_ZONE");

    let ctx = TestContext::softlayer().expect("创建测试上下文失败");
    let zones = require_ok!(ctx.provider.list_zones().await, "list_zones 调用失败");

    assert!(
        zones.iter().any(|z| z.name == ctx.zone),
        "zone 列表中应包含 {}",
        ctx.zone
    );
    println!("✓ list_zones 测试通过，共 {} 个 zone", zones.len());
}

#[tokio::test]
#[ignore]
async fn test_softlayer_find_missing_zone() {
    skip_if_no_credentials!("SL_USERNAME", "SL_API_KEY", "TEST_ZONE");

    let ctx = TestContext::softlayer().expect("创建测试上下文失败");
    let ids = require_ok!(
        ctx.provider
            .find_zone_ids("no-such-zone-dnsctl-test.invalid")
            .await
    );
    assert!(ids.is_empty(), "不存在的 zone 不应返回 ID: {ids:?}");
}

#[tokio::test]
#[ignore]
async fn test_softlayer_dump_zone() {
    skip_if_no_credentials!("SL_USERNAME", "SL_API_KEY", "TEST_ZONE");

    let mut ctx = TestContext::softlayer().expect("创建测试上下文失败");
    let zone_id = ctx.find_zone_id().await.expect("找不到测试 zone");

    let text = require_ok!(ctx.provider.dump_zone(&zone_id).await);
    assert!(text.contains("SOA"), "zone 文件应包含 SOA 记录");
}

// ============ 记录 CRUD 测试 ============

#[tokio::test]
#[ignore]
async fn test_softlayer_record_lifecycle() {
    skip_if_no_credentials!("SL_USERNAME", "SL_API_KEY", "TEST_ZONE");

    let mut ctx = TestContext::softlayer().expect("创建测试上下文失败");
    let zone_id = ctx.find_zone_id().await.expect("找不到测试 zone");
    ctx.cleanup_all_test_records(&zone_id).await;

    // 1. 创建
    let created = ctx
        .create_test_record(&zone_id)
        .await
        .expect("创建记录失败");
    assert_eq!(created.record_type, "TXT");
    assert_eq!(created.ttl, 600);

    // 2. 按 host 查询
    let found = ctx
        .provider
        .list_records(&zone_id, &RecordFilter::by_host(&created.host))
        .await;
    let found = match found {
        Ok(records) => records,
        Err(e) => {
            ctx.cleanup_record(&created.id).await;
            panic!("list_records 调用失败: {e}");
        }
    };
    assert!(found.iter().any(|r| r.id == created.id), "应能查到新记录");

    // 3. 修改
    let mut edited = created.clone();
    edited.data = "integration-test-edited".to_string();
    edited.ttl = 900;
    let result = ctx.provider.edit_record(&edited).await;
    assert!(matches!(result, Ok(true)), "edit_record 调用失败: {result:?}");

    // 4. 删除
    let result = ctx.provider.delete_record(&created.id).await;
    assert!(result.is_ok(), "delete_record 调用失败: {result:?}");

    // 5. 再次删除应返回 RecordNotFound
    let result = ctx.provider.delete_record(&created.id).await;
    assert!(
        matches!(result, Err(ProviderError::RecordNotFound { .. })),
        "重复删除应返回 RecordNotFound: {result:?}"
    );

    println!("✓ 记录生命周期测试通过");
}
