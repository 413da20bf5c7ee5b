//! SoftLayer 错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::SoftlayerProvider;

/// Maps the exception class named in the `code` field of error bodies.
impl ProviderErrorMapper for SoftlayerProvider {
    fn provider_name(&self) -> &'static str {
        "softlayer"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match (raw.code.as_deref(), raw.status) {
            // ============ 认证错误 ============
            (
                Some(
                    "SoftLayer_Exception_InvalidLogin"
                    | "SoftLayer_Exception_InvalidLegacyToken"
                    | "SoftLayer_Exception_Account_Authentication",
                ),
                _,
            )
            | (_, 401) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 权限不足 ============
            (
                Some(
                    "SoftLayer_Exception_PermissionDenied"
                    | "SoftLayer_Exception_Public_PermissionDenied",
                ),
                _,
            )
            | (_, 403) => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 对象不存在 ============
            (Some("SoftLayer_Exception_ObjectNotFound"), _) | (_, 404) => {
                if let Some(record_id) = context.record_id {
                    ProviderError::RecordNotFound {
                        provider: self.provider_name().to_string(),
                        record_id,
                        raw_message: Some(raw.message),
                    }
                } else {
                    ProviderError::ZoneNotFound {
                        provider: self.provider_name().to_string(),
                        zone: context.zone.unwrap_or_default(),
                        raw_message: Some(raw.message),
                    }
                }
            }

            // ============ 参数错误 ============
            (Some(code), _)
                if code == "SoftLayer_Exception_Public"
                    || code == "SoftLayer_Exception_InvalidValue"
                    || code.starts_with("SoftLayer_Exception_Dns") =>
            {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: context.param.unwrap_or_else(|| "request".to_string()),
                    detail: raw.message,
                }
            }

            // ============ 未知错误 ============
            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> SoftlayerProvider {
        SoftlayerProvider::new("u".to_string(), "k".to_string(), None)
    }

    #[test]
    fn invalid_login_maps_to_credentials() {
        let err = provider().map_error(
            RawApiError::with_code("SoftLayer_Exception_InvalidLogin", "Invalid API token.", 500),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn bare_401_maps_to_credentials() {
        let err = provider().map_error(
            RawApiError::from_status(401, "Access Denied"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn not_found_uses_record_context() {
        let err = provider().map_error(
            RawApiError::with_code("SoftLayer_Exception_ObjectNotFound", "Unable to find object", 404),
            ErrorContext::record("77"),
        );
        assert!(
            matches!(&err, ProviderError::RecordNotFound { record_id, .. } if record_id == "77"),
            "unexpected: {err:?}"
        );
    }

    #[test]
    fn not_found_uses_zone_context() {
        let err = provider().map_error(
            RawApiError::with_code("SoftLayer_Exception_ObjectNotFound", "Unable to find object", 404),
            ErrorContext::zone("12"),
        );
        assert!(
            matches!(&err, ProviderError::ZoneNotFound { zone, .. } if zone == "12"),
            "unexpected: {err:?}"
        );
    }

    #[test]
    fn dns_exception_maps_to_invalid_parameter() {
        let err = provider().map_error(
            RawApiError::with_code(
                "SoftLayer_Exception_Dns_InvalidData",
                "Data must be a valid IPv4 address",
                500,
            ),
            ErrorContext {
                param: Some("data".to_string()),
                ..ErrorContext::default()
            },
        );
        assert_eq!(
            err.to_string(),
            "[softlayer] Invalid parameter 'data': Data must be a valid IPv4 address"
        );
    }

    #[test]
    fn unrecognized_code_is_unknown() {
        let err = provider().map_error(
            RawApiError::with_code("SoftLayer_Exception_Something", "odd", 500),
            ErrorContext::default(),
        );
        assert!(
            matches!(&err, ProviderError::Unknown { raw_code: Some(code), .. } if code == "SoftLayer_Exception_Something")
        );
    }
}
