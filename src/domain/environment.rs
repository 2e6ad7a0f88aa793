//! 클라우드 이름 → 클라우드 구성 해석 모듈.
//!
//! 공유 테이블은 최초 접근 시 한 번만 초기화되고 이후에는 읽기 전용이다.
//! 엔드포인트 override는 항상 복제본에만 적용한다.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use thiserror::Error;

use super::cloud::{CloudConfiguration, ServiceName};

pub const DEFAULT_CLOUD_NAME: &str = "AZUREPUBLICCLOUD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CloudConfigError {
    #[error("resource manager service config is not found")]
    ConfigNotFound,
}

/// 정규화된 클라우드 이름별 구성 테이블.
#[derive(Debug, Clone, Default)]
pub struct CloudEnvironments {
    entries: BTreeMap<String, CloudConfiguration>,
}

/// 프로세스 전역 기본 테이블.
pub static ENVIRONMENT_MAPPING: LazyLock<CloudEnvironments> =
    LazyLock::new(CloudEnvironments::azure);

impl CloudEnvironments {
    pub fn new() -> Self {
        Self::default()
    }

    /// 내장 Azure 클라우드 테이블.
    pub fn azure() -> Self {
        Self::new()
            .with("AZURECHINACLOUD", CloudConfiguration::azure_china())
            .with("AZURECLOUD", CloudConfiguration::azure_public())
            .with("AZUREPUBLICCLOUD", CloudConfiguration::azure_public())
            .with("AZUREUSGOVERNMENT", CloudConfiguration::azure_government())
            // TODO: AZUREUSGOVERNMENT로 통일되면 제거
            .with("AZUREUSGOVERNMENTCLOUD", CloudConfiguration::azure_government())
    }

    pub fn with(mut self, name: &str, config: CloudConfiguration) -> Self {
        self.entries.insert(normalize_cloud_name(name), config);
        self
    }

    pub fn get(&self, name: &str) -> Option<&CloudConfiguration> {
        self.entries.get(&normalize_cloud_name(name))
    }

    /// 정렬된 정규 이름 목록.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// 클라우드 이름과 resource manager 엔드포인트 override로 구성을 결정한다.
    pub fn resolve(
        &self,
        cloud_name: &str,
        endpoint: &str,
    ) -> Result<CloudConfiguration, CloudConfigError> {
        let mut config = self.get(cloud_name).cloned();

        if !endpoint.is_empty() {
            // 알 수 없는 클라우드는 authority host를 유추할 수 없다.
            let cfg = config.as_mut().ok_or(CloudConfigError::ConfigNotFound)?;
            let service = cfg
                .services
                .get_mut(&ServiceName::ResourceManager)
                .ok_or(CloudConfigError::ConfigNotFound)?;
            service.endpoint = endpoint.to_string();
        }

        config.ok_or(CloudConfigError::ConfigNotFound)
    }
}

/// 공백 제거 + 대문자화, 빈 값은 퍼블릭 클라우드로 대체한다.
pub fn normalize_cloud_name(cloud_name: &str) -> String {
    let normalized = cloud_name.trim().to_uppercase();
    if normalized.is_empty() {
        DEFAULT_CLOUD_NAME.to_string()
    } else {
        normalized
    }
}

/// 전역 테이블 기준으로 클라우드 구성을 해석한다.
pub fn cloud_config_from_name(
    cloud_name: &str,
    endpoint: &str,
) -> Result<CloudConfiguration, CloudConfigError> {
    ENVIRONMENT_MAPPING.resolve(cloud_name, endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERRIDE: &str = "https://arm.contoso.example";

    #[test]
    fn lookup_is_case_insensitive() {
        for name in ENVIRONMENT_MAPPING.names() {
            let upper = cloud_config_from_name(name, "").unwrap();
            let lower = cloud_config_from_name(&name.to_lowercase(), "").unwrap();
            let padded = cloud_config_from_name(&format!("  {name} "), "").unwrap();
            assert_eq!(upper, lower);
            assert_eq!(upper, padded);
        }
    }

    #[test]
    fn empty_name_defaults_to_public_cloud() {
        assert_eq!(
            cloud_config_from_name("", "").unwrap(),
            cloud_config_from_name("AZUREPUBLICCLOUD", "").unwrap()
        );
        assert_eq!(
            cloud_config_from_name("   ", "").unwrap(),
            CloudConfiguration::azure_public()
        );
    }

    #[test]
    fn china_cloud_resolves_curated_endpoint() {
        let cfg = cloud_config_from_name("azurechinacloud", "").unwrap();
        assert_eq!(
            cfg.resource_manager().unwrap().endpoint,
            "https://management.chinacloudapi.cn"
        );
    }

    #[test]
    fn deprecated_government_alias_matches() {
        assert_eq!(
            cloud_config_from_name("AZUREUSGOVERNMENTCLOUD", "").unwrap(),
            cloud_config_from_name("AZUREUSGOVERNMENT", "").unwrap()
        );
    }

    #[test]
    fn azurecloud_is_public_alias() {
        assert_eq!(
            cloud_config_from_name("AzureCloud", "").unwrap(),
            CloudConfiguration::azure_public()
        );
    }

    #[test]
    fn override_replaces_endpoint_and_keeps_audience() {
        let base = cloud_config_from_name("AZUREUSGOVERNMENT", "").unwrap();
        let cfg = cloud_config_from_name("azureusgovernment", OVERRIDE).unwrap();

        let rm = cfg.resource_manager().unwrap();
        assert_eq!(rm.endpoint, OVERRIDE);
        assert_eq!(rm.audience, base.resource_manager().unwrap().audience);
        assert_eq!(
            cfg.active_directory_authority_host,
            base.active_directory_authority_host
        );
    }

    #[test]
    fn unknown_cloud_fails_with_or_without_override() {
        assert_eq!(
            cloud_config_from_name("AZUREGERMANCLOUD", OVERRIDE),
            Err(CloudConfigError::ConfigNotFound)
        );
        assert_eq!(
            cloud_config_from_name("AZUREGERMANCLOUD", ""),
            Err(CloudConfigError::ConfigNotFound)
        );
    }

    #[test]
    fn override_does_not_leak_into_shared_table() {
        let first = cloud_config_from_name("AZUREPUBLICCLOUD", OVERRIDE).unwrap();
        let second = cloud_config_from_name("AZUREPUBLICCLOUD", OVERRIDE).unwrap();
        assert_eq!(first, second);

        let plain = cloud_config_from_name("AZUREPUBLICCLOUD", "").unwrap();
        assert_eq!(
            plain.resource_manager().unwrap().endpoint,
            "https://management.azure.com"
        );
        // AZURECLOUD도 같은 프리셋을 공유한다.
        assert_eq!(plain, cloud_config_from_name("AZURECLOUD", "").unwrap());
    }

    #[test]
    fn missing_resource_manager_fails_only_with_override() {
        let table = CloudEnvironments::new().with(
            "customcloud",
            CloudConfiguration::new("https://login.example/"),
        );

        assert_eq!(
            table.resolve("CUSTOMCLOUD", OVERRIDE),
            Err(CloudConfigError::ConfigNotFound)
        );
        assert!(table.resolve("CustomCloud", "").is_ok());
    }

    #[test]
    fn error_message_is_stable() {
        assert_eq!(
            CloudConfigError::ConfigNotFound.to_string(),
            "resource manager service config is not found"
        );
    }
}
