//! 클라이언트 팩토리가 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

use crate::domain::cloud::CloudConfiguration;
use crate::domain::environment::{CloudConfigError, cloud_config_from_name};

pub const DEFAULT_USER_AGENT: &str = concat!("cloudenv/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientFactoryConfig {
    /// 요청 rate limit 설정
    #[serde(flatten)]
    pub rate_limit: RateLimitConfig,
    /// ARM 클라이언트 대상 클라우드 설정
    #[serde(flatten)]
    pub arm: ArmClientConfig,
    /// 재시도 시 지수 backoff 사용 여부(기본 false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_provider_backoff: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArmClientConfig {
    /// 클라우드 환경 식별자(예: AzurePublicCloud, AzureChinaCloud)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud: Option<String>,
    /// 사용량 귀속(customer usage attribution)용 user agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// 지정 시 내장 resource manager 엔드포인트 대신 이 값을 사용한다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_manager_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_provider_rate_limit: Option<bool>,
    #[serde(
        rename = "cloudProviderRateLimitQPS",
        skip_serializing_if = "Option::is_none"
    )]
    pub cloud_provider_rate_limit_qps: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_provider_rate_limit_bucket: Option<u32>,
    #[serde(
        rename = "cloudProviderRateLimitQPSWrite",
        skip_serializing_if = "Option::is_none"
    )]
    pub cloud_provider_rate_limit_qps_write: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_provider_rate_limit_bucket_write: Option<u32>,
}

impl ClientFactoryConfig {
    pub fn backoff_enabled(&self) -> bool {
        self.cloud_provider_backoff.unwrap_or(false)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: ClientFactoryConfig) {
        self.rate_limit.merge_from(other.rate_limit);
        self.arm.merge_from(other.arm);
        if other.cloud_provider_backoff.is_some() {
            self.cloud_provider_backoff = other.cloud_provider_backoff;
        }
    }
}

impl ArmClientConfig {
    pub fn user_agent(&self) -> String {
        self.user_agent
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
    }

    /// 설정된 cloud/엔드포인트로 클라우드 구성을 해석한다.
    pub fn resolve_cloud(&self) -> Result<CloudConfiguration, CloudConfigError> {
        cloud_config_from_name(
            self.cloud.as_deref().unwrap_or_default(),
            self.resource_manager_endpoint.as_deref().unwrap_or_default(),
        )
    }

    pub fn merge_from(&mut self, other: ArmClientConfig) {
        if other.cloud.is_some() {
            self.cloud = other.cloud;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }
        if other.resource_manager_endpoint.is_some() {
            self.resource_manager_endpoint = other.resource_manager_endpoint;
        }
    }
}

impl RateLimitConfig {
    pub fn is_enabled(&self) -> bool {
        self.cloud_provider_rate_limit.unwrap_or(false)
    }

    pub fn merge_from(&mut self, other: RateLimitConfig) {
        if other.cloud_provider_rate_limit.is_some() {
            self.cloud_provider_rate_limit = other.cloud_provider_rate_limit;
        }
        if other.cloud_provider_rate_limit_qps.is_some() {
            self.cloud_provider_rate_limit_qps = other.cloud_provider_rate_limit_qps;
        }
        if other.cloud_provider_rate_limit_bucket.is_some() {
            self.cloud_provider_rate_limit_bucket = other.cloud_provider_rate_limit_bucket;
        }
        if other.cloud_provider_rate_limit_qps_write.is_some() {
            self.cloud_provider_rate_limit_qps_write = other.cloud_provider_rate_limit_qps_write;
        }
        if other.cloud_provider_rate_limit_bucket_write.is_some() {
            self.cloud_provider_rate_limit_bucket_write =
                other.cloud_provider_rate_limit_bucket_write;
        }
    }
}
