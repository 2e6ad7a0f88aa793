//! 클라우드 환경(엔드포인트/audience) 값 객체.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 클라우드 환경 안의 논리 서비스 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceName {
    /// ARM(control plane) API
    ResourceManager,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpointInfo {
    /// 서비스 엔드포인트 URL
    pub endpoint: String,
    /// 토큰 발급 시 바인딩되는 audience
    pub audience: String,
}

/// 하나의 클라우드(퍼블릭/정부/소버린) 구성.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudConfiguration {
    pub active_directory_authority_host: String,
    pub services: BTreeMap<ServiceName, ServiceEndpointInfo>,
}

impl CloudConfiguration {
    pub fn new(authority_host: &str) -> Self {
        Self {
            active_directory_authority_host: authority_host.to_string(),
            services: BTreeMap::new(),
        }
    }

    pub fn with_service(mut self, name: ServiceName, endpoint: &str, audience: &str) -> Self {
        self.services.insert(
            name,
            ServiceEndpointInfo {
                endpoint: endpoint.to_string(),
                audience: audience.to_string(),
            },
        );
        self
    }

    pub fn service(&self, name: ServiceName) -> Option<&ServiceEndpointInfo> {
        self.services.get(&name)
    }

    pub fn resource_manager(&self) -> Option<&ServiceEndpointInfo> {
        self.service(ServiceName::ResourceManager)
    }

    /// Azure 퍼블릭 클라우드.
    pub fn azure_public() -> Self {
        Self::new("https://login.microsoftonline.com/").with_service(
            ServiceName::ResourceManager,
            "https://management.azure.com",
            "https://management.core.windows.net/",
        )
    }

    /// Azure 미국 정부 클라우드.
    pub fn azure_government() -> Self {
        Self::new("https://login.microsoftonline.us/").with_service(
            ServiceName::ResourceManager,
            "https://management.usgovcloudapi.net",
            "https://management.core.usgovcloudapi.net",
        )
    }

    /// Azure 중국(21Vianet) 클라우드.
    pub fn azure_china() -> Self {
        Self::new("https://login.chinacloudapi.cn/").with_service(
            ServiceName::ResourceManager,
            "https://management.chinacloudapi.cn",
            "https://management.core.chinacloudapi.cn",
        )
    }
}
