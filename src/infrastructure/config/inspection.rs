//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use crate::application::config::ClientFactoryConfig;
use crate::domain::cloud::CloudConfiguration;
use crate::domain::environment::normalize_cloud_name;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub config: ClientFactoryConfig,
    pub effective: EffectiveSettings,
    pub resolution: CloudResolutionInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub cloud: String,
    pub user_agent: String,
    pub resource_manager_endpoint_override: Option<String>,
    pub backoff_enabled: bool,
    pub rate_limit_enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CloudResolutionInspection {
    pub resolved: bool,
    pub error: Option<String>,
    pub configuration: Option<CloudConfiguration>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = loaded.config;
        let resolution = match config.arm.resolve_cloud() {
            Ok(cfg) => CloudResolutionInspection {
                resolved: true,
                error: None,
                configuration: Some(cfg),
            },
            Err(err) => CloudResolutionInspection {
                resolved: false,
                error: Some(err.to_string()),
                configuration: None,
            },
        };

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            effective: EffectiveSettings {
                cloud: normalize_cloud_name(config.arm.cloud.as_deref().unwrap_or_default()),
                user_agent: config.arm.user_agent(),
                resource_manager_endpoint_override: config
                    .arm
                    .resource_manager_endpoint
                    .clone()
                    .filter(|v| !v.is_empty()),
                backoff_enabled: config.backoff_enabled(),
                rate_limit_enabled: config.rate_limit.is_enabled(),
            },
            config,
            resolution,
        }
    }
}
