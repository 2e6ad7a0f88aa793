//! 클라우드 구성 해석 유스케이스.

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::{CloudConfigResolver, ConfigRepository};
use crate::domain::cloud::CloudConfiguration;

/// CLI 등 호출자가 넘기는 해석 옵션. 지정값은 설정 파일보다 우선한다.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub cloud: Option<String>,
    pub endpoint: Option<String>,
}

pub struct ResolveCloudUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub resolver: &'a dyn CloudConfigResolver,
}

impl<'a> ResolveCloudUseCase<'a> {
    /// 병합 설정 + 옵션으로 클라우드 구성을 결정한다.
    pub fn execute(&self, options: &ResolveOptions) -> Result<CloudConfiguration> {
        let config = self.config_repo.load()?;

        let cloud = options
            .cloud
            .clone()
            .or(config.arm.cloud)
            .unwrap_or_default();
        let endpoint = options
            .endpoint
            .clone()
            .or(config.arm.resource_manager_endpoint)
            .unwrap_or_default();
        debug!(cloud = %cloud, endpoint = %endpoint, "resolving cloud configuration");

        self.resolver
            .resolve(&cloud, &endpoint)
            .with_context(|| format!("failed to resolve cloud configuration for '{cloud}'"))
    }

    /// 해석 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
    pub fn execute_pretty_json(&self, options: &ResolveOptions) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.execute(options)?)?)
    }
}
