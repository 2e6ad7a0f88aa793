//! 클라우드 구성 해석 포트 구현 어댑터.

use crate::application::ports::CloudConfigResolver;
use crate::domain::cloud::CloudConfiguration;
use crate::domain::environment::{CloudConfigError, ENVIRONMENT_MAPPING};

/// 내장 Azure 환경 테이블을 사용하는 어댑터.
pub struct StaticCloudResolver;

impl CloudConfigResolver for StaticCloudResolver {
    fn resolve(
        &self,
        cloud_name: &str,
        endpoint: &str,
    ) -> Result<CloudConfiguration, CloudConfigError> {
        ENVIRONMENT_MAPPING.resolve(cloud_name, endpoint)
    }

    fn known_clouds(&self) -> Vec<String> {
        ENVIRONMENT_MAPPING.names().map(str::to_string).collect()
    }
}
