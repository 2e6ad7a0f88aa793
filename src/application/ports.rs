//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;

use crate::application::config::ClientFactoryConfig;
use crate::domain::cloud::CloudConfiguration;
use crate::domain::environment::CloudConfigError;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<ClientFactoryConfig>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 클라우드 이름(+엔드포인트 override)을 클라우드 구성으로 해석하는 포트.
pub trait CloudConfigResolver: Send + Sync {
    fn resolve(
        &self,
        cloud_name: &str,
        endpoint: &str,
    ) -> Result<CloudConfiguration, CloudConfigError>;
    fn known_clouds(&self) -> Vec<String>;
}
