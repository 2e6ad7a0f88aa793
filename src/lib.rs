//! cloudenv library root.
//! 클라우드 이름 + resource manager 엔드포인트 override를 Azure 클라우드 구성으로 해석한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use application::config::{ArmClientConfig, ClientFactoryConfig, RateLimitConfig};
pub use domain::cloud::{CloudConfiguration, ServiceEndpointInfo, ServiceName};
pub use domain::environment::{
    CloudConfigError, CloudEnvironments, DEFAULT_CLOUD_NAME, ENVIRONMENT_MAPPING,
    cloud_config_from_name, normalize_cloud_name,
};
