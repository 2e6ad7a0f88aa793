//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::list_clouds::ListCloudsUseCase;
use crate::application::usecases::resolve_cloud::ResolveCloudUseCase;
use crate::infrastructure::adapters::{JsonConfigRepository, StaticCloudResolver};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    resolver: StaticCloudResolver,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            resolver: StaticCloudResolver,
        }
    }
}

impl AppComposition {
    /// 클라우드 구성 해석 유스케이스를 생성한다.
    pub fn resolve_cloud_usecase(&self) -> ResolveCloudUseCase<'_> {
        ResolveCloudUseCase {
            config_repo: &self.config_repo,
            resolver: &self.resolver,
        }
    }

    pub fn list_clouds_usecase(&self) -> ListCloudsUseCase<'_> {
        ListCloudsUseCase {
            resolver: &self.resolver,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
            resolver: &self.resolver,
        }
    }
}
