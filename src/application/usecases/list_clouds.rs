//! 지원 클라우드 이름 목록 유스케이스.

use crate::application::ports::CloudConfigResolver;

pub struct ListCloudsUseCase<'a> {
    pub resolver: &'a dyn CloudConfigResolver,
}

impl<'a> ListCloudsUseCase<'a> {
    /// 정규화된 클라우드 이름을 한 줄에 하나씩 반환한다.
    pub fn execute(&self) -> String {
        self.resolver.known_clouds().join("\n")
    }
}
