//! 설정 파일 탐색/병합 결과를 확인하는 유스케이스.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::application::ports::{CloudConfigResolver, ConfigRepository};

/// 적용 중인 설정과 지원 클라우드 목록을 함께 보여준다.
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub resolver: &'a dyn CloudConfigResolver,
}

impl<'a> InspectConfigUseCase<'a> {
    pub fn execute(&self) -> Result<String> {
        let raw = self.config_repo.inspect_pretty_json()?;
        let mut report: Value =
            serde_json::from_str(&raw).context("config inspection is not valid JSON")?;

        if let Value::Object(map) = &mut report {
            map.insert(
                "known_clouds".to_string(),
                Value::from(self.resolver.known_clouds()),
            );
        }

        Ok(serde_json::to_string_pretty(&report)?)
    }
}
