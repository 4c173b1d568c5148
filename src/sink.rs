//! 보고서 저장 대상.
//!
//! 세션은 저장 방법을 모른다. 완성된 JSON 레코드를 [`ReportSink`]에 넘길 뿐이다.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// 저장 실패 이유.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("레코드 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 저장소가 레코드를 거부했다.
    #[error("저장 거부: {0}")]
    Rejected(String),
}

/// 보고서 레코드를 받아 보관하는 외부 협력자.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// 레코드 하나를 저장한다. 실패해도 호출 측 상태는 바뀌지 않아야 한다.
    async fn save(&self, payload: &Value) -> Result<(), SinkError>;
}

/// 레코드를 보기 좋게 들여쓴 JSON 파일 하나로 쓴다.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `dir/<kind>-<identifier>.json` 형태의 경로.
    pub fn in_dir(dir: &Path, kind: &str, identifier: &str) -> Self {
        let stem = if identifier.trim().is_empty() {
            kind.to_string()
        } else {
            format!("{kind}-{}", sanitize_file_stem(identifier))
        };
        Self::new(dir.join(format!("{stem}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn sanitize_file_stem(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

#[async_trait]
impl ReportSink for JsonFileSink {
    async fn save(&self, payload: &Value) -> Result<(), SinkError> {
        let body = serde_json::to_vec_pretty(payload)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, body).await?;
        tracing::debug!(path = %self.path.display(), "레코드 파일 기록");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stem_replaces_path_characters() {
        let sink = JsonFileSink::in_dir(Path::new("out"), "medium-voltage-switch-mts", "SW 1/A");
        assert_eq!(sink.path(), Path::new("out/medium-voltage-switch-mts-SW_1_A.json"));

        let sink = JsonFileSink::in_dir(Path::new("out"), "automatic-transfer-switch", "  ");
        assert_eq!(sink.path(), Path::new("out/automatic-transfer-switch.json"));
    }
}
