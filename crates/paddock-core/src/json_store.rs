//! 봇 설정 문서 저장소.
//!
//! 웹 UI가 `GET/POST /config`로 편집하는 자유형 JSON 문서를
//! 보관한다. 스키마는 UI의 소유이므로 서버는 `serde_json::Value`로
//! 저장만 담당한다 — 타입이 있는 서버 설정은 [`crate::config`] 참조.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use crate::error::CoreError;

/// 단일 JSON 문서 파일 저장소.
///
/// 파일이 없으면 빈 오브젝트(`{}`)로 동작하고, 저장 시 pretty JSON으로
/// 기록한다.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// 현재 문서 (스레드 안전)
    document: Arc<RwLock<Value>>,
    /// 문서 파일 경로
    path: PathBuf,
}

impl JsonFileStore {
    /// 경로에서 문서 로드 (없으면 `{}`)
    pub fn open(path: PathBuf) -> Result<Self, CoreError> {
        let document = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Value::Object(serde_json::Map::new())
        };

        Ok(Self {
            document: Arc::new(RwLock::new(document)),
            path,
        })
    }

    /// 현재 문서 반환 (복제본)
    pub fn get(&self) -> Value {
        self.document.read().clone()
    }

    /// 문서 교체 및 파일 저장
    pub fn replace(&self, new_document: Value) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(&new_document)?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, content)?;

        *self.document.write() = new_document;
        debug!("문서 저장 완료: {}", self.path.display());
        Ok(())
    }

    /// 문서 파일 경로
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_empty_object() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp_dir.path().join("config.json")).unwrap();
        assert_eq!(store.get(), json!({}));
    }

    #[test]
    fn replace_persists_to_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let store = JsonFileStore::open(path.clone()).unwrap();
        store.replace(json!({"auto_rest": true, "mood_threshold": 3})).unwrap();

        // 새 저장소로 다시 열어 디스크 내용 확인
        let reopened = JsonFileStore::open(path).unwrap();
        assert_eq!(reopened.get()["auto_rest"], json!(true));
        assert_eq!(reopened.get()["mood_threshold"], json!(3));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "][").unwrap();

        assert!(JsonFileStore::open(path).is_err());
    }
}
