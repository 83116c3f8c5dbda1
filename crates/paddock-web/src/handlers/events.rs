//! 이벤트 검색 핸들러.
//!
//! 데이터 디렉토리의 `events.json`에서 선택지 이벤트를 단어 단위로
//! 검색한다. 쿼리의 모든 단어를 포함하는 필드가 하나라도 있으면
//! 그 선택지가 결과에 들어간다 (대소문자 무시).

use std::fs;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

/// 이벤트 데이터 파일 이름
const EVENTS_FILE: &str = "events.json";

/// GET /event/{text} - 이벤트 선택지 검색
pub async fn search_events(
    State(state): State<AppState>,
    Path(text): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let path = state.content.data_dir.join(EVENTS_FILE);
    let content = fs::read_to_string(&path)
        .map_err(|_| ApiError::NotFound("이벤트 데이터 없음".to_string()))?;
    let events: Value = serde_json::from_str(&content)
        .map_err(|e| ApiError::Internal(format!("이벤트 데이터 파싱 실패: {e}")))?;

    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();

    let empty = Vec::new();
    let choices = events["choiceArraySchema"]["choices"]
        .as_array()
        .unwrap_or(&empty);

    let results: Vec<Value> = choices
        .iter()
        .filter(|choice| choice_matches(choice, &words))
        .cloned()
        .collect();

    Ok(Json(json!({ "data": results })))
}

/// 선택지의 문자열 필드 중 하나가 모든 단어를 포함하면 매칭
fn choice_matches(choice: &Value, words: &[String]) -> bool {
    let Some(fields) = choice.as_object() else {
        return false;
    };

    fields.values().any(|value| {
        value
            .as_str()
            .map(|s| {
                let lower = s.to_lowercase();
                words.iter().all(|w| lower.contains(w))
            })
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddock_core::config::ContentConfig;
    use tempfile::TempDir;

    fn state_with_events(dir: &TempDir, events: &Value) -> AppState {
        let data_dir = dir.path().join("data");
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(
            data_dir.join("events.json"),
            serde_json::to_string(events).unwrap(),
        )
        .unwrap();

        let content = ContentConfig {
            root: dir.path().to_path_buf(),
            ..Default::default()
        };
        AppState::from_content_config(&content).unwrap()
    }

    fn sample_events() -> Value {
        json!({
            "choiceArraySchema": {
                "choices": [
                    {"name": "Summer Training Camp", "effect": "Speed +10"},
                    {"name": "Rainy Day Rest", "effect": "Mood +1"},
                    {"name": "Night Practice", "effect": "Stamina training bonus"}
                ]
            }
        })
    }

    #[tokio::test]
    async fn single_word_matches_any_field() {
        let dir = TempDir::new().unwrap();
        let state = state_with_events(&dir, &sample_events());

        let Json(result) = search_events(State(state), Path("training".to_string()))
            .await
            .unwrap();
        let data = result["data"].as_array().unwrap();
        assert_eq!(data.len(), 2); // 이름 1건 + 효과 1건
    }

    #[tokio::test]
    async fn all_words_must_match_one_field() {
        let dir = TempDir::new().unwrap();
        let state = state_with_events(&dir, &sample_events());

        let Json(result) = search_events(State(state), Path("summer camp".to_string()))
            .await
            .unwrap();
        let data = result["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["name"], json!("Summer Training Camp"));
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let state = state_with_events(&dir, &sample_events());

        let Json(result) = search_events(State(state), Path("RAINY".to_string()))
            .await
            .unwrap();
        assert_eq!(result["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn no_match_is_empty_list() {
        let dir = TempDir::new().unwrap();
        let state = state_with_events(&dir, &sample_events());

        let Json(result) = search_events(State(state), Path("derby".to_string()))
            .await
            .unwrap();
        assert!(result["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_events_file_is_404() {
        let dir = TempDir::new().unwrap();
        let content = ContentConfig {
            root: dir.path().to_path_buf(),
            ..Default::default()
        };
        let state = AppState::from_content_config(&content).unwrap();

        let err = search_events(State(state), Path("training".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
