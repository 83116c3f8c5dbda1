//! 알림 에셋 목록 핸들러.

use std::fs;

use axum::extract::State;
use axum::Json;

use crate::AppState;

/// GET /notifs - 알림 에셋 디렉토리의 파일 이름 목록
///
/// 디렉토리가 없으면 빈 목록. 출력은 이름순 정렬.
pub async fn list_notifications(State(state): State<AppState>) -> Json<Vec<String>> {
    let Ok(entries) = fs::read_dir(&state.content.notifications_dir) else {
        return Json(Vec::new());
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();

    Json(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddock_core::config::ContentConfig;
    use tempfile::TempDir;

    fn state(dir: &TempDir) -> AppState {
        let content = ContentConfig {
            root: dir.path().to_path_buf(),
            ..Default::default()
        };
        AppState::from_content_config(&content).unwrap()
    }

    #[tokio::test]
    async fn missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let Json(names) = list_notifications(State(state(&dir))).await;
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn lists_files_sorted() {
        let dir = TempDir::new().unwrap();
        let notifs = dir.path().join("assets/notifications");
        fs::create_dir_all(&notifs).unwrap();
        fs::write(notifs.join("race.png"), b"x").unwrap();
        fs::write(notifs.join("event.png"), b"x").unwrap();
        // 하위 디렉토리는 목록에서 제외
        fs::create_dir_all(notifs.join("sub")).unwrap();

        let Json(names) = list_notifications(State(state(&dir))).await;
        assert_eq!(names, vec!["event.png", "race.png"]);
    }
}
