//! 빌드 스크립트 — 프론트엔드 빌드 상태 확인
//!
//! dist 폴더가 없으면 생성하고 빌드 방법을 안내합니다.

use std::fs;
use std::path::Path;

fn main() {
    // cargo:rerun-if-changed로 프론트엔드 소스 변경 감지
    println!("cargo:rerun-if-changed=frontend/src");
    println!("cargo:rerun-if-changed=frontend/index.html");
    println!("cargo:rerun-if-changed=frontend/dist");

    let dist_path = Path::new("frontend/dist");
    let index_path = dist_path.join("index.html");

    // rust-embed가 폴더 부재로 실패하지 않도록 빈 dist라도 만들어 둔다
    if !dist_path.exists() {
        let _ = fs::create_dir_all(dist_path);
    }

    if !index_path.exists() {
        println!("cargo:warning=================================================================================");
        println!("cargo:warning=  프론트엔드 빌드 필요!");
        println!("cargo:warning=  cd crates/paddock-web/frontend && pnpm install && pnpm build");
        println!("cargo:warning=================================================================================");
    }
}
