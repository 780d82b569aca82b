//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 과정에서 사용하는 출력 함수들입니다.
//! 로그 레벨과 무관하게 항상 표준 출력으로 나갑니다.

/// 박스 내부 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  neo_backend                     ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH,
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Connecting data stores
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 2: Repositories ready (3 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ AddressRepository: indexes OK
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 기동 완료 요약을 출력합니다
pub fn print_final_summary(repositories: usize, services: usize) {
    println!();
    print_boxed_title("🎉 NEO BACKEND READY");
    println!("   📦 Repositories: {}", repositories);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repositories + services);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let boxed = boxed_title("neo");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with('║'));
        assert!(lines[1].contains("neo"));
        assert_eq!(lines[0].chars().count(), BOX_WIDTH + 2);
        assert_eq!(lines[1].chars().count(), BOX_WIDTH + 2);
    }
}
