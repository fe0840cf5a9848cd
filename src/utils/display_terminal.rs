//! 서비스 레지스트리 초기화 과정을 터미널에 보기 좋게 출력하는 유틸리티

/// 50칸 폭의 박스 제목을 출력합니다.
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 초기화가 끝난 컴포넌트 목록을 요약합니다.
pub fn print_registry_summary(components: &[&str]) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    for name in components {
        println!("   🔧 {}", name);
    }
    println!("   🚀 Total Components: {}", components.len());
    println!();
}
