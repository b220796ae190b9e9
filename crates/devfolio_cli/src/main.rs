//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `devfolio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use devfolio_core::{ContentSource, StaticContentSource};

fn main() {
    let content = StaticContentSource::bundled();

    println!("devfolio_core ping={}", devfolio_core::ping());
    println!("devfolio_core version={}", devfolio_core::core_version());
    println!(
        "bundled projects={} experience={} skills={}",
        content.projects().len(),
        content.experience().len(),
        content.skills().iter_all().count()
    );
}
