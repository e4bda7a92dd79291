//! Content consistency lint, run in CI before deploys.
//!
//! Prints every finding and exits non-zero when any check at error level
//! fails. Warnings (untranslated pages, FAQ answers outside the snippet
//! length target) are reported but tolerated.

use backend::seo::lint::{run_lint, LintLevel};

fn main() -> std::process::ExitCode {
    let findings = run_lint();

    let mut errors = 0usize;
    let mut warnings = 0usize;
    for finding in &findings {
        eprintln!("{finding}");
        match finding.level {
            LintLevel::Error => errors += 1,
            LintLevel::Warning => warnings += 1,
        }
    }

    eprintln!("content lint: {errors} error(s), {warnings} warning(s)");
    if errors > 0 {
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}
