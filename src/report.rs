use colored::Colorize;
use std::path::Path;

use crate::patch::PatchOutcome;

/// Counts for the completion banner. Exists for one run, then discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub changed: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: PatchOutcome) {
        match outcome {
            PatchOutcome::Changed => self.changed += 1,
            PatchOutcome::Skipped => self.skipped += 1,
        }
    }
}

/// Startup banner, printed once before the page loop.
pub fn print_banner() {
    println!("{}", "🔧 Adding fetch logic to admin pages...".bold());
}

/// One status line per page: skip glyph when markers were already present,
/// edit glyph otherwise.
pub fn print_status(path: &Path, outcome: PatchOutcome) {
    match outcome {
        PatchOutcome::Skipped => {
            println!(
                "  ⏭️  {} {}",
                path.display().to_string().dimmed(),
                "already has fetch logic".dimmed()
            );
        }
        PatchOutcome::Changed => {
            println!("  ✏️  Adding fetch logic to {}", path.display());
        }
    }
}

/// Completion banner with the run counts.
pub fn print_summary(summary: RunSummary) {
    println!(
        "{} {} changed, {} skipped",
        "✅ Done!".green().bold(),
        summary.changed,
        summary.skipped
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::default();
        summary.record(PatchOutcome::Changed);
        summary.record(PatchOutcome::Changed);
        summary.record(PatchOutcome::Skipped);
        assert_eq!(summary.changed, 2);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_print_functions_do_not_panic() {
        print_banner();
        print_status(Path::new("src/app/admin/calendar/page.tsx"), PatchOutcome::Changed);
        print_status(Path::new("src/app/admin/calendar/page.tsx"), PatchOutcome::Skipped);
        print_summary(RunSummary { changed: 1, skipped: 2 });
    }
}
