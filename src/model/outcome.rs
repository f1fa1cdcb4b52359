//! Export tally

/// Per-run counts produced by the export pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOutcome {
    pub succeeded: usize,
    pub errored: usize,
    pub skipped: usize,
}

impl ExportOutcome {
    /// Total number of fonts the run attempted
    pub fn attempted(&self) -> usize {
        self.succeeded + self.errored + self.skipped
    }

    /// Headline shown in the result dialog and status line
    pub fn summary(&self) -> String {
        let mut msg = format!("Successfully exported {} fonts", self.succeeded);
        if self.errored > 0 {
            msg.push_str(&format!(" ({} errors)", self.errored));
        }
        if self.skipped > 0 {
            msg.push_str(&format!(" ({} skipped)", self.skipped));
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_clean_run() {
        let outcome = ExportOutcome {
            succeeded: 3,
            ..Default::default()
        };
        assert_eq!(outcome.summary(), "Successfully exported 3 fonts");
    }

    #[test]
    fn test_summary_with_errors_and_skips() {
        let outcome = ExportOutcome {
            succeeded: 1,
            errored: 2,
            skipped: 4,
        };
        assert_eq!(
            outcome.summary(),
            "Successfully exported 1 fonts (2 errors) (4 skipped)"
        );
        assert_eq!(outcome.attempted(), 7);
    }
}
