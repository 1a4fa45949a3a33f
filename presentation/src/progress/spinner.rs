//! Spinner shown while candidates are generated

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use kiosk_domain::SessionState;
use std::time::Duration;

/// Spinner tracking the generation states of one session
pub struct GenerationSpinner {
    bar: ProgressBar,
}

impl GenerationSpinner {
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_prefix("Generating");
        bar.set_message("starting...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Hidden spinner for non-interactive runs and tests
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Human label for a generation state
    pub fn state_message(state: SessionState) -> &'static str {
        match state {
            SessionState::InferenceTxtA | SessionState::InferenceImgA => "candidate A...",
            SessionState::InferenceTxtB | SessionState::InferenceImgB => "candidate B...",
            SessionState::ReviewTxt | SessionState::ReviewImg => "ready for review",
            SessionState::Error => "failed",
            _ => "waiting...",
        }
    }

    pub fn update(&self, state: SessionState) {
        self.bar.set_message(Self::state_message(state));
    }

    pub fn finish(&self, success: bool) {
        if success {
            self.bar
                .finish_with_message(format!("{}", "both candidates ready".green()));
        } else {
            self.bar.abandon_with_message(format!("{}", "generation failed".red()));
        }
    }
}
