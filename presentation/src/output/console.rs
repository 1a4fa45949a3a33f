//! Console output formatter for kiosk sessions

use colored::Colorize;
use kiosk_domain::{Candidate, Session, SessionSnapshot, SessionState};

/// Formats sessions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner shown when a new session is staged
    pub fn session_header(snapshot: &SessionSnapshot) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Preference Kiosk"));
        output.push('\n');

        match (&snapshot.prompt, snapshot.model) {
            (Some(prompt), Some(model)) => {
                output.push_str(&format!("{} {}\n", "Prompt:".cyan().bold(), prompt));
                output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), model));
            }
            _ => output.push_str(&format!("{}\n", "No prompts are loaded.".yellow())),
        }
        output.push_str(&format!(
            "{} {}\n",
            "Session:".cyan().bold(),
            snapshot.session_id.to_string().dimmed()
        ));
        output
    }

    /// Both candidates side by side, ready for review
    pub fn candidates(session: &Session) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Candidates"));
        output.push_str(&Self::candidate("A (red)", session.result_a()));
        output.push_str(&Self::candidate("B (blue)", session.result_b()));
        output.push_str(&format!(
            "\n{}\n",
            "Press a/r for A, b for B, then n to save.".dimmed()
        ));
        output
    }

    fn candidate(label: &str, candidate: Option<&Candidate>) -> String {
        let title = format!("── {} ──", label).yellow().bold();
        match candidate {
            Some(Candidate::Text(text)) => format!("\n{}\n{}\n", title, text.trim()),
            Some(Candidate::Image(bytes)) => {
                format!("\n{}\n[image, {} bytes]\n", title, bytes.len())
            }
            None => format!("\n{}\n{}\n", title, "(pending)".dimmed()),
        }
    }

    /// One-line status for state changes
    pub fn status(snapshot: &SessionSnapshot) -> String {
        let state = match snapshot.state {
            SessionState::Error => snapshot.state.as_str().red().bold(),
            s if s.is_selected() => s.as_str().green().bold(),
            s if s.is_review() => s.as_str().cyan().bold(),
            s if s.is_inference() => s.as_str().yellow(),
            s => s.as_str().normal(),
        };
        let mut line = format!("{} {}", "->".cyan(), state);
        if let Some(preference) = snapshot.human_preference {
            line.push_str(&format!("  preference: {}", preference.as_str().bold()));
        }
        if snapshot.state == SessionState::Error
            && let Some(error) = &snapshot.error
        {
            line.push_str(&format!("  {}", error.red()));
        }
        line
    }

    /// Confirmation after save-and-advance
    pub fn saved(location: Option<&str>) -> String {
        match location {
            Some(location) => format!("{} Saved {}", "v".green(), location),
            None => format!("{} Nothing recorded; skipped", "-".yellow()),
        }
    }

    /// Warning after a preference could not be persisted
    pub fn save_failed(error: Option<&str>) -> String {
        format!(
            "{} Result not saved: {}",
            "x".red(),
            error.unwrap_or("unknown error").red()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "{}\n{}\n{}",
            line.blue(),
            format!("  {}", title).bold(),
            line.blue()
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("[ {} ]", title).magenta().bold())
    }
}
