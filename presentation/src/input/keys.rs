//! Keyboard mapping for the two kiosk buttons.
//!
//! The production kiosk wires GPIO callbacks straight to the controller's
//! choice handlers; on a workstation, one key per line on stdin does the
//! same job.

use kiosk_domain::Preference;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// An operator input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KioskCommand {
    /// Red button: prefer candidate A
    ChoiceA,
    /// Blue button: prefer candidate B
    ChoiceB,
    /// Save the session and stage the next prompt
    Next,
    Quit,
}

impl KioskCommand {
    /// The preference a button press records, if this is a button.
    pub fn preference(self) -> Option<Preference> {
        match self {
            KioskCommand::ChoiceA => Some(Preference::A),
            KioskCommand::ChoiceB => Some(Preference::B),
            KioskCommand::Next | KioskCommand::Quit => None,
        }
    }
}

/// Map one input line to a command. Unknown keys are ignored.
pub fn parse_key(line: &str) -> Option<KioskCommand> {
    match line.trim().to_ascii_lowercase().as_str() {
        "a" | "r" | "red" => Some(KioskCommand::ChoiceA),
        "b" | "blue" => Some(KioskCommand::ChoiceB),
        "n" | "next" | "" => Some(KioskCommand::Next),
        "q" | "quit" | "exit" => Some(KioskCommand::Quit),
        _ => None,
    }
}

/// Forward stdin key presses to `tx` until stdin closes or the receiver drops.
///
/// End of input is reported as [`KioskCommand::Quit`].
pub fn spawn_stdin_reader(tx: mpsc::UnboundedSender<KioskCommand>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if let Some(command) = parse_key(&line) {
                        debug!(?command, "Key pressed");
                        if tx.send(command).is_err() {
                            return;
                        }
                    }
                }
                Ok(None) | Err(_) => {
                    let _ = tx.send(KioskCommand::Quit);
                    return;
                }
            }
        }
    })
}
