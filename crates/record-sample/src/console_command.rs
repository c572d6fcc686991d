use record_sample_core::AppAction;

/// Commands typed on the conversation screen.
///
/// Stand-ins for the press-and-hold gestures: `press` starts recording,
/// `send` releases, `trash` swipes to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Press the record button.
    Press,
    /// Release the record button (send the recording).
    Send,
    /// Swipe the recording to the trash.
    Trash,
    /// Swipe up to lock the recording.
    Lock,
    /// Dismiss the error banner.
    Dismiss,
    /// Bring the scene back to the foreground.
    Activate,
    /// Show the screen and prepared drafts.
    Status,
    /// List the commands.
    Help,
    /// Leave the application.
    Quit,
}

impl ConsoleCommand {
    /// Help text listing every command.
    pub const HELP: &'static str = "\
commands:
  press    start recording (hold)
  send     release and send the recording
  trash    cancel the recording
  lock     lock the recording hands-free
  dismiss  dismiss the error banner
  activate bring the app back to the foreground
  status   show the screen and prepared drafts
  help     show this list
  quit     exit";

    /// Parses a line of input. Case and surrounding whitespace are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let command = match line.trim().to_ascii_lowercase().as_str() {
            "press" | "p" | "record" => ConsoleCommand::Press,
            "send" | "s" | "release" => ConsoleCommand::Send,
            "trash" | "t" | "cancel" => ConsoleCommand::Trash,
            "lock" | "l" => ConsoleCommand::Lock,
            "dismiss" | "d" => ConsoleCommand::Dismiss,
            "activate" | "a" => ConsoleCommand::Activate,
            "status" => ConsoleCommand::Status,
            "help" | "h" | "?" => ConsoleCommand::Help,
            "quit" | "q" | "exit" => ConsoleCommand::Quit,
            _ => return None,
        };
        Some(command)
    }

    /// Action dispatched for this command, if any.
    pub fn action(self) -> Option<AppAction> {
        match self {
            ConsoleCommand::Press => Some(AppAction::StartRecordSession),
            ConsoleCommand::Send => Some(AppAction::EndRecordSession),
            ConsoleCommand::Trash => Some(AppAction::CancelRecordSession),
            ConsoleCommand::Dismiss => Some(AppAction::ErrorDismiss),
            ConsoleCommand::Activate => Some(AppAction::ScenePhaseActive),
            ConsoleCommand::Lock
            | ConsoleCommand::Status
            | ConsoleCommand::Help
            | ConsoleCommand::Quit => None,
        }
    }
}

/// Parses the answer to a permission prompt.
pub fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "allow" => Some(true),
        "n" | "no" | "deny" => Some(false),
        _ => None,
    }
}
