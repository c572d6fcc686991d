//! Console rendering of the conversation screen.

use std::sync::Mutex;

use record_sample_core::{AppState, ConversationView};

/// Text rendering of a [`ConversationView`].
pub fn render(view: &ConversationView) -> String {
    let mut out = String::new();

    if let Some(message) = &view.error_banner {
        out.push_str(&format!("[!] {message}  (type `dismiss`)\n"));
    }

    if view.show_record_panel {
        out.push_str("[ REC ]  lock | trash | send");
    } else {
        let mut controls = Vec::new();
        if view.show_attachment_button {
            controls.push("[+]");
        }
        if view.show_text_field {
            controls.push("[ message ]");
        }
        if view.show_emoji_icon {
            controls.push("[:)]");
        }
        controls.push("[mic: press]");
        out.push_str(&controls.join("  "));
    }

    out
}

/// Prints the screen whenever the view derived from the state changes.
pub struct ScreenRenderer {
    last: Mutex<Option<ConversationView>>,
}

impl ScreenRenderer {
    /// A renderer that has drawn nothing yet.
    pub fn new() -> Self {
        Self {
            last: Mutex::new(None),
        }
    }

    /// Returns the new rendering when `state` changes what is on screen.
    pub fn update(&self, state: &AppState) -> Option<String> {
        let view = ConversationView::from(state);
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());

        if last.as_ref() == Some(&view) {
            return None;
        }

        let rendered = render(&view);
        *last = Some(view);
        Some(rendered)
    }
}

impl Default for ScreenRenderer {
    fn default() -> Self {
        Self::new()
    }
}
