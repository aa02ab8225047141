//! Session state and the host embedding contract
//!
//! A [`Session`] owns the only persistent state of the terminal: the
//! transcript, the pending input, and the prompt label. The host feeds it
//! keystrokes through [`Session::on_input_change`] and submit gestures
//! through [`Session::on_submit`], and renders [`Session::transcript`].
//! The one capability a session borrows from its host is the mode-toggle
//! callback invoked by the `mode` command.

use crate::commands::{self, Reply};
use crate::content;
use crate::line::Line;

/// Callback the host injects for the `mode` command.
pub type ModeToggle = Box<dyn FnMut()>;

pub struct Session {
    transcript: Vec<Line>,
    pending_input: String,
    prompt_label: String,
    /// The banner captured at construction. `clear` restores this exact
    /// line, so the displayed last-login timestamp never refreshes.
    banner: Line,
    mode_toggle: ModeToggle,
}

impl Session {
    /// Create a session whose banner timestamp is the current local time.
    pub fn new(prompt_label: impl Into<String>, mode_toggle: ModeToggle) -> Self {
        let last_login = chrono::Local::now()
            .format("%a %b %e %H:%M:%S %Y")
            .to_string();
        Self::with_last_login(prompt_label, &last_login, mode_toggle)
    }

    /// Create a session with an explicit last-login string.
    pub fn with_last_login(
        prompt_label: impl Into<String>,
        last_login: &str,
        mode_toggle: ModeToggle,
    ) -> Self {
        let banner = content::banner(last_login);
        Self {
            transcript: vec![banner.clone()],
            pending_input: String::new(),
            prompt_label: prompt_label.into(),
            banner,
            mode_toggle,
        }
    }

    /// The transcript, oldest line first. Read-only; the only mutations are
    /// appends from [`Session::on_submit`] and the wholesale reset of `clear`.
    pub fn transcript(&self) -> &[Line] {
        &self.transcript
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn prompt_label(&self) -> &str {
        &self.prompt_label
    }

    /// Replace the pending input. Called by the host on every edit.
    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Submit the pending input.
    ///
    /// In order: echo the prompt and the verbatim input, dispatch, apply the
    /// reply (append lines, reset, or fire the mode toggle), and clear the
    /// pending input. All of it happens within this call, so the host never
    /// observes a partial transcript.
    pub fn on_submit(&mut self) {
        let input = std::mem::take(&mut self.pending_input);
        self.transcript
            .push(Line::prompt_echo(format!("{} {}", self.prompt_label, input)));

        match commands::dispatch(&input) {
            Reply::Lines(lines) => self.transcript.extend(lines),
            Reply::Clear => self.reset(),
            Reply::ToggleMode => (self.mode_toggle)(),
        }
    }

    /// Restore the transcript to the banner captured at construction.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.transcript.push(self.banner.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineKind;
    use std::cell::Cell;
    use std::rc::Rc;

    const PROMPT: &str = "explorer@kprsnt.in:~%";

    fn session() -> Session {
        Session::with_last_login(PROMPT, "Mon Jan  5 09:00:00 2026", Box::new(|| {}))
    }

    fn submit(session: &mut Session, input: &str) {
        session.on_input_change(input);
        session.on_submit();
    }

    #[test]
    fn test_new_session_has_exactly_the_banner() {
        let session = session();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].kind(), LineKind::Banner);
        assert_eq!(session.pending_input(), "");
    }

    #[test]
    fn test_input_change_leaves_transcript_untouched() {
        let mut session = session();
        session.on_input_change("hel");
        session.on_input_change("help");
        assert_eq!(session.pending_input(), "help");
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_submit_echoes_then_responds_then_clears_input() {
        let mut session = session();
        submit(&mut session, "resume");

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].kind(), LineKind::PromptEcho);
        assert_eq!(transcript[1].plain_text(), format!("{PROMPT} resume"));
        assert_eq!(transcript[2].kind(), LineKind::Response);
        assert_eq!(session.pending_input(), "");
    }

    #[test]
    fn test_echo_preserves_input_verbatim() {
        let mut session = session();
        submit(&mut session, "  LS  ");
        assert_eq!(
            session.transcript()[1].plain_text(),
            format!("{PROMPT}   LS  ")
        );
    }

    #[test]
    fn test_clear_restores_the_original_banner() {
        let mut session = session();
        let original_banner = session.transcript()[0].clone();

        submit(&mut session, "about");
        submit(&mut session, "clear");

        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0], original_banner);
    }

    #[test]
    fn test_clear_is_case_insensitive() {
        let mut session = session();
        submit(&mut session, "help");
        submit(&mut session, "CLEAR");
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_mode_invokes_callback_once_and_appends_nothing() {
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        let mut session = Session::with_last_login(
            PROMPT,
            "t",
            Box::new(move || seen.set(seen.get() + 1)),
        );

        submit(&mut session, "mode");
        assert_eq!(count.get(), 1);
        // Only the banner and the echo; no response line.
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1].kind(), LineKind::PromptEcho);

        submit(&mut session, "mode");
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_repeated_commands_append_identical_responses() {
        let mut session = session();
        submit(&mut session, "help");
        submit(&mut session, "help");

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 5);
        assert_eq!(transcript[1], transcript[3]);
        assert_eq!(transcript[2], transcript[4]);
    }

    #[test]
    fn test_transcript_grows_monotonically_for_responses() {
        let mut session = session();
        let mut previous = session.transcript().len();
        for input in ["help", "ls", "about", "nonsense", ""] {
            submit(&mut session, input);
            let now = session.transcript().len();
            assert!(now > previous, "transcript shrank on {input:?}");
            previous = now;
        }
    }

    #[test]
    fn test_unknown_command_appends_error_line() {
        let mut session = session();
        submit(&mut session, "xyzzy");
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[2].kind(), LineKind::Error);
        assert!(transcript[2].plain_text().contains("xyzzy"));
    }
}
