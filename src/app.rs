//! Application state and core logic

use crate::config::IntakeConfig;
use crate::platform::is_contact_chord;
use crate::state::{
    footer_button_at, progress_marker_at, AppState, FieldKind, FooterButton, Notice,
};
use crate::submit::{
    begin_submission, contact_dial_uri, contact_mail_uri, dispatch, finish_submission,
    SubmissionOutcome, SubmissionSink, SubmitError,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Contact details and submission target
    pub config: Arc<IntakeConfig>,
    /// Where applications and contact URIs go
    sink: Arc<dyn SubmissionSink>,
    /// Submission running in the background
    pending: Option<JoinHandle<SubmissionOutcome>>,
    /// Opener launched by "Email Us" / "Call Us", with the URI it was given
    contact: Option<JoinHandle<(String, Result<(), SubmitError>)>>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    /// Terminal size for click mapping (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: IntakeConfig, sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::new(),
            config: Arc::new(config),
            sink,
            pending: None,
            contact: None,
            quit: false,
            status_message: None,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn is_submitting(&self) -> bool {
        self.state.wizard.submitting
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notices are modal
        if self.state.has_notices() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        // Quick-contact shortcuts work from every step
        if is_contact_chord(key.modifiers) {
            match key.code {
                KeyCode::Char('e') => {
                    self.email_us();
                    return Ok(());
                }
                KeyCode::Char('t') => {
                    self.call_us();
                    return Ok(());
                }
                _ => {}
            }
        }

        let on_review = self.state.step().is_last();
        let active_kind = self.state.active_field().map(|f| f.kind());
        let on_choice = active_kind == Some(FieldKind::Choice);

        match key.code {
            // Progress markers
            KeyCode::F(n @ 1..=5) => {
                self.state.jump_to(usize::from(n - 1));
            }
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            KeyCode::Esc | KeyCode::PageUp => {
                self.state.retreat();
            }
            KeyCode::PageDown => self.primary_action(),
            KeyCode::Enter if active_kind == Some(FieldKind::Multiline) => {
                self.state.form_input_char('\n');
            }
            KeyCode::Enter => self.primary_action(),
            KeyCode::Char(' ') if on_review => self.state.toggle_consent(),
            KeyCode::Right | KeyCode::Char(' ') if on_choice => self.state.form_cycle_choice(true),
            KeyCode::Left if on_choice => self.state.form_cycle_choice(false),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.form_input_char(c)
            }
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event: progress markers jump, footer buttons act
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_notices() {
            return Ok(());
        }
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(());
        }

        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        if let Some(step) = progress_marker_at(mouse.column, mouse.row, width, height) {
            self.state.jump_to(step.index());
            return Ok(());
        }

        match footer_button_at(mouse.column, mouse.row, width, height) {
            Some(FooterButton::Back) => {
                self.state.retreat();
            }
            Some(FooterButton::Primary) => self.primary_action(),
            None => {}
        }
        Ok(())
    }

    /// Continue on steps 0-3, Send Application on Review
    fn primary_action(&mut self) {
        if self.state.step().is_last() {
            self.submit_application();
        } else if !self.state.advance() {
            tracing::debug!("continue blocked on {:?}", self.state.step());
        }
    }

    /// Start a submission in the background. Guard failures other than
    /// missing consent are ignored, the affordance is disabled for them.
    pub fn submit_application(&mut self) {
        let payload = match begin_submission(&mut self.state) {
            Ok(payload) => payload,
            Err(SubmitError::ConsentMissing) => {
                self.state
                    .push_notice(Notice::blocking(SubmitError::ConsentMissing.to_string()));
                return;
            }
            Err(e) => {
                tracing::debug!("submission ignored: {e}");
                return;
            }
        };

        let sink = Arc::clone(&self.sink);
        let config = Arc::clone(&self.config);
        self.pending = Some(tokio::spawn(async move {
            dispatch(sink.as_ref(), &config, payload).await
        }));
    }

    /// Collect whatever background work has finished
    pub async fn poll_tasks(&mut self) {
        self.poll_submission().await;
        if self.contact.as_ref().is_some_and(|h| h.is_finished()) {
            self.wait_for_contact().await;
        }
    }

    /// Collect a finished submission, if any
    pub async fn poll_submission(&mut self) {
        if self.pending.as_ref().is_some_and(|h| h.is_finished()) {
            self.wait_for_submission().await;
        }
    }

    /// Wait for the outstanding submission and report it
    pub async fn wait_for_submission(&mut self) {
        let Some(handle) = self.pending.take() else {
            return;
        };
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("submission task ended abnormally: {e}");
                SubmissionOutcome::Failed(e.to_string())
            }
        };
        finish_submission(&mut self.state, &outcome);
    }

    /// "Email Us": open a blank mail to the contact address
    fn email_us(&mut self) {
        let uri = contact_mail_uri(&self.config);
        self.open_contact_uri(uri, "Opening mail client...");
    }

    /// "Call Us": dial the contact number
    fn call_us(&mut self) {
        let uri = contact_dial_uri(&self.config);
        self.open_contact_uri(uri, "Opening dialer...");
    }

    /// Launch the opener in the background so drawing continues while the
    /// desktop handler starts up
    fn open_contact_uri(&mut self, uri: String, status: &str) {
        if self.contact.is_some() {
            tracing::debug!("opener still running, ignoring {uri}");
            return;
        }
        self.status_message = Some(status.to_string());

        let sink = Arc::clone(&self.sink);
        self.contact = Some(tokio::spawn(async move {
            let result = sink.open_uri(&uri).await;
            (uri, result)
        }));
    }

    /// Wait for the outstanding opener and report a failure
    pub async fn wait_for_contact(&mut self) {
        let Some(handle) = self.contact.take() else {
            return;
        };
        let (uri, error) = match handle.await {
            Ok((_, Ok(()))) => return,
            Ok((uri, Err(e))) => (uri, e.to_string()),
            Err(e) => ("the contact link".to_string(), e.to_string()),
        };
        tracing::warn!("could not open {uri}: {error}");
        self.status_message = None;
        self.state.push_notice(Notice::failure(format!(
            "Could not open {uri}. Reach us at {} or {}.",
            self.config.contact_email, self.config.contact_phone
        )));
    }
}
