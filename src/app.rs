//! Application state and core logic

use crate::clipboard::ClipboardProvider;
use crate::config::TuiConfig;
use crate::state::{
    confirmation_entries, confirmation_text, AppState, FocusTarget, Transition, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// Target for the success view's copy action
    clipboard: Box<dyn ClipboardProvider>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance showing an empty registration form
    pub fn new(config: TuiConfig, clipboard: Box<dyn ClipboardProvider>) -> Self {
        Self {
            state: AppState::default(),
            config,
            clipboard,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Character drawn for each hidden password character
    pub fn password_mask(&self) -> char {
        self.config.password_mask()
    }

    /// Navigate to the transition's view, handing over its state
    pub fn navigate(&mut self, transition: Transition) {
        let target = transition.target();
        tracing::info!(
            "Navigating {} -> {}",
            self.state.current_view.path(),
            target.path()
        );
        self.state.status_message = None;
        self.state.apply(transition);
    }

    /// Return to the form view. The submitted draft is not kept.
    pub fn go_back(&mut self) {
        self.navigate(Transition::Form);
    }

    /// Handle a key press for the current view
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Form => self.handle_form_key(key)?,
            View::Success => self.handle_success_key(key)?,
        }
        Ok(())
    }

    /// Handle keys in the registration form
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let form = &mut self.state.form;
        let focus = form.focus();
        // Shift never changes what a key means here
        let modifiers = key.modifiers.difference(KeyModifiers::SHIFT);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if modifiers == KeyModifiers::CONTROL => {
                self.submit_form();
            }
            KeyCode::Char('t') if modifiers == crate::platform::SHORTCUT_MODIFIER => {
                form.toggle_password();
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left => form.cycle_select(false),
            KeyCode::Right => form.cycle_select(true),
            KeyCode::Enter => match focus {
                FocusTarget::PasswordToggle => form.toggle_password(),
                FocusTarget::Submit => self.submit_form(),
                FocusTarget::Field(_) => form.next_field(),
            },
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c) if is_text_input(modifiers) => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Validate and, when the draft is clean, hand it to the success view
    fn submit_form(&mut self) {
        match self.state.form.submit() {
            Some(transition) => self.navigate(transition),
            None => {
                let form = &mut self.state.form;
                if let Some(first) = form.errors.fields().first() {
                    form.set_focus(FocusTarget::Field(*first));
                }
                let count = form.errors.len();
                self.state.status_message = Some(if count == 1 {
                    "1 field needs attention".to_string()
                } else {
                    format!("{count} fields need attention")
                });
            }
        }
    }

    /// Handle keys in the success view
    fn handle_success_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => self.go_back(),
            KeyCode::Char('y') => self.copy_confirmation(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Copy the confirmation list to the clipboard, reporting the outcome in
    /// the status bar
    pub fn copy_confirmation(&mut self) {
        let entries = confirmation_entries(self.state.submitted.as_ref());
        if entries.is_empty() {
            self.state.status_message = Some("Nothing to copy".to_string());
            return;
        }

        let text = confirmation_text(&entries);
        match self.clipboard.set_text(text) {
            Ok(()) => {
                self.state.status_message = Some(format!("Copied {} fields", entries.len()));
            }
            Err(err) => {
                tracing::warn!("Copy failed: {err}");
                self.state.status_message = Some(format!("Copy failed: {err}"));
            }
        }
    }

    /// Handle mouse events (only delivered when mouse capture is enabled)
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.current_view != View::Form {
            return Ok(());
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => self.state.form.next_field(),
            MouseEventKind::ScrollUp => self.state.form.prev_field(),
            _ => {}
        }
        Ok(())
    }
}

/// Plain or AltGr-composed characters. AltGr arrives as Ctrl+Alt on Windows.
fn is_text_input(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::CONTROL | KeyModifiers::ALT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardError, MockClipboardProvider};
    use crate::state::{Country, Field, RegistrationDraft};
    use crossterm::event::KeyEventState;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(
            TuiConfig::default(),
            Box::new(MockClipboardProvider::new()),
        )
    }

    fn app_with_clipboard(clipboard: MockClipboardProvider) -> App {
        App::new(TuiConfig::default(), Box::new(clipboard))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn ada() -> RegistrationDraft {
        RegistrationDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@x.com".to_string(),
            password: "secret1".to_string(),
            show_password: false,
            phone: "+911234567890".to_string(),
            country: Some(Country::India),
            city: "Delhi".to_string(),
            pan: "ABCDE1234F".to_string(),
            aadhar: "123456789012".to_string(),
        }
    }

    /// Fill the form by keyboard in focus order, ending on the submit row
    fn fill_by_keyboard(app: &mut App, password: &str) {
        for text in [
            "Ada",
            "Lovelace",
            "ada",
            "ada@x.com",
            "+911234567890",
            "ABCDE1234F",
            "123456789012",
        ] {
            type_text(app, text);
            press(app, KeyCode::Tab);
        }
        type_text(app, password);
        press(app, KeyCode::Tab); // password toggle
        press(app, KeyCode::Tab); // country
        press(app, KeyCode::Right); // India
        press(app, KeyCode::Tab); // city
        press(app, KeyCode::Right); // Chandigarh
        press(app, KeyCode::Right); // Delhi
        press(app, KeyCode::Tab); // submit
    }

    mod form_view {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_form() {
            let app = app();
            assert_eq!(app.state.current_view, View::Form);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_valid_submission_reaches_success_view() {
            let mut app = app();
            fill_by_keyboard(&mut app, "secret1");
            assert_eq!(app.state.form.focus(), FocusTarget::Submit);
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.current_view, View::Success);
            assert_eq!(app.state.submitted, Some(ada()));

            let entries = confirmation_entries(app.state.submitted.as_ref());
            assert_eq!(entries.len(), 11);
            assert!(entries.contains(&("showPassword".to_string(), "false".to_string())));
        }

        #[test]
        fn test_short_password_stays_on_form() {
            let mut app = app();
            fill_by_keyboard(&mut app, "abc");
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.current_view, View::Form);
            assert!(app.state.submitted.is_none());
            assert_eq!(app.state.form.errors.fields(), vec![Field::Password]);
            assert_eq!(
                app.state.form.draft,
                RegistrationDraft {
                    password: "abc".to_string(),
                    ..ada()
                }
            );
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("1 field needs attention")
            );
        }

        #[test]
        fn test_ctrl_s_submits_from_any_field() {
            let mut app = app();
            press_ctrl(&mut app, 's');
            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(app.state.form.errors.len(), 10);
            assert_eq!(app.state.form.draft.first_name, "");
        }

        #[test]
        fn test_ctrl_t_toggles_password_visibility() {
            let mut app = app();
            type_text(&mut app, "Ada");
            app.handle_key(KeyEvent::new(
                KeyCode::Char('t'),
                crate::platform::SHORTCUT_MODIFIER,
            ))
            .unwrap();
            assert!(app.state.form.draft.show_password);
            assert_eq!(app.state.form.draft.first_name, "Ada");
            assert!(app.state.form.errors.is_empty());
        }

        #[test]
        fn test_enter_on_toggle_row_flips_visibility() {
            let mut app = app();
            app.state.form.set_focus(FocusTarget::PasswordToggle);
            press(&mut app, KeyCode::Enter);
            assert!(app.state.form.draft.show_password);
            press(&mut app, KeyCode::Enter);
            assert!(!app.state.form.draft.show_password);
        }

        #[test]
        fn test_enter_on_field_moves_focus() {
            let mut app = app();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.focus(), FocusTarget::Field(Field::LastName));
        }

        #[test]
        fn test_control_chars_are_not_typed() {
            let mut app = app();
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT))
                .unwrap();
            assert_eq!(app.state.form.draft.first_name, "");
        }

        #[test]
        fn test_altgr_chars_are_typed() {
            let mut app = app();
            app.state.form.set_focus(FocusTarget::Field(Field::Email));
            type_text(&mut app, "ada");
            app.handle_key(KeyEvent::new(
                KeyCode::Char('@'),
                KeyModifiers::CONTROL | KeyModifiers::ALT,
            ))
            .unwrap();
            assert_eq!(app.state.form.draft.email, "ada@");
        }

        #[test]
        fn test_ctrl_and_super_chars_are_not_typed() {
            let mut app = app();
            press_ctrl(&mut app, 'x');
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::SUPER))
                .unwrap();
            assert_eq!(app.state.form.draft.first_name, "");
        }

        #[test]
        fn test_shifted_chars_are_typed() {
            let mut app = app();
            app.handle_key(KeyEvent::new_with_kind_and_state(
                KeyCode::Char('A'),
                KeyModifiers::SHIFT,
                crossterm::event::KeyEventKind::Press,
                KeyEventState::NONE,
            ))
            .unwrap();
            assert_eq!(app.state.form.draft.first_name, "A");
        }

        #[test]
        fn test_country_change_by_keyboard_resets_city() {
            let mut app = app();
            app.state.form.set_country(Some(Country::India));
            assert!(app.state.form.select_city("Delhi"));
            app.state.form.set_focus(FocusTarget::Field(Field::Country));
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.form.draft.country, Some(Country::Usa));
            assert_eq!(app.state.form.draft.city, "");
            assert_eq!(app.state.form.available_cities(), Country::Usa.cities());
        }

        #[test]
        fn test_esc_quits() {
            let mut app = app();
            press(&mut app, KeyCode::Esc);
            assert!(app.should_quit());
        }

        #[test]
        fn test_scroll_moves_focus() {
            let mut app = app();
            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })
            .unwrap();
            assert_eq!(app.state.form.focus(), FocusTarget::Field(Field::LastName));
        }
    }

    mod success_view {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_back_returns_fresh_form() {
            let mut app = app();
            app.state.form.set_text(Field::Username, "ada");
            app.navigate(Transition::Success(Some(ada())));
            press(&mut app, KeyCode::Char('b'));

            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(app.state.form.draft, RegistrationDraft::default());
            assert!(app.state.submitted.is_none());
        }

        #[test]
        fn test_enter_and_esc_go_back() {
            for code in [KeyCode::Enter, KeyCode::Esc] {
                let mut app = app();
                app.navigate(Transition::Success(Some(ada())));
                press(&mut app, code);
                assert_eq!(app.state.current_view, View::Form);
                assert!(!app.should_quit());
            }
        }

        #[test]
        fn test_without_draft_shows_nothing() {
            let mut app = app();
            app.navigate(Transition::Success(None));
            assert_eq!(app.state.current_view, View::Success);
            assert!(confirmation_entries(app.state.submitted.as_ref()).is_empty());
        }

        #[test]
        fn test_copy_sends_lines_to_clipboard() {
            let mut clipboard = MockClipboardProvider::new();
            clipboard
                .expect_set_text()
                .withf(|text| {
                    text.starts_with("firstName: Ada\n") && text.ends_with("aadhar: 123456789012")
                })
                .times(1)
                .returning(|_| Ok(()));

            let mut app = app_with_clipboard(clipboard);
            app.navigate(Transition::Success(Some(ada())));
            press(&mut app, KeyCode::Char('y'));
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Copied 11 fields")
            );
        }

        #[test]
        fn test_copy_failure_is_reported() {
            let mut clipboard = MockClipboardProvider::new();
            clipboard
                .expect_set_text()
                .returning(|_| Err(ClipboardError::Unavailable(arboard::Error::ClipboardNotSupported)));

            let mut app = app_with_clipboard(clipboard);
            app.navigate(Transition::Success(Some(ada())));
            app.copy_confirmation();
            let message = app.state.status_message.clone().unwrap_or_default();
            assert!(message.starts_with("Copy failed"), "{message}");
            assert_eq!(app.state.current_view, View::Success);
        }

        #[test]
        fn test_copy_without_draft_skips_clipboard() {
            let mut clipboard = MockClipboardProvider::new();
            clipboard.expect_set_text().times(0);

            let mut app = app_with_clipboard(clipboard);
            app.navigate(Transition::Success(None));
            app.copy_confirmation();
            assert_eq!(app.state.status_message.as_deref(), Some("Nothing to copy"));
        }

        #[test]
        fn test_q_quits() {
            let mut app = app();
            app.navigate(Transition::Success(None));
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_navigation_clears_status_message() {
            let mut app = app();
            app.state.status_message = Some("stale".to_string());
            app.navigate(Transition::Success(None));
            assert!(app.state.status_message.is_none());
        }
    }
}
