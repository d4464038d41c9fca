use eframe::egui;

use super::theme::Theme;
use crate::core::models::{
    ChatTurn,
    Speaker,
};

pub const GREETING: &str = "Namaste! I am StudyWise AI. To help you better, could you tell me \
                            your current academic background and your dream study destination?";
pub const APOLOGY: &str = "Oops, something went wrong. Let me try again.";

const INPUT_HINT: &str = "Tell me about your GPA, budget, or destination...";

/// Chat state machine: idle or awaiting one in-flight reply. The user turn
/// is appended before the request resolves, so it is visible immediately.
pub struct ConsultantView {
    pub transcript: Vec<ChatTurn>,
    pub input: String,
    pub awaiting_reply: bool,
}

impl Default for ConsultantView {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsultantView {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatTurn::assistant(GREETING)],
            input: String::new(),
            awaiting_reply: false,
        }
    }

    /// Accepts the pending input as a user turn. Returns the transcript to
    /// send when a request should go out; blank input and in-flight requests
    /// are inert.
    pub fn submit(&mut self) -> Option<Vec<ChatTurn>> {
        if self.awaiting_reply || self.input.trim().is_empty() {
            return None;
        }

        self.transcript.push(ChatTurn::user(std::mem::take(&mut self.input)));
        self.awaiting_reply = true;

        Some(self.transcript.clone())
    }

    /// Either way exactly one assistant turn lands: the reply on success,
    /// the fixed apology on failure.
    pub fn apply_reply(&mut self, result: Result<String, String>) {
        let turn = match result {
            Ok(text) => ChatTurn::assistant(text),
            Err(e) => {
                eprintln!("[Gemini] Consultation failed: {}", e);
                ChatTurn::assistant(APOLOGY)
            }
        };

        self.transcript.push(turn);
        self.awaiting_reply = false;
    }

    /// Returns the transcript to dispatch when the user sent a message.
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> Option<Vec<ChatTurn>> {
        let mut request = None;

        ui.vertical_centered(|ui| {
            ui.heading(theme.heading(ui.ctx(), "Smart Counselor"));
            ui.label(
                egui::RichText::new("Step-by-step study abroad guidance")
                    .color(theme.subtle(ui.ctx())),
            );
        });
        ui.add_space(8.0);

        let input_height = 46.0;
        let transcript_height = ui.available_height() - input_height;

        egui::ScrollArea::vertical()
            .id_salt("consultant_transcript")
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .max_height(transcript_height)
            .show(ui, |ui| {
                for turn in &self.transcript {
                    chat_bubble(ui, theme, turn);
                    ui.add_space(6.0);
                }

                if self.awaiting_reply {
                    typing_indicator(ui, theme);
                }
            });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let send_width = 70.0;
            let edit = egui::TextEdit::singleline(&mut self.input)
                .hint_text(INPUT_HINT)
                .desired_width(ui.available_width() - send_width - 10.0);
            let response = ui.add(edit);

            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let send_clicked = ui
                .add_enabled(
                    !self.awaiting_reply,
                    egui::Button::new("Send").min_size(egui::vec2(send_width, 32.0)),
                )
                .clicked();

            if enter_pressed || send_clicked {
                request = self.submit();
                if request.is_some() {
                    response.request_focus();
                }
            }
        });

        request
    }
}

fn chat_bubble(ui: &mut egui::Ui, theme: &Theme, turn: &ChatTurn) {
    let is_user = turn.speaker == Speaker::User;
    let max_width = ui.available_width() * 0.85;

    let layout = if is_user {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };

    ui.with_layout(layout, |ui| {
        let fill = if is_user { theme.bubble_user(ui.ctx()) } else { theme.card(ui.ctx()) };

        egui::Frame::new()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, theme.card_border(ui.ctx())))
            .corner_radius(10.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.label(&turn.text);
                    ui.label(
                        egui::RichText::new(turn.sent_at.format("%H:%M").to_string())
                            .small()
                            .color(theme.subtle(ui.ctx())),
                    );
                });
            });
    });
}

fn typing_indicator(ui: &mut egui::Ui, theme: &Theme) {
    ui.with_layout(egui::Layout::left_to_right(egui::Align::TOP), |ui| {
        egui::Frame::new()
            .fill(theme.card(ui.ctx()))
            .stroke(egui::Stroke::new(1.0, theme.card_border(ui.ctx())))
            .corner_radius(10.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.add(egui::Spinner::new().size(14.0));
                ui.label(egui::RichText::new("Thinking...").color(theme.subtle(ui.ctx())));
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_seeds_with_the_greeting() {
        let view = ConsultantView::new();

        assert_eq!(view.transcript.len(), 1);
        assert_eq!(view.transcript[0].speaker, Speaker::Assistant);
        assert_eq!(view.transcript[0].text, GREETING);
        assert!(!view.awaiting_reply);
    }

    #[test]
    fn successful_sends_grow_the_transcript_by_two() {
        let mut view = ConsultantView::new();

        for n in 1..=3usize {
            view.input = format!("question {}", n);
            let request = view.submit().expect("non-blank input should dispatch");

            assert_eq!(request.len(), 2 * n);
            assert!(view.awaiting_reply);

            view.apply_reply(Ok(format!("answer {}", n)));

            assert_eq!(view.transcript.len(), 1 + 2 * n);
            assert!(!view.awaiting_reply);
        }

        // Turns alternate after the greeting.
        for (i, turn) in view.transcript.iter().enumerate().skip(1) {
            let expected = if i % 2 == 1 { Speaker::User } else { Speaker::Assistant };
            assert_eq!(turn.speaker, expected);
        }
    }

    #[test]
    fn failed_sends_append_the_apology_turn() {
        let mut view = ConsultantView::new();

        view.input = "Can I get into MIT with a 6.0 CGPA?".to_string();
        view.submit().expect("should dispatch");
        view.apply_reply(Err("network unreachable".to_string()));

        assert_eq!(view.transcript.len(), 3);
        assert_eq!(view.transcript[2].speaker, Speaker::Assistant);
        assert_eq!(view.transcript[2].text, APOLOGY);
        assert!(!view.awaiting_reply);
    }

    #[test]
    fn blank_input_never_changes_the_transcript() {
        let mut view = ConsultantView::new();

        for blank in ["", "   ", "\t\n"] {
            view.input = blank.to_string();
            assert!(view.submit().is_none());
            assert_eq!(view.transcript.len(), 1);
            assert_eq!(view.input, blank, "rejected input is preserved");
        }
    }

    #[test]
    fn submission_is_inert_while_awaiting_a_reply() {
        let mut view = ConsultantView::new();

        view.input = "first".to_string();
        view.submit().expect("should dispatch");

        view.input = "second".to_string();
        assert!(view.submit().is_none());
        assert_eq!(view.transcript.len(), 2);
        assert_eq!(view.input, "second");
    }

    #[test]
    fn user_text_is_forwarded_verbatim() {
        let mut view = ConsultantView::new();

        view.input = "  padded question  ".to_string();
        let request = view.submit().expect("should dispatch");

        assert_eq!(request.last().map(|t| t.text.as_str()), Some("  padded question  "));
        assert!(view.input.is_empty());
    }
}
