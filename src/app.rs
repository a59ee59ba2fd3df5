//! Main application window.
//! Hosts the flashcard session inside eframe and shows load notices through native dialogs.

use crate::theme::{self, Background};
use eframe::egui;
use flashcards_app::controller::FlashcardSession;
use flashcards_app::display::{CardDisplay, DialogKind, Notice};

/// What the window currently shows; filled in by the session controller.
#[derive(Default)]
struct CardView {
    term: String,
    definition: String,
    answer_buttons_enabled: bool,
    primary_label: String,
    primary_enabled: bool,
    status: String,
    pending_dialog: Option<Notice>,
}

impl CardDisplay for CardView {
    fn show_term(&mut self, text: &str) {
        self.term = text.to_string();
    }

    fn show_definition(&mut self, text: &str) {
        self.definition = text.to_string();
    }

    fn set_buttons_enabled(&mut self, enabled: bool) {
        self.answer_buttons_enabled = enabled;
    }

    fn set_primary_button(&mut self, label: &str, enabled: bool) {
        self.primary_label = label.to_string();
        self.primary_enabled = enabled;
    }

    fn show_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn show_dialog(&mut self, kind: DialogKind, title: &str, message: &str) {
        self.pending_dialog = Some(Notice {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

pub struct FlashcardsApp {
    session: FlashcardSession,
    view: CardView,
    background: Background,
}

impl FlashcardsApp {
    pub fn new(mut session: FlashcardSession, background: Background) -> Self {
        let mut view = CardView::default();
        session.start(&mut view);
        Self {
            session,
            view,
            background,
        }
    }

    fn render_card(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                egui::RichText::new("🌌 Galaxy Flashcards")
                    .size(24.0)
                    .strong()
                    .color(theme::TEXT),
            );
            ui.add_space(12.0);

            egui::Frame::none()
                .fill(theme::CARD)
                .stroke(egui::Stroke::new(1.0, theme::OUTLINE))
                .inner_margin(egui::Margin::symmetric(20.0, 18.0))
                .show(ui, |ui| {
                    ui.set_width(640.0);
                    ui.vertical_centered(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&self.view.term)
                                    .size(32.0)
                                    .strong()
                                    .color(theme::TEXT),
                            )
                            .wrap(),
                        );
                        ui.add_space(12.0);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&self.view.definition)
                                    .size(17.0)
                                    .color(theme::MUTED),
                            )
                            .wrap(),
                        );
                    });
                });
        });
    }

    /// Shows the load notice once the window is up. Blocks until dismissed.
    fn show_pending_dialog(&mut self, ctx: &egui::Context) {
        if self.view.pending_dialog.is_none() {
            return;
        }
        if ctx.cumulative_pass_nr() == 0 {
            ctx.request_repaint();
            return;
        }
        if let Some(notice) = self.view.pending_dialog.take() {
            let level = match notice.kind {
                DialogKind::Warning => rfd::MessageLevel::Warning,
                DialogKind::Error => rfd::MessageLevel::Error,
            };
            rfd::MessageDialog::new()
                .set_level(level)
                .set_title(notice.title.as_str())
                .set_description(notice.message.as_str())
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }
    }
}

impl eframe::App for FlashcardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Store actions to execute after UI rendering
        let mut action_primary = false;
        let mut action_mark: Option<bool> = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::BG))
            .show(ctx, |ui| {
                self.background.paint(ui.painter(), ui.max_rect());

                self.render_card(ui);

                ui.add_space(14.0);
                ui.horizontal(|ui| {
                    // three 154px buttons plus spacing, centered in the window
                    let row_width = 3.0 * 154.0 + 2.0 * 16.0;
                    ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                    ui.spacing_mut().item_spacing.x = 16.0;

                    if theme::accent_button(
                        ui,
                        &self.view.primary_label,
                        theme::ACCENT_BLUE,
                        self.view.primary_enabled,
                    )
                    .clicked()
                    {
                        action_primary = true;
                    }
                    let enabled = self.view.answer_buttons_enabled;
                    if theme::accent_button(ui, "I Got It", theme::GOOD, enabled).clicked() {
                        action_mark = Some(true);
                    }
                    if theme::accent_button(ui, "I Missed It", theme::BAD, enabled).clicked() {
                        action_mark = Some(false);
                    }
                });

                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.view.status)
                            .size(13.0)
                            .color(theme::MUTED),
                    );
                });
            });

        // Execute deferred actions
        if action_primary {
            self.session.press_primary(&mut self.view);
        }
        if let Some(is_correct) = action_mark {
            self.session.mark(is_correct, &mut self.view);
        }

        self.show_pending_dialog(ctx);
    }
}
