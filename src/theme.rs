//! Galaxy look: colour palette, dark visuals and the star field behind the card.
//! Purely cosmetic, nothing here touches session state.

use eframe::egui::{self, Color32, Painter, Pos2, Rect, Stroke, Visuals};
use rand::Rng;
use rand::seq::SliceRandom;

pub const BG: Color32 = Color32::from_rgb(0x07, 0x08, 0x14);
pub const CARD: Color32 = Color32::from_rgb(0x0E, 0x10, 0x30);
pub const TEXT: Color32 = Color32::from_rgb(0xE8, 0xE9, 0xFF);
pub const MUTED: Color32 = Color32::from_rgb(0xA8, 0xAC, 0xD6);
pub const OUTLINE: Color32 = Color32::from_rgb(0x23, 0x26, 0x5A);
pub const BTN_BG: Color32 = Color32::from_rgb(0x1B, 0x1F, 0x55);
pub const BTN_HOVER: Color32 = Color32::from_rgb(0x26, 0x2B, 0x6A);
pub const BTN_DISABLED: Color32 = Color32::from_rgb(0x14, 0x17, 0x38);
pub const ACCENT_PURPLE: Color32 = Color32::from_rgb(0x7C, 0x3A, 0xED);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
pub const ACCENT_RED: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);
pub const GOOD: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);
pub const BAD: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

const NEBULA: [Color32; 4] = [
    Color32::from_rgb(0x0D, 0x11, 0x33),
    Color32::from_rgb(0x0B, 0x12, 0x38),
    Color32::from_rgb(0x13, 0x0A, 0x2E),
    Color32::from_rgb(0x12, 0x0A, 0x25),
];
const STARS: [Color32; 4] = [
    Color32::from_rgb(0xFF, 0xFF, 0xFF),
    Color32::from_rgb(0xDD, 0xE3, 0xFF),
    Color32::from_rgb(0xC7, 0xD2, 0xFE),
    Color32::from_rgb(0xFD, 0xE6, 0x8A),
];
const STAR_SIZES: [f32; 6] = [1.0, 1.0, 1.0, 2.0, 2.0, 3.0];

/// Dark visuals with the galaxy palette.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = BG;
    visuals.window_fill = CARD;
    visuals.override_text_color = Some(TEXT);
    visuals.widgets.inactive.weak_bg_fill = BTN_BG;
    visuals.widgets.inactive.bg_fill = BTN_BG;
    visuals.widgets.hovered.weak_bg_fill = BTN_HOVER;
    visuals.widgets.hovered.bg_fill = BTN_HOVER;
    visuals.widgets.active.weak_bg_fill = BTN_HOVER;
    visuals.widgets.noninteractive.weak_bg_fill = BTN_DISABLED;
    ctx.set_visuals(visuals);
}

enum Shape {
    Blob { center: Pos2, radius: f32, color: Color32 },
    Star { at: Pos2, size: f32, color: Color32 },
    Streak { from: Pos2, to: Pos2, color: Color32 },
}

/// Randomly generated background, laid out once for a fixed window size.
pub struct Background {
    shapes: Vec<Shape>,
}

impl Background {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let (w, h) = if width < 10.0 || height < 10.0 {
            (760.0, 520.0)
        } else {
            (width, height)
        };
        let mut shapes = Vec::with_capacity(260);

        // nebula blobs
        for _ in 0..10 {
            shapes.push(Shape::Blob {
                center: Pos2::new(rng.gen_range(0.0..=w), rng.gen_range(0.0..=h)),
                radius: rng.gen_range(80.0..=180.0),
                color: *NEBULA.choose(rng).unwrap_or(&NEBULA[0]),
            });
        }

        for _ in 0..240 {
            shapes.push(Shape::Star {
                at: Pos2::new(rng.gen_range(0.0..=w), rng.gen_range(0.0..=h)),
                size: *STAR_SIZES.choose(rng).unwrap_or(&1.0),
                color: *STARS.choose(rng).unwrap_or(&STARS[0]),
            });
        }

        let accents = [ACCENT_PURPLE, ACCENT_BLUE, ACCENT_RED];
        for _ in 0..10 {
            let from = Pos2::new(rng.gen_range(0.0..=w), rng.gen_range(0.0..=h));
            let to = from + egui::vec2(rng.gen_range(40.0..=140.0), rng.gen_range(-12.0..=12.0));
            shapes.push(Shape::Streak {
                from,
                to,
                color: *accents.choose(rng).unwrap_or(&ACCENT_BLUE),
            });
        }

        Self { shapes }
    }

    pub fn paint(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, BG);
        let origin = rect.min.to_vec2();
        for shape in &self.shapes {
            match *shape {
                Shape::Blob { center, radius, color } => {
                    painter.circle_filled(center + origin, radius, color);
                }
                Shape::Star { at, size, color } => {
                    painter.circle_filled(at + origin, size / 2.0, color);
                }
                Shape::Streak { from, to, color } => {
                    painter.line_segment([from + origin, to + origin], Stroke::new(2.0, color));
                }
            }
        }
    }
}

/// A button wrapped in a thin accent-coloured border.
pub fn accent_button(
    ui: &mut egui::Ui,
    text: &str,
    accent: Color32,
    enabled: bool,
) -> egui::Response {
    egui::Frame::none()
        .fill(accent)
        .inner_margin(2.0)
        .show(ui, |ui| {
            let mut button =
                egui::Button::new(egui::RichText::new(text).strong().size(15.0).color(TEXT))
                    .min_size(egui::vec2(150.0, 40.0));
            // hover colour comes from the visuals, only disabled needs its own fill
            if !enabled {
                button = button.fill(BTN_DISABLED);
            }
            ui.add_enabled(enabled, button)
        })
        .inner
}
