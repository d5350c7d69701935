use std::time::Instant;

use eframe::egui;
use neon_core::{AnimationType, NeonConfig, NeonText, Rgba};
use neon_gui::{theme, EguiFrameHost, NeonTextWidget, NeonTheme};
use tracing::{info, warn};

use crate::settings::Settings;

const COLOR_PRESETS: [(&str, Rgba); 6] = [
    ("Cyan", Rgba::CYAN),
    ("Pink", Rgba::PINK),
    ("Green", Rgba::GREEN),
    ("Magenta", Rgba::MAGENTA),
    ("Orange", Rgba::ORANGE),
    ("Yellow", Rgba::YELLOW),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageType {
    Info,
    Success,
    Error,
}

/// A fixed showcase text
struct Showcase {
    label: &'static str,
    text: NeonText<EguiFrameHost>,
}

pub struct NeonApp {
    host: EguiFrameHost,
    showcase: Vec<Showcase>,
    /// The text edited from the side panel
    editor: NeonText<EguiFrameHost>,
    /// Working copy of the editor configuration
    draft: NeonConfig,
    settings: Settings,
    message: Option<(String, MessageType)>,
    /// Accent the theme was last built from
    theme_accent: Option<Rgba>,
}

impl NeonApp {
    pub fn new(settings: Settings) -> Self {
        let mut host = EguiFrameHost::new();
        let now = Instant::now();

        let showcase = vec![
            Showcase {
                label: "pulse",
                text: NeonText::mount(
                    &mut host,
                    NeonConfig::new("Flutter Neon!", Rgba::CYAN)
                        .with_blur_radius(20.0)
                        .with_stroke_width(2.0)
                        .with_animation(AnimationType::Pulse)
                        .with_duration_secs(3),
                    now,
                ),
            },
            Showcase {
                label: "glow + fill",
                text: NeonText::mount(
                    &mut host,
                    NeonConfig::new("OPEN 24/7", Rgba::PINK)
                        .with_font("Monospace")
                        .with_font_size(42.0)
                        .with_text_color(Some(Rgba::WHITE))
                        .with_letter_spacing(4.0),
                    now,
                ),
            },
            Showcase {
                label: "static",
                text: NeonText::mount(
                    &mut host,
                    NeonConfig::new("NO VACANCY", Rgba::GREEN)
                        .with_blur_radius(15.0)
                        .with_animation(AnimationType::None),
                    now,
                ),
            },
        ];

        let draft = settings.config.clone();
        let editor = NeonText::mount(&mut host, draft.clone(), now);
        info!(subscribers = host.subscriber_count(), "neon texts mounted");

        Self {
            host,
            showcase,
            editor,
            draft,
            settings,
            message: Some((
                "Space cycles animation | Ctrl+S saves settings".to_string(),
                MessageType::Info,
            )),
            theme_accent: None,
        }
    }

    fn apply_draft(&mut self) {
        if let Err(e) = self.draft.validate() {
            self.set_message(e.to_string(), MessageType::Error);
            return;
        }
        self.editor.update(&mut self.host, self.draft.clone(), Instant::now());
    }

    fn cycle_animation(&mut self) {
        let next = match self.draft.animation_type {
            AnimationType::Glow => AnimationType::Pulse,
            AnimationType::Pulse => AnimationType::None,
            AnimationType::None => AnimationType::Glow,
        };
        self.draft.animation_type = next;
        self.apply_draft();
        self.set_message(format!("Animation: {next}"), MessageType::Info);
    }

    fn save_settings(&mut self) {
        self.settings.config = self.editor.config().clone();
        match self.settings.save() {
            Ok(path) => {
                info!(path = %path.display(), "settings saved");
                self.set_message(format!("Saved {}", path.display()), MessageType::Success);
            }
            Err(e) => {
                warn!(error = %e, "could not save settings");
                self.set_message(format!("Save failed: {e}"), MessageType::Error);
            }
        }
    }

    fn set_message(&mut self, msg: impl Into<String>, kind: MessageType) {
        self.message = Some((msg.into(), kind));
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Leave keys alone while a text field has focus
        if ctx.wants_keyboard_input() {
            return;
        }
        let (cycle, save) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.modifiers.command && i.key_pressed(egui::Key::S),
            )
        });
        if cycle {
            self.cycle_animation();
        }
        if save {
            self.save_settings();
        }
    }

    fn editor_panel(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;
        let d = &mut self.draft;

        ui.heading("EDITOR");
        ui.separator();

        ui.label("Text");
        changed |= ui.text_edit_singleline(&mut d.text).changed();

        ui.label("Neon color");
        ui.horizontal_wrapped(|ui| {
            for (name, color) in COLOR_PRESETS {
                let label = egui::RichText::new(name).color(theme::to_color32(color));
                if ui.selectable_label(d.neon_color == color, label).clicked() {
                    d.neon_color = color;
                    changed = true;
                }
            }
        });

        let mut fill = d.text_color.is_some();
        if ui.checkbox(&mut fill, "Inner fill").changed() {
            d.text_color = fill.then_some(Rgba::WHITE);
            changed = true;
        }
        ui.add_enabled_ui(fill, |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut d.alpha, 0..=255).text("alpha"))
                .changed();
        });

        let mut size = d.resolved_font_size();
        if ui
            .add(egui::Slider::new(&mut size, 8.0..=96.0).text("font size"))
            .changed()
        {
            d.font_size = Some(size);
            changed = true;
        }
        changed |= ui
            .add(egui::Slider::new(&mut d.blur_radius, 1.0..=40.0).text("blur"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut d.stroke_width, 0.5..=6.0).text("stroke"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut d.letter_spacing, 0.0..=12.0).text("spacing"))
            .changed();

        ui.separator();
        ui.label("Animation");
        ui.horizontal(|ui| {
            for kind in AnimationType::ALL {
                if ui
                    .radio_value(&mut d.animation_type, kind, kind.name())
                    .changed()
                {
                    changed = true;
                }
            }
        });
        let mut secs = d.animation_duration.as_secs().max(1);
        if ui
            .add(egui::Slider::new(&mut secs, 1..=10).text("seconds"))
            .changed()
        {
            d.animation_duration = std::time::Duration::from_secs(secs);
            changed = true;
        }

        if changed {
            self.apply_draft();
        }

        ui.separator();
        if ui.button("Save").clicked() {
            self.save_settings();
        }
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let ticking = if self.host.is_active() { "TICKING" } else { "IDLE" };
            ui.label(egui::RichText::new(format!("[{ticking}]")).color(theme::PRIMARY));
            ui.label(
                egui::RichText::new(format!("{} subscribers", self.host.subscriber_count()))
                    .color(theme::TEXT_DIM),
            );
            if let Some((ref msg, kind)) = self.message {
                let color = match kind {
                    MessageType::Info => theme::TEXT,
                    MessageType::Success => theme::PRIMARY,
                    MessageType::Error => theme::DANGER,
                };
                ui.label(egui::RichText::new(msg).color(color));
            }
        });
    }

    fn teardown(&mut self) {
        for item in &mut self.showcase {
            item.text.teardown();
        }
        self.editor.teardown();
    }
}

impl eframe::App for NeonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Rebuild the theme when the editor's neon color changes
        let accent = self.editor.config().neon_color;
        if self.theme_accent != Some(accent) {
            NeonTheme::apply(ctx, accent);
            self.theme_accent = Some(accent);
        }

        self.handle_keyboard(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar(ui);
        });

        egui::SidePanel::right("editor")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                self.editor_panel(ui);
            });

        let now = Instant::now();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                for item in &self.showcase {
                    ui.label(egui::RichText::new(item.label).color(theme::TEXT_DIM).small());
                    NeonTextWidget::show(ui, &item.text.layers(now));
                    ui.add_space(48.0);
                }
                ui.separator();
                ui.add_space(32.0);
                NeonTextWidget::show(ui, &self.editor.layers(now));
            });
        });

        // Next frame only while something animates
        self.host.request_frame_if_active(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.teardown();
        info!(subscribers = self.host.subscriber_count(), "neon texts torn down");
    }
}
