//! DeskCalc application window

use deskcalc::keypad;
use deskcalc::{CalculatorState, Token};
use deskcore::repaint::RepaintController;
use deskcore::safety::catch_or;
use deskcore::theme::{menu_bar, DeskColors, DeskTheme};
use egui::Context;

pub struct DeskCalcApp {
    calc: CalculatorState,
    theme: DeskTheme,
    show_about: bool,
    repaint: RepaintController,
}

impl DeskCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, theme: DeskTheme) -> Self {
        Self {
            calc: CalculatorState::new(),
            theme,
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display_height = self.theme.font_size_display * 1.8;
        egui::Frame::none()
            .fill(DeskColors::WHITE)
            .stroke(egui::Stroke::new(1.0, DeskColors::BLACK))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.set_min_height(display_height);
                ui.set_max_height(display_height);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.calc.display())
                            .font(self.theme.display_font())
                            .color(DeskColors::BLACK),
                    );
                });
            });
    }

    /// Draw the keypad and return the token of the button clicked, if any.
    fn render_keypad(&self, ui: &mut egui::Ui) -> Option<Token> {
        let spacing = ui.spacing().item_spacing;
        let cols = keypad::COLS as f32;
        let rows = keypad::ROWS as f32;
        let btn_w = (ui.available_width() - spacing.x * (cols - 1.0)) / cols;
        let btn_h = ((ui.available_height() - spacing.y * (rows - 1.0)) / rows).max(28.0);

        let mut pressed = None;
        for row in keypad::rows() {
            ui.horizontal(|ui| {
                for token in row {
                    let label = egui::RichText::new(token.label()).strong();
                    if ui.add_sized([btn_w, btn_h], egui::Button::new(label)).clicked() {
                        pressed = Some(*token);
                    }
                }
            });
        }
        pressed
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("+ - * / evaluate left to right.");
                ui.label("C clears everything, CE the entry.");
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for DeskCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame();

        let pressed = catch_or(None, || {
            egui::TopBottomPanel::top("menu").show(ctx, |ui| {
                menu_bar(ui, |ui| {
                    ui.menu_button("help", |ui| {
                        if ui.button("about").clicked() {
                            self.show_about = true;
                            ui.close_menu();
                        }
                    });
                });
            });

            let pressed = egui::CentralPanel::default()
                .frame(
                    egui::Frame::none()
                        .fill(DeskColors::WHITE)
                        .inner_margin(egui::Margin::same(self.theme.window_padding)),
                )
                .show(ctx, |ui| {
                    self.render_display(ui);
                    ui.add_space(self.theme.item_spacing);
                    self.render_keypad(ui)
                })
                .inner;

            if self.show_about {
                self.render_about(ctx);
            }
            pressed
        });

        if let Some(token) = pressed {
            self.calc.handle(token);
            // the display changed after it was drawn this frame
            self.repaint.mark_needs_repaint();
        }

        self.repaint.end_frame(ctx);
    }
}
