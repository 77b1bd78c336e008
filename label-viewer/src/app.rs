//! Main application state and eframe integration.

use egui::{CentralPanel, Context, Key, Modifiers, SidePanel, TextureHandle, TopBottomPanel, Vec2};
use image::RgbImage;
use label_core::model::{MILL_FINISH, OTHER};
use label_core::{
    save_png, validate_fields, FontSet, FontSource, Gauge, Layout, Material, Palette,
    Renderer,
};

use crate::form::{DesktopForm, StatusPick, Upload};
use crate::preview;
use crate::theme;

/// Main application state.
pub struct LabelApp {
    /// Shared renderer (palette, font and layout loaded at startup)
    renderer: Renderer,
    /// Current widget state
    form: DesktopForm,

    /// Last rendered label
    label: Option<RgbImage>,
    /// GPU copy of the label for the preview
    texture: Option<TextureHandle>,
    /// Re-render on the next frame
    dirty: bool,

    /// Validation warnings for the current label
    warnings: Vec<String>,
    /// Status message
    status_message: String,
    /// Error message to display
    error_message: Option<String>,

    /// Show about dialog
    show_about_dialog: bool,
}

impl LabelApp {
    /// Create a new generator application.
    pub fn new(_cc: &eframe::CreationContext<'_>, palette: Palette, fonts: FontSet) -> Self {
        let status_message = match fonts.source() {
            FontSource::File(path) => format!("Font: {}", path.display()),
            FontSource::Bundled => "Font: bundled fallback (no system font found)".to_string(),
        };

        let form = DesktopForm::new(&palette);
        Self {
            renderer: Renderer::new(palette, fonts, Layout::standard()),
            form,
            label: None,
            texture: None,
            dirty: true,
            warnings: Vec::new(),
            status_message,
            error_message: None,
            show_about_dialog: false,
        }
    }

    /// Render the label from the current form and refresh the preview.
    fn regenerate(&mut self, ctx: &Context) {
        let fields = self.form.to_fields();
        self.warnings = validate_fields(&fields, self.renderer.palette()).warnings;

        let label = self.renderer.render(&fields);
        let image = preview::to_color_image(&label);
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("label", image, egui::TextureOptions::LINEAR))
            }
        }
        self.label = Some(label);
        self.dirty = false;

        tracing::debug!("Regenerated label '{}'", fields.title_text());
    }

    /// Open file dialog and attach the selected mill finish photo.
    fn upload_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "PNG", "JPG", "JPEG"])
            .pick_file()
        else {
            return;
        };

        match Upload::read(&path) {
            Ok(upload) => {
                self.status_message = format!("Uploaded {}", upload.file_name);
                tracing::info!("Uploaded {}", path.display());
                self.form.upload = Some(upload);
            }
            Err(e) => {
                // Treated as no image; the swatch stays blank
                self.form.upload = None;
                self.status_message = format!("Failed to read {}: {}", path.display(), e);
                tracing::warn!("Failed to read {}: {}", path.display(), e);
            }
        }
        self.dirty = true;
    }

    /// Save the current label to PNG.
    fn save_dialog(&mut self) {
        let Some(label) = &self.label else {
            self.error_message = Some("Nothing to save yet".to_string());
            return;
        };

        let Some(save_path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(self.form.file_name())
            .save_file()
        else {
            return;
        };

        match save_png(label, &save_path) {
            Ok(()) => {
                self.status_message = format!("Saved {}", save_path.display());
                tracing::info!("Saved label to {}", save_path.display());
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to save PNG: {}", e));
                tracing::error!("Failed to save PNG: {}", e);
            }
        }
    }

    /// Render the menu bar.
    fn render_menu(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Generate (Ctrl+G)").clicked() {
                        self.dirty = true;
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(self.label.is_some(), egui::Button::new("Save PNG... (Ctrl+S)"))
                        .clicked()
                    {
                        self.save_dialog();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit (Ctrl+Q)").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.show_about_dialog = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render the form side panel.
    fn render_form(&mut self, ctx: &Context) {
        SidePanel::left("form")
            .exact_width(theme::FORM_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.heading("Label");
                ui.separator();

                let mut changed = false;

                // Color
                let names: Vec<String> = self
                    .renderer
                    .palette()
                    .names()
                    .chain(std::iter::once(OTHER))
                    .map(str::to_string)
                    .collect();
                egui::ComboBox::from_label("Color")
                    .selected_text(self.form.color.as_str())
                    .show_ui(ui, |ui| {
                        for name in names {
                            let text = name.clone();
                            changed |= ui.selectable_value(&mut self.form.color, name, text).changed();
                        }
                    });

                if self.form.is_other_color() {
                    ui.horizontal(|ui| {
                        ui.label("Name:");
                        changed |= ui.text_edit_singleline(&mut self.form.custom_name).changed();
                    });
                    ui.horizontal(|ui| {
                        ui.label("Color:");
                        changed |= egui::color_picker::color_edit_button_srgb(
                            ui,
                            &mut self.form.custom_rgb,
                        )
                        .changed();
                    });
                } else if self.form.is_mill_finish() {
                    ui.horizontal(|ui| {
                        if ui.button("Upload image...").clicked() {
                            self.upload_dialog();
                        }
                        match &self.form.upload {
                            Some(upload) => ui.label(&upload.file_name),
                            None => ui.colored_label(theme::DIM_TEXT, "no image"),
                        };
                    });
                }

                ui.separator();

                // Material
                egui::ComboBox::from_label("Material")
                    .selected_text(material_label(&self.form.material))
                    .show_ui(ui, |ui| {
                        for m in Material::CHOICES {
                            let text = m.to_string();
                            changed |= ui.selectable_value(&mut self.form.material, m, text).changed();
                        }
                        changed |= ui
                            .selectable_value(
                                &mut self.form.material,
                                Material::Other(String::new()),
                                OTHER,
                            )
                            .changed();
                    });
                if matches!(self.form.material, Material::Other(_)) {
                    changed |= ui.text_edit_singleline(&mut self.form.custom_material).changed();
                }

                // Gauge
                egui::ComboBox::from_label("Gauge")
                    .selected_text(gauge_label(&self.form.gauge))
                    .show_ui(ui, |ui| {
                        for g in Gauge::CHOICES {
                            let text = g.to_string();
                            changed |= ui.selectable_value(&mut self.form.gauge, g, text).changed();
                        }
                        changed |= ui
                            .selectable_value(&mut self.form.gauge, Gauge::Other(String::new()), OTHER)
                            .changed();
                    });
                if matches!(self.form.gauge, Gauge::Other(_)) {
                    changed |= ui.text_edit_singleline(&mut self.form.custom_gauge).changed();
                }

                ui.separator();

                // Status
                ui.horizontal(|ui| {
                    changed |= ui
                        .radio_value(&mut self.form.status, StatusPick::Open, "Open")
                        .changed();
                    changed |= ui
                        .radio_value(&mut self.form.status, StatusPick::Reserved, "Reserved")
                        .changed();
                });
                if self.form.status == StatusPick::Reserved {
                    ui.horizontal(|ui| {
                        ui.label("Project:");
                        changed |= ui.text_edit_singleline(&mut self.form.project).changed();
                    });
                }

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Generate").clicked() {
                        changed = true;
                    }
                    if ui
                        .add_enabled(self.label.is_some(), egui::Button::new("Save PNG..."))
                        .clicked()
                    {
                        self.save_dialog();
                    }
                });

                if !self.warnings.is_empty() {
                    ui.separator();
                    for warning in &self.warnings {
                        ui.colored_label(theme::WARNING_TEXT, warning);
                    }
                }

                if changed {
                    self.dirty = true;
                }
            });
    }

    /// Render the status bar.
    fn render_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(label) = &self.label {
                        ui.label(format!("{} x {}", label.width(), label.height()));
                    }
                });
            });
        });
    }

    /// Render the scaled label preview.
    fn render_preview(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::PREVIEW_BG))
            .show(ctx, |ui| {
                let Some(texture) = &self.texture else {
                    return;
                };
                let available = ui.available_size() - Vec2::splat(2.0 * theme::PREVIEW_MARGIN);
                let size = preview::fit_size(texture.size_vec2(), available);

                ui.vertical_centered(|ui| {
                    ui.add_space(theme::PREVIEW_MARGIN);
                    let response = ui.add(egui::Image::from_texture(
                        egui::load::SizedTexture::new(texture.id(), size),
                    ));
                    ui.painter().rect_stroke(
                        response.rect,
                        0.0,
                        egui::Stroke::new(theme::PREVIEW_STROKE_WIDTH, theme::PREVIEW_BORDER),
                    );
                });
            });
    }

    fn handle_keyboard(&mut self, ctx: &Context) {
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::G)) {
            self.dirty = true;
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::S)) {
            self.save_dialog();
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Show error dialog if there's an error.
    fn show_error_dialog(&mut self, ctx: &Context) {
        if let Some(error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(&error);
                    ui.separator();
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }
    }

    /// Show about dialog.
    fn show_about(&mut self, ctx: &Context) {
        if !self.show_about_dialog {
            return;
        }

        egui::Window::new("About")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.heading("Sheet Metal Label Generator");
                ui.label("Version 0.1.0");
                ui.separator();
                ui.label("Inventory labels for sheet metal stock.");
                ui.label(format!("{} colors", self.renderer.palette().len()));
                ui.separator();
                if ui.button("Close").clicked() {
                    self.show_about_dialog = false;
                }
            });
    }
}

fn material_label(material: &Material) -> &str {
    match material {
        Material::Other(_) => OTHER,
        m => m.as_str(),
    }
}

fn gauge_label(gauge: &Gauge) -> &str {
    match gauge {
        Gauge::Other(_) => OTHER,
        g => g.as_str(),
    }
}

impl eframe::App for LabelApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);
        self.render_menu(ctx);
        self.render_form(ctx);
        self.render_status_bar(ctx);

        if self.dirty {
            self.regenerate(ctx);
        }

        self.render_preview(ctx);
        self.show_error_dialog(ctx);
        self.show_about(ctx);
    }
}
