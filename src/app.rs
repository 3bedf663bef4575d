use egui::{Color32, Key, KeyboardShortcut, Modifiers};

use crate::brush::BrushState;
use crate::config::CanvasConfig;
use crate::controller::DrawingController;
use crate::input::InputHandler;
use crate::surface::{Canvas, RenderSurface};

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_SHORTCUT_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const CLEAR_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Delete);

const INDICATOR_RADIUS: f32 = 4.0;
const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// Brush and config are persisted on shutdown; drawings are not.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    config: CanvasConfig,
    brush: BrushState,
    #[serde(skip)]
    controller: DrawingController<Canvas>,
    #[serde(skip)]
    input: InputHandler,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default(), None)
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Option<CanvasConfig>) -> Self {
        let restored: Option<PaintApp> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));
        Self::restore(restored, config)
    }

    /// Rebuild from persisted state. An explicit config wins over the stored one.
    fn restore(restored: Option<PaintApp>, config: Option<CanvasConfig>) -> Self {
        match restored {
            Some(app) => {
                log::info!("Restored brush settings from storage");
                let config = config.unwrap_or(app.config);
                Self::with_config(config, Some(app.brush))
            }
            None => Self::with_config(config.unwrap_or_default(), None),
        }
    }

    fn with_config(config: CanvasConfig, brush: Option<BrushState>) -> Self {
        let mut controller = DrawingController::with_config(Canvas::new(), &config);
        if let Some(mut brush) = brush {
            brush.set_thickness_range(config.min_thickness..=config.max_thickness);
            *controller.brush_mut() = brush;
        }
        Self {
            brush: controller.brush().clone(),
            config,
            controller,
            input: InputHandler::default(),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Shift variant first: the plain undo shortcut would also match it
        let (redo, undo, clear) = ctx.input_mut(|i| {
            let redo = i.consume_shortcut(&REDO_SHORTCUT) || i.consume_shortcut(&REDO_SHORTCUT_ALT);
            let undo = i.consume_shortcut(&UNDO_SHORTCUT);
            let clear = i.consume_shortcut(&CLEAR_SHORTCUT);
            (redo, undo, clear)
        });

        if redo {
            self.controller.redo();
        }
        if undo {
            self.controller.undo();
        }
        if clear {
            self.controller.clear();
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let brush = self.controller.brush_mut();

            ui.label("Color:");
            let mut color = brush.color();
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                brush.set_color(color);
            }

            ui.separator();

            let mut thickness = brush.thickness();
            if ui
                .add(egui::Slider::new(&mut thickness, brush.thickness_range()).text("Thickness"))
                .changed()
            {
                brush.set_thickness(thickness);
            }

            ui.separator();

            if ui
                .add_enabled(self.controller.can_undo(), egui::Button::new("⟲ Undo"))
                .clicked()
            {
                self.controller.undo();
            }
            if ui
                .add_enabled(self.controller.can_redo(), egui::Button::new("⟳ Redo"))
                .clicked()
            {
                self.controller.redo();
            }
            if ui
                .add_enabled(!self.controller.surface().is_empty(), egui::Button::new("🗑 Clear"))
                .clicked()
            {
                self.controller.clear();
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let rect = response.rect;
        self.input.set_canvas_rect(rect);

        let events = self
            .input
            .process(response.is_pointer_button_down_on(), response.interact_pointer_pos());
        for event in events {
            self.controller.handle_pointer(event);
        }

        painter.rect_filled(rect, 0.0, CANVAS_BACKGROUND);
        self.controller.surface().draw(&painter, rect);

        if let Some(point) = self.controller.pointer() {
            painter.circle_filled(self.input.to_screen(point), INDICATOR_RADIUS, Color32::RED);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.brush = self.controller.brush().clone();
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas(ui);
        });
    }
}
