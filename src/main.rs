//! Maze-Config-Editor.
//!
//! Editor für dreistöckige Labyrinth-Levels mit Text-Export
//! (`stairs.txt`, `poles.txt`, `walls.txt`, `flag.txt`) für die Spiel-Engine.

use eframe::egui;
use maze_config_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Maze-Config-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1440.0, 720.0])
                .with_title("Maze Config Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Maze Config Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        self.sync_clipboard(ctx);

        if has_events || self.state.ui.copied_indicator.is_some() {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_status_bar(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui, &self.state.options));
        events.extend(ui::show_pole_end_floor_dialog(ctx, &self.state));
        events.extend(ui::show_rejection_notice(ctx, &self.state.ui));
        events.extend(ui::show_reset_confirm(ctx, &self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::SidePanel::left("palette")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |panel| {
                events.extend(ui::render_palette(panel, &self.state));
            });

        egui::SidePanel::right("export_panel")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |panel| {
                events.extend(ui::render_export_panel(panel, &self.state));
            });

        let scene = self.controller.build_grid_scene(&self.state);
        egui::CentralPanel::default().show(ctx, |panel| {
            events.extend(ui::render_floor_selector(panel, &self.state));
            panel.separator();
            events.extend(ui::render_grid_panel(panel, &self.state, &scene));
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("Fehler: {:#}", e));
            }
        }
    }

    /// Überträgt vorgemerkte Exporttexte in die System-Zwischenablage.
    fn sync_clipboard(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);

        if let Some((file, content)) = self.state.ui.clipboard_request.take() {
            ctx.copy_text(content);
            self.state.ui.mark_copied(file, now);
            log::info!("{} in die Zwischenablage kopiert", file.file_name());
        }

        self.state.ui.expire_copied_indicator(now);
    }
}
