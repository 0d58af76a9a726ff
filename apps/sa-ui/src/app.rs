use crate::views::{ConvergenceView, HorizonView};
use egui_file_dialog::FileDialog;
use sa_app::page::PAGE_TITLE;
use sa_app::{AppError, Dashboard, DashboardTab, DataSource};

pub struct SaDashboardApp {
    source: DataSource,
    dashboard: Result<Dashboard, AppError>,
    loaded_at: Option<String>,
    active_tab: DashboardTab,
    horizon_view: HorizonView,
    convergence_view: ConvergenceView,
    file_dialog: FileDialog,
}

impl SaDashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, source: DataSource) -> Self {
        let mut app = Self {
            dashboard: Err(AppError::Processing("not loaded".to_string())),
            source,
            loaded_at: None,
            active_tab: DashboardTab::default(),
            horizon_view: HorizonView,
            convergence_view: ConvergenceView,
            file_dialog: FileDialog::new(),
        };
        app.load();
        app
    }

    /// Read both files again, keeping the iteration selection when possible.
    fn load(&mut self) {
        let result = match &mut self.dashboard {
            Ok(dashboard) => dashboard.reload(&self.source).map(|()| None),
            Err(_) => Dashboard::load(&self.source).map(Some),
        };

        match result {
            Ok(Some(dashboard)) => {
                self.dashboard = Ok(dashboard);
                self.mark_loaded();
            }
            Ok(None) => self.mark_loaded(),
            Err(e) => {
                self.dashboard = Err(e);
                self.loaded_at = None;
            }
        }
    }

    fn mark_loaded(&mut self) {
        self.loaded_at = Some(chrono::Local::now().format("%H:%M:%S").to_string());
    }

    fn open_folder(&mut self, dir: std::path::PathBuf) {
        tracing::info!(dir = %dir.display(), "switching data directory");
        self.source = DataSource::new(dir);
        self.dashboard = Err(AppError::Processing("not loaded".to_string()));
        self.load();
    }
}

impl eframe::App for SaDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Reload").clicked() {
                    self.load();
                }

                if ui.button("Open folder").clicked() {
                    self.file_dialog.select_directory();
                }

                ui.separator();
                ui.label(format!("Data: {}", self.source.dir().display()));
                if let Some(at) = &self.loaded_at {
                    ui.separator();
                    ui.label(format!("Loaded at {}", at));
                }
            });
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.open_folder(path.to_path_buf());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(egui::RichText::new(PAGE_TITLE).size(28.0).strong());
                ui.add_space(8.0);

                let dashboard = match &mut self.dashboard {
                    Ok(dashboard) => dashboard,
                    Err(e) => {
                        ui.colored_label(egui::Color32::RED, e.user_message());
                        return;
                    }
                };

                ui.horizontal(|ui| {
                    for tab in DashboardTab::ALL {
                        ui.selectable_value(&mut self.active_tab, tab, tab.title());
                    }
                });

                ui.separator();

                match self.active_tab {
                    DashboardTab::Horizon => self.horizon_view.show(ui, dashboard),
                    DashboardTab::Convergence => self.convergence_view.show(ui, dashboard),
                }
            });
        });
    }
}
