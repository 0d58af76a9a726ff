use crate::views::chart_plot::show_chart;
use sa_app::page::{DashboardTab, ITERATION_PROMPT};
use sa_app::Dashboard;
use sa_results::IterationCount;

#[derive(Default)]
pub struct HorizonView;

impl HorizonView {
    pub fn show(&mut self, ui: &mut egui::Ui, dashboard: &mut Dashboard) {
        ui.heading(DashboardTab::Horizon.header());

        let mut choice = dashboard.selected();
        ui.label(ITERATION_PROMPT);
        egui::ComboBox::from_id_salt("iteration_selector")
            .selected_text(choice.option_label())
            .show_ui(ui, |ui| {
                for iterations in IterationCount::FIXED {
                    ui.selectable_value(&mut choice, iterations, iterations.option_label());
                }
            });

        if choice != dashboard.selected() {
            // Failures are kept on the dashboard and rendered below.
            let _ = dashboard.select_iterations(choice);
        }

        if let Some(message) = dashboard.horizon_error() {
            ui.colored_label(egui::Color32::RED, message);
            return;
        }

        for (i, chart) in dashboard.horizon_charts().iter().enumerate() {
            ui.separator();
            show_chart(ui, &format!("horizon_chart_{i}"), chart);
        }
    }
}
