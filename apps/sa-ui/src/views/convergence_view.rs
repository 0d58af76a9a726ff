use crate::views::chart_plot::show_chart;
use sa_app::page::DashboardTab;
use sa_app::Dashboard;

#[derive(Default)]
pub struct ConvergenceView;

impl ConvergenceView {
    pub fn show(&mut self, ui: &mut egui::Ui, dashboard: &Dashboard) {
        ui.heading(DashboardTab::Convergence.header());

        for (i, chart) in dashboard.convergence_charts().iter().enumerate() {
            ui.separator();
            show_chart(ui, &format!("convergence_chart_{i}"), chart);
        }
    }
}
