//! Fixed page copy and tab layout.

use sa_results::SolutionType;

pub const PAGE_TITLE: &str = "Simulated Annealing - Média e Melhor Solução";

pub const HORIZON_HEADER: &str = "Comparativo do VPL Anual por Modelo de Análise";
pub const ITERATION_PROMPT: &str = "Selecione o número de iterações para visualizar:";
pub const CONVERGENCE_HEADER: &str = "Evolução do VPL Total por Número de Iterações";

pub const MISSING_FILES_MESSAGE: &str = "Erro: Verifique se os arquivos 'sa_resultados.json' e 'sa_vpl.json' estão no mesmo diretório que o script.";
pub const PROCESSING_ERROR_PREFIX: &str = "Ocorreu um erro ao processar os arquivos: ";

/// Charts are stacked in this order on both tabs.
pub const STACK_ORDER: [SolutionType; 2] = [SolutionType::Mean, SolutionType::Best];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Horizon,
    Convergence,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 2] = [DashboardTab::Horizon, DashboardTab::Convergence];

    pub fn title(self) -> &'static str {
        match self {
            DashboardTab::Horizon => "Análise por Horizonte de Planejamento",
            DashboardTab::Convergence => "Análise por VPL Máximo",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            DashboardTab::Horizon => HORIZON_HEADER,
            DashboardTab::Convergence => CONVERGENCE_HEADER,
        }
    }
}
