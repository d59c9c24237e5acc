//! Dashboard screen: herd summary over one unfiltered fetch.

use super::messages;
use crate::api::{ApiResult, CattleClient};
use crate::models::{Animal, Estado};

/// Number of records shown under "recent"
pub const RECENT_LIMIT: usize = 5;

/// Mean of the known weights, rounded to the nearest integer. Records
/// without a weight are skipped; no weights at all gives 0.
pub fn average_weight(cattle: &[Animal]) -> i64 {
    let weights: Vec<f64> = cattle.iter().filter_map(|a| a.peso_actual).collect();
    if weights.is_empty() {
        return 0;
    }

    let sum: f64 = weights.iter().sum();
    (sum / weights.len() as f64).round() as i64
}

/// Summary figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub healthy: usize,
    pub sick: usize,
    pub avg_weight: i64,
}

impl DashboardStats {
    pub fn from_cattle(cattle: &[Animal]) -> Self {
        let count = |estado: Estado| cattle.iter().filter(|a| a.estado == estado).count();

        Self {
            total: cattle.len(),
            healthy: count(Estado::Activa),
            sick: count(Estado::Enferma),
            avg_weight: average_weight(cattle),
        }
    }
}

/// State of the dashboard screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub stats: DashboardStats,
    /// First records in server order
    pub recent: Vec<Animal>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: ApiResult<Vec<Animal>>) {
        self.loading = false;

        match result {
            Ok(cattle) => {
                self.stats = DashboardStats::from_cattle(&cattle);
                self.recent = cattle.into_iter().take(RECENT_LIMIT).collect();
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error loading dashboard: {}", e);
                self.error = Some(messages::DASHBOARD_LOAD_FAILED.to_string());
            }
        }
    }

    /// Fetch the unfiltered list and recompute
    pub async fn load(&mut self, client: &CattleClient) {
        self.begin_load();
        let result = client.list(None).await;
        self.finish_load(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::api::{ApiClient, ApiError};
    use crate::models::Sexo;
    use crate::session::SessionContext;
    use std::rc::Rc;

    fn animal(id: &str, estado: Estado, peso: Option<f64>) -> Animal {
        Animal {
            id: id.to_string(),
            identificador: format!("MX-{}", id),
            nombre: format!("Vaca {}", id),
            raza: None,
            fecha_nacimiento: None,
            sexo: Sexo::H,
            estado,
            peso_actual: peso,
        }
    }

    #[test]
    fn test_average_weight() {
        let cattle = vec![
            animal("1", Estado::Activa, Some(400.0)),
            animal("2", Estado::Activa, None),
            animal("3", Estado::Activa, Some(600.0)),
        ];
        assert_eq!(average_weight(&cattle), 500);

        let unweighed = vec![animal("1", Estado::Activa, None)];
        assert_eq!(average_weight(&unweighed), 0);
        assert_eq!(average_weight(&[]), 0);

        let odd = vec![
            animal("1", Estado::Activa, Some(400.0)),
            animal("2", Estado::Activa, Some(401.0)),
        ];
        assert_eq!(average_weight(&odd), 401);
    }

    #[test]
    fn test_stats_counts() {
        let cattle = vec![
            animal("1", Estado::Activa, Some(350.0)),
            animal("2", Estado::Enferma, None),
            animal("3", Estado::Vendida, Some(500.0)),
            animal("4", Estado::Activa, None),
            animal("5", Estado::Fallecida, None),
        ];

        let stats = DashboardStats::from_cattle(&cattle);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.healthy, 2);
        assert_eq!(stats.sick, 1);
        assert_eq!(stats.avg_weight, 425);
    }

    #[test]
    fn test_recent_is_capped() {
        let many: Vec<Animal> = (1..=8)
            .map(|i| animal(&i.to_string(), Estado::Activa, None))
            .collect();

        let mut view = DashboardView::new();
        view.begin_load();
        view.finish_load(Ok(many));
        let ids: Vec<&str> = view.recent.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(view.stats.total, 8);

        view.finish_load(Ok(vec![animal("9", Estado::Enferma, None)]));
        assert_eq!(view.recent.len(), 1);
    }

    #[tokio::test]
    async fn test_load_fetches_unfiltered_once() {
        let transport = Rc::new(RecordingTransport::new());
        transport.push_json(
            200,
            serde_json::to_value(vec![animal("1", Estado::Enferma, Some(410.0))]).unwrap(),
        );
        let client = CattleClient::new(ApiClient::new(transport.clone(), SessionContext::in_memory()));

        let mut view = DashboardView::new();
        view.load(&client).await;

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].query.is_empty());
        assert_eq!(view.stats.sick, 1);
        assert_eq!(view.stats.avg_weight, 410);
        assert!(!view.loading);
    }

    #[test]
    fn test_load_error_surfaces_message() {
        let mut view = DashboardView::new();
        view.begin_load();
        view.finish_load(Err(ApiError::Server { status: 401, detail: None }));
        assert!(!view.loading);
        assert_eq!(view.error.as_deref(), Some(messages::DASHBOARD_LOAD_FAILED));
        assert_eq!(view.stats, DashboardStats::default());
    }
}
