//! Cattle list screen.
//!
//! Keeps the last fetched list untouched and derives the visible rows from
//! it. The search box filters locally on every keystroke; the status dropdown
//! goes back to the server.

use chrono::NaiveDate;

use super::messages;
use crate::api::{ApiError, ApiResult, CattleClient};
use crate::models::{Animal, CattleCreate, Estado, Sexo};

/// Records whose name or identifier contains `term`, ignoring case.
///
/// The term is matched as typed, surrounding spaces included. An empty term
/// returns every record. Input order is preserved.
pub fn filter_cattle(cattle: &[Animal], term: &str) -> Vec<Animal> {
    if term.is_empty() {
        return cattle.to_vec();
    }

    let needle = term.to_lowercase();
    cattle
        .iter()
        .filter(|animal| animal.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Inputs of the add form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Identificador,
    Nombre,
    Raza,
    FechaNacimiento,
    Sexo,
    PesoActual,
}

/// Add-form state, kept as the raw text the user typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CattleDraft {
    pub identificador: String,
    pub nombre: String,
    pub raza: String,
    pub fecha_nacimiento: String,
    pub sexo: Sexo,
    pub peso_actual: String,
}

impl CattleDraft {
    pub fn set(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Identificador => self.identificador = value.to_string(),
            DraftField::Nombre => self.nombre = value.to_string(),
            DraftField::Raza => self.raza = value.to_string(),
            DraftField::FechaNacimiento => self.fecha_nacimiento = value.to_string(),
            DraftField::Sexo => {
                if let Ok(sexo) = value.parse() {
                    self.sexo = sexo;
                }
            }
            DraftField::PesoActual => self.peso_actual = value.to_string(),
        }
    }

    /// Convert to a create request, checking required fields and the
    /// optional numeric/date inputs
    pub fn to_request(&self) -> Result<CattleCreate, ApiError> {
        let identificador = self.identificador.trim();
        let nombre = self.nombre.trim();
        if identificador.is_empty() || nombre.is_empty() {
            return Err(ApiError::Validation(messages::CATTLE_REQUIRED_FIELDS.to_string()));
        }

        let peso_actual = match self.peso_actual.trim() {
            "" => None,
            text => match text.replace(',', ".").parse::<f64>() {
                Ok(peso) if peso > 0.0 && peso.is_finite() => Some(peso),
                _ => return Err(ApiError::Validation(messages::CATTLE_INVALID_WEIGHT.to_string())),
            },
        };

        let fecha_nacimiento = match self.fecha_nacimiento.trim() {
            "" => None,
            text => Some(
                NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .map_err(|_| ApiError::Validation(messages::CATTLE_INVALID_DATE.to_string()))?,
            ),
        };

        let raza = Some(self.raza.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        Ok(CattleCreate {
            identificador: identificador.to_string(),
            nombre: nombre.to_string(),
            raza,
            fecha_nacimiento,
            sexo: self.sexo,
            peso_actual,
        })
    }
}

/// Result of a delete attempt
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// User declined the confirmation; nothing was sent
    Cancelled,
    /// Deleted; the list has been re-fetched
    Deleted,
    /// Delete failed; the message is meant for a blocking alert
    Failed(String),
}

/// State of the cattle list screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CattleListView {
    cattle: Vec<Animal>,
    filtered: Vec<Animal>,
    search: String,
    status_filter: Option<Estado>,
    pub loading: bool,
    pub error: Option<String>,
    pub show_add_form: bool,
    pub draft: CattleDraft,
}

impl CattleListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last fetched list, as the server returned it
    pub fn cattle(&self) -> &[Animal] {
        &self.cattle
    }

    /// Rows to display
    pub fn visible(&self) -> &[Animal] {
        &self.filtered
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn status_filter(&self) -> Option<Estado> {
        self.status_filter
    }

    /// Nothing to show once loading is done
    pub fn is_empty(&self) -> bool {
        !self.loading && self.filtered.is_empty()
    }

    /// Search box keystroke; recomputes the visible rows immediately
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.apply_filter();
    }

    /// Status dropdown change. Returns the filter to fetch with; the caller
    /// must re-fetch.
    pub fn set_status_filter(&mut self, estado: Option<Estado>) -> Option<Estado> {
        self.status_filter = estado;
        self.begin_load()
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: &str) {
        self.draft.set(field, value);
    }

    pub fn toggle_add_form(&mut self) {
        self.show_add_form = !self.show_add_form;
    }

    fn apply_filter(&mut self) {
        self.filtered = filter_cattle(&self.cattle, &self.search);
    }

    /// Enter the loading state; returns the status filter to request
    pub fn begin_load(&mut self) -> Option<Estado> {
        self.loading = true;
        self.status_filter
    }

    pub fn finish_load(&mut self, result: ApiResult<Vec<Animal>>) {
        self.loading = false;

        match result {
            Ok(cattle) => {
                self.cattle = cattle;
                self.error = None;
                self.apply_filter();
            }
            Err(e) => {
                tracing::error!("Error loading cattle: {}", e);
                self.error = Some(messages::CATTLE_LOAD_FAILED.to_string());
            }
        }
    }

    /// Validate the add form. `None` means nothing should be sent.
    pub fn begin_create(&mut self) -> Option<CattleCreate> {
        match self.draft.to_request() {
            Ok(request) => {
                self.loading = true;
                self.error = None;
                Some(request)
            }
            Err(e) => {
                self.error = Some(e.user_message(messages::CATTLE_CREATE_FAILED));
                None
            }
        }
    }

    /// Fold in the create result. Returns `true` when the list should be
    /// re-fetched.
    pub fn finish_create(&mut self, result: ApiResult<Animal>) -> bool {
        self.loading = false;

        match result {
            Ok(_) => {
                self.show_add_form = false;
                self.draft = CattleDraft::default();
                true
            }
            Err(e) => {
                self.error = Some(e.user_message(messages::CATTLE_CREATE_FAILED));
                false
            }
        }
    }

    /// Alert text for a failed delete
    pub fn delete_failure_message(error: &ApiError) -> String {
        format!(
            "{}{}",
            messages::DELETE_FAILED_PREFIX,
            error.user_message(messages::UNKNOWN_ERROR)
        )
    }

    /// Fetch with the current status filter
    pub async fn refresh(&mut self, client: &CattleClient) {
        let estado = self.begin_load();
        let result = client.list(estado).await;
        self.finish_load(result);
    }

    /// Change the status filter and re-fetch
    pub async fn change_status_filter(&mut self, client: &CattleClient, estado: Option<Estado>) {
        let estado = self.set_status_filter(estado);
        let result = client.list(estado).await;
        self.finish_load(result);
    }

    /// Submit the add form, re-fetching on success. Returns whether a record
    /// was created.
    pub async fn create(&mut self, client: &CattleClient) -> bool {
        let Some(request) = self.begin_create() else {
            return false;
        };

        let result = client.create(&request).await;
        if self.finish_create(result) {
            self.refresh(client).await;
            true
        } else {
            false
        }
    }

    /// Delete after confirmation. `confirm` receives the prompt text.
    pub async fn delete(
        &mut self,
        client: &CattleClient,
        id: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> DeleteOutcome {
        if !confirm(messages::DELETE_CONFIRM) {
            return DeleteOutcome::Cancelled;
        }

        match client.delete(id).await {
            Ok(()) => {
                self.refresh(client).await;
                DeleteOutcome::Deleted
            }
            Err(e) => DeleteOutcome::Failed(Self::delete_failure_message(&e)),
        }
    }
}
