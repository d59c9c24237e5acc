//! Data Transfer Objects
//!
//! Request and response types exchanged with the Vacuno REST API.
//! Field names follow the backend's JSON (Spanish) so they round-trip as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role sent with every self-registration
pub const DEFAULT_ROLE: &str = "field";

// ============================================
// CATTLE
// ============================================

/// Sex of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sexo {
    /// Hembra
    #[default]
    H,
    /// Macho
    M,
}

impl Sexo {
    pub fn label(&self) -> &'static str {
        match self {
            Sexo::H => "Hembra",
            Sexo::M => "Macho",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Sexo::H => "H",
            Sexo::M => "M",
        }
    }
}

impl FromStr for Sexo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "H" | "HEMBRA" => Ok(Sexo::H),
            "M" | "MACHO" => Ok(Sexo::M),
            other => Err(format!("Sexo inválido: {} (use H o M)", other)),
        }
    }
}

/// Lifecycle status of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Estado {
    Activa,
    Enferma,
    Vendida,
    /// Known to the backend; never offered as a filter
    Fallecida,
}

impl Estado {
    /// States offered by the list screen's status dropdown
    pub const FILTERABLE: [Estado; 3] = [Estado::Activa, Estado::Enferma, Estado::Vendida];

    pub fn as_str(&self) -> &'static str {
        match self {
            Estado::Activa => "activa",
            Estado::Enferma => "enferma",
            Estado::Vendida => "vendida",
            Estado::Fallecida => "fallecida",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Estado::Activa => "Activa",
            Estado::Enferma => "Enferma",
            Estado::Vendida => "Vendida",
            Estado::Fallecida => "Fallecida",
        }
    }
}

impl fmt::Display for Estado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Estado {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "activa" => Ok(Estado::Activa),
            "enferma" => Ok(Estado::Enferma),
            "vendida" => Ok(Estado::Vendida),
            "fallecida" => Ok(Estado::Fallecida),
            other => Err(format!("Estado inválido: {}", other)),
        }
    }
}

/// A cattle record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    /// Server-assigned identity
    pub id: String,
    /// Unique business key (ear tag)
    pub identificador: String,
    pub nombre: String,
    #[serde(default)]
    pub raza: Option<String>,
    #[serde(default)]
    pub fecha_nacimiento: Option<NaiveDate>,
    pub sexo: Sexo,
    pub estado: Estado,
    #[serde(default)]
    pub peso_actual: Option<f64>,
}

impl Animal {
    /// Case-insensitive match of an already-lowercased needle against name or identifier
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.nombre.to_lowercase().contains(needle)
            || self.identificador.to_lowercase().contains(needle)
    }
}

/// Cattle create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CattleCreate {
    pub identificador: String,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raza: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<NaiveDate>,
    pub sexo: Sexo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peso_actual: Option<f64>,
}

/// Partial cattle update; only the fields that are set are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CattleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raza: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<Estado>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peso_actual: Option<f64>,
}

impl CattleUpdate {
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.raza.is_none()
            && self.estado.is_none()
            && self.peso_actual.is_none()
    }
}

/// Health event for an animal (vaccination, treatment, checkup)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecordCreate {
    pub id_vaca: String,
    pub fecha: NaiveDate,
    pub tipo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medicamento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub veterinario: Option<String>,
}

/// Weighing of an animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecordCreate {
    pub id_vaca: String,
    pub fecha: NaiveDate,
    pub peso: f64,
    #[serde(default = "default_unidad")]
    pub unidad: String,
    #[serde(default = "default_metodo")]
    pub metodo: String,
}

fn default_unidad() -> String {
    "kg".to_string()
}

fn default_metodo() -> String {
    "manual".to_string()
}

impl WeightRecordCreate {
    pub fn new(id_vaca: impl Into<String>, fecha: NaiveDate, peso: f64) -> Self {
        Self {
            id_vaca: id_vaca.into(),
            fecha,
            peso,
            unidad: default_unidad(),
            metodo: default_metodo(),
        }
    }
}

/// Acknowledgement body returned by record endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================
// AUTH
// ============================================

/// Login request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Self-registration request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub rol: String,
}

impl Registration {
    pub fn new(nombre: &str, email: &str, password: &str) -> Self {
        Self {
            nombre: nombre.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            rol: DEFAULT_ROLE.to_string(),
        }
    }
}

/// Login response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Account as returned by register and `/auth/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub nombre: String,
    pub email: String,
    pub rol: String,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

fn default_activo() -> bool {
    true
}

// ============================================
// HEALTH
// ============================================

/// Backend liveness response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_decodes_nulls() {
        let json = r#"{
            "id": "a1", "identificador": "MX-001", "nombre": "Lola",
            "raza": null, "fecha_nacimiento": "2021-03-04",
            "sexo": "H", "estado": "enferma", "peso_actual": null
        }"#;
        let animal: Animal = serde_json::from_str(json).unwrap();
        assert_eq!(animal.estado, Estado::Enferma);
        assert_eq!(animal.sexo, Sexo::H);
        assert_eq!(animal.raza, None);
        assert_eq!(
            animal.fecha_nacimiento,
            NaiveDate::from_ymd_opt(2021, 3, 4)
        );
    }

    #[test]
    fn test_create_omits_missing_optionals() {
        let draft = CattleCreate {
            identificador: "MX-002".into(),
            nombre: "Pinta".into(),
            raza: None,
            fecha_nacimiento: None,
            sexo: Sexo::M,
            peso_actual: Some(420.5),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "identificador": "MX-002",
                "nombre": "Pinta",
                "sexo": "M",
                "peso_actual": 420.5
            })
        );
    }

    #[test]
    fn test_update_serializes_only_set_fields() {
        let update = CattleUpdate {
            estado: Some(Estado::Vendida),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({ "estado": "vendida" })
        );
        assert!(CattleUpdate::default().is_empty());
    }

    #[test]
    fn test_registration_uses_field_role() {
        let reg = Registration::new("Ana", "ana@example.com", "secreto123");
        assert_eq!(reg.rol, "field");
    }

    #[test]
    fn test_estado_parse() {
        assert_eq!("Activa".parse::<Estado>().unwrap(), Estado::Activa);
        assert!("muerta".parse::<Estado>().is_err());
        assert_eq!("macho".parse::<Sexo>().unwrap(), Sexo::M);
    }

    #[test]
    fn test_token_type_defaults_to_bearer() {
        let token: Token = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(token.token_type, "bearer");
    }
}
