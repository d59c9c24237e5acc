//! User-facing strings (Spanish, as shown to ranch staff).

pub const LOGIN_REQUIRED_FIELDS: &str = "Por favor ingrese email y contraseña";
pub const LOGIN_FAILED: &str = "Error al iniciar sesión";

pub const REGISTER_REQUIRED_FIELDS: &str = "Por favor complete todos los campos";
pub const REGISTER_PASSWORD_TOO_SHORT: &str = "La contraseña debe tener al menos 8 caracteres";
pub const REGISTER_FAILED: &str = "Error al registrar usuario";

pub const CATTLE_LOAD_FAILED: &str = "Error al cargar el ganado";
pub const CATTLE_REQUIRED_FIELDS: &str = "Complete los campos obligatorios";
pub const CATTLE_INVALID_WEIGHT: &str = "El peso debe ser un número positivo";
pub const CATTLE_INVALID_DATE: &str = "La fecha de nacimiento debe tener el formato AAAA-MM-DD";
pub const CATTLE_CREATE_FAILED: &str = "Error al crear registro";

pub const DELETE_CONFIRM: &str = "¿Está seguro de eliminar este registro?";
pub const DELETE_FAILED_PREFIX: &str = "Error al eliminar: ";
pub const UNKNOWN_ERROR: &str = "Error desconocido";

pub const DASHBOARD_LOAD_FAILED: &str = "Error al cargar el panel";

pub const NO_RECORDS: &str = "No se encontraron registros";
pub const NO_RECORDS_YET: &str = "No hay registros todavía";

/// Minimum password length accepted by the registration form
pub const MIN_PASSWORD_LEN: usize = 8;
