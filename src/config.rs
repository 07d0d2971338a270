//! Runtime configuration.

/// Production deployment of the records API.
const DEFAULT_API_BASE: &str = "https://gestionmatriculas-production.up.railway.app/api";

/// Base URL prefixed to every API path.
///
/// Override at compile time with `MATRICULAS_API_BASE` to point the console
/// at a local backend.
pub fn api_base() -> &'static str {
    option_env!("MATRICULAS_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}
