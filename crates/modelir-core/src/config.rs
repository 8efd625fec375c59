use serde::Deserialize;

/// Options controlling how schemas are resolved into the model IR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Map `(string, date-time)` and `(string, date)` to the date primitive
    /// instead of a plain string. This is the only configurable branch of
    /// the type mapper.
    pub use_date_type: bool,
}
