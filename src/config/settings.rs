//! User settings for family-budget
//!
//! Manages report preferences: currency symbol, size of the top categories
//! view, strictness of category validation, and where budget spend comes from.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::CategorySet;
use crate::reports::{SpendSource, DEFAULT_RECENT_COUNT, DEFAULT_TOP_N};

/// User settings for family-budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol appended to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Size of the top categories view
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Number of recent transactions on the dashboard
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,

    /// Reject transactions whose category is not in the known set
    #[serde(default = "default_strict")]
    pub strict_categories: bool,

    /// Whether budget spend is derived from the ledger or taken as supplied
    #[serde(default)]
    pub budget_spend: SpendSource,

    /// Known categories used when a ledger does not list its own
    #[serde(default = "CategorySet::defaults")]
    pub categories: CategorySet,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₽".to_string()
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_recent_count() -> usize {
    DEFAULT_RECENT_COUNT
}

fn default_strict() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            top_n: default_top_n(),
            recent_count: default_recent_count(),
            strict_categories: default_strict(),
            budget_spend: SpendSource::default(),
            categories: CategorySet::defaults(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.top_n, 5);
        assert_eq!(settings.recent_count, 5);
        assert!(settings.strict_categories);
        assert_eq!(settings.budget_spend, SpendSource::Derived);
        assert!(settings.categories.contains("Groceries"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "₽");
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.top_n = 3;
        settings.budget_spend = SpendSource::Supplied;
        settings.currency_symbol = "$".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.top_n, 3);
        assert_eq!(loaded.budget_spend, SpendSource::Supplied);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"top_n": 10}"#).unwrap();
        assert_eq!(settings.top_n, 10);
        assert_eq!(settings.recent_count, 5);
        assert_eq!(settings.categories, CategorySet::defaults());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }
}
