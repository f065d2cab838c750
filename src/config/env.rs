//! Environment overrides for settings locations.

/// Overrides the settings file path (below `--config`).
pub const CONFIG_PATH_ENV: &str = "BASE16_SWITCHER_CONFIG";
/// Overrides the theme directory (below `--themes`, above the settings file).
pub const THEME_DIR_ENV: &str = "BASE16_SWITCHER_THEME_DIR";

/// Read a path-valued env var, treating blank values as unset.
pub(super) fn env_path_with<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
