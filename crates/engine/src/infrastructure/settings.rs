//! Process settings read from the environment.
//!
//! Nothing here changes what a run narrates, only how diagnostics are filtered
//! and whether narration is coloured.

use tracing_subscriber::filter::{EnvFilter, ParseError};

/// Default tracing filter when neither `SKIRMISH_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "skirmish_engine=info";

/// When to colour console narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    Always,
    Never,
    /// Colour unless `NO_COLOR` is set
    #[default]
    Auto,
}

impl ColorMode {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "always" | "on" | "true" | "1" => Some(Self::Always),
            "never" | "off" | "false" | "0" => Some(Self::Never),
            "auto" | "" => Some(Self::Auto),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    pub color: ColorMode,
    /// `NO_COLOR` is set to a non-empty value
    pub no_color: bool,
    /// `SKIRMISH_COLOR` value that did not parse; reported once logging is up
    pub unrecognised_color: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            color: ColorMode::Auto,
            no_color: false,
            unrecognised_color: None,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_filter = non_empty("SKIRMISH_LOG")
            .or_else(|| non_empty("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let (color, unrecognised_color) = match lookup("SKIRMISH_COLOR") {
            Some(raw) => match ColorMode::parse(&raw) {
                Some(mode) => (mode, None),
                None => (ColorMode::Auto, Some(raw)),
            },
            None => (ColorMode::Auto, None),
        };

        Self {
            log_filter,
            color,
            no_color: non_empty("NO_COLOR").is_some(),
            unrecognised_color,
        }
    }

    /// Build the tracing filter, falling back to `DEFAULT_LOG_FILTER` when the
    /// configured directive does not parse. The parse error is handed back so it
    /// can be logged once the subscriber exists.
    pub fn env_filter(&self) -> (EnvFilter, Option<ParseError>) {
        match EnvFilter::try_new(&self.log_filter) {
            Ok(filter) => (filter, None),
            Err(err) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(err)),
        }
    }

    /// Whether narration should carry ANSI colour.
    ///
    /// `Auto` colours only a terminal, and only while `NO_COLOR` is unset.
    pub fn use_color(&self, stdout_is_tty: bool) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout_is_tty && !self.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        assert_eq!(settings(&[]), Settings::default());
    }

    #[test]
    fn skirmish_log_wins_over_rust_log() {
        let s = settings(&[("SKIRMISH_LOG", "debug"), ("RUST_LOG", "warn")]);
        assert_eq!(s.log_filter, "debug");

        let s = settings(&[("SKIRMISH_LOG", " "), ("RUST_LOG", "warn")]);
        assert_eq!(s.log_filter, "warn");
    }

    #[test]
    fn malformed_log_filter_falls_back_to_default() {
        let (_, rejected) = settings(&[("SKIRMISH_LOG", "skirmish_engine=loud")]).env_filter();
        assert!(rejected.is_some());

        let (_, rejected) = settings(&[("SKIRMISH_LOG", "skirmish_engine=debug")]).env_filter();
        assert!(rejected.is_none());
    }

    #[test]
    fn no_color_disables_colour_in_auto_mode() {
        assert!(!settings(&[("NO_COLOR", "1")]).use_color(true));
        assert!(settings(&[("NO_COLOR", "")]).use_color(true));
    }

    #[test]
    fn auto_mode_skips_colour_when_stdout_is_not_a_terminal() {
        let s = settings(&[]);
        assert_eq!(s.color, ColorMode::Auto);
        assert!(!s.use_color(false));
        assert!(s.use_color(true));
    }

    #[test]
    fn explicit_colour_mode_overrides_no_color_and_terminal_check() {
        let always = settings(&[("NO_COLOR", "1"), ("SKIRMISH_COLOR", "always")]);
        assert!(always.use_color(false));
        assert!(!settings(&[("SKIRMISH_COLOR", "never")]).use_color(true));
    }

    #[test]
    fn unknown_colour_mode_falls_back_to_auto_and_is_kept_for_reporting() {
        let s = settings(&[("SKIRMISH_COLOR", "sometimes")]);
        assert_eq!(s.color, ColorMode::Auto);
        assert_eq!(s.unrecognised_color.as_deref(), Some("sometimes"));
        assert!(s.use_color(true));

        assert!(!settings(&[("SKIRMISH_COLOR", "sometimes"), ("NO_COLOR", "yes")]).use_color(true));
        assert_eq!(settings(&[("SKIRMISH_COLOR", "never")]).unrecognised_color, None);
    }
}
