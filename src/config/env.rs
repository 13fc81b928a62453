//! Environment variable overrides (SYNCWATCH_* prefix)
//!
//! Invalid values never abort: the setting keeps its previous value and a
//! warning (with a typo suggestion where one is close enough) is collected.

use std::path::PathBuf;

use super::types::{ColorMode, Config, Verbosity};

pub const ENV_RSYNC: &str = "SYNCWATCH_RSYNC";
pub const ENV_DRY_RUN: &str = "SYNCWATCH_DRY_RUN";
pub const ENV_EXCLUDE_FROM: &str = "SYNCWATCH_EXCLUDE_FROM";
pub const ENV_MAX_RETRIES: &str = "SYNCWATCH_MAX_RETRIES";
pub const ENV_DEBOUNCE_MIN_MS: &str = "SYNCWATCH_DEBOUNCE_MIN_MS";
pub const ENV_DEBOUNCE_MAX_MS: &str = "SYNCWATCH_DEBOUNCE_MAX_MS";
pub const ENV_MAX_PATHS: &str = "SYNCWATCH_MAX_PATHS";
pub const ENV_VERBOSITY: &str = "SYNCWATCH_VERBOSITY";
pub const ENV_COLOR: &str = "SYNCWATCH_COLOR";

/// Validator for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, recording a warning in `warnings` when it is invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, warnings: &mut Vec<String>) -> Option<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        let parsed = parser(value.trim());
        if parsed.is_none() {
            warnings.push(format!(
                "Invalid {} value '{}'{} (valid values: {})",
                self.var_name,
                value,
                self.suggest(value),
                self.valid_values.join(", ")
            ));
        }
        parsed
    }

    fn suggest(&self, value: &str) -> String {
        let input = value.trim().to_lowercase();
        let best = self
            .valid_values
            .iter()
            .map(|&valid| (valid, levenshtein(&input, valid)))
            .min_by_key(|&(_, dist)| dist);

        match best {
            Some((suggested, dist)) if dist > 0 && dist <= 2 => {
                format!(". Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}

/// Levenshtein distance over bytes, for typo suggestions
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_verbosity(value: &str) -> Option<Verbosity> {
    match value.to_lowercase().as_str() {
        "quiet" => Some(Verbosity::Quiet),
        "normal" => Some(Verbosity::Normal),
        "verbose" => Some(Verbosity::Verbose),
        _ => None,
    }
}

fn parse_color(value: &str) -> Option<ColorMode> {
    match value.to_lowercase().as_str() {
        "auto" => Some(ColorMode::Auto),
        "always" => Some(ColorMode::Always),
        "never" => Some(ColorMode::Never),
        _ => None,
    }
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.parse().ok()
}

/// Apply every `SYNCWATCH_*` variable `get_env` knows about.
///
/// Returns the warnings for values that could not be parsed.
pub fn apply_env_overrides<F>(config: &mut Config, get_env: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(rsync) = get_env(ENV_RSYNC).filter(|v| !v.trim().is_empty()) {
        config.transfer.rsync = PathBuf::from(rsync);
    }

    if let Some(value) = get_env(ENV_EXCLUDE_FROM) {
        config.transfer.exclude_from = (!value.trim().is_empty()).then(|| PathBuf::from(value));
    }

    let bools = EnvVarValidator::new(ENV_DRY_RUN, &["true", "false", "1", "0"]);
    if let Some(value) = get_env(ENV_DRY_RUN) {
        if let Some(dry_run) = bools.parse(&value, parse_bool, &mut warnings) {
            config.transfer.dry_run = dry_run;
        }
    }

    if let Some(value) = get_env(ENV_MAX_RETRIES) {
        let validator = EnvVarValidator::new(ENV_MAX_RETRIES, &["a non-negative integer"]);
        if let Some(n) = validator.parse(&value, parse_number::<u32>, &mut warnings) {
            config.transfer.max_retries = n;
        }
    }

    if let Some(value) = get_env(ENV_DEBOUNCE_MIN_MS) {
        let validator = EnvVarValidator::new(ENV_DEBOUNCE_MIN_MS, &["milliseconds"]);
        if let Some(ms) = validator.parse(&value, parse_number::<u64>, &mut warnings) {
            config.debounce.min_ms = ms;
        }
    }

    if let Some(value) = get_env(ENV_DEBOUNCE_MAX_MS) {
        let validator = EnvVarValidator::new(ENV_DEBOUNCE_MAX_MS, &["milliseconds"]);
        if let Some(ms) = validator.parse(&value, parse_number::<u64>, &mut warnings) {
            config.debounce.max_ms = ms;
        }
    }

    if let Some(value) = get_env(ENV_MAX_PATHS) {
        let validator = EnvVarValidator::new(ENV_MAX_PATHS, &["a positive integer"]);
        let parse_positive = |s: &str| parse_number::<usize>(s).filter(|n| *n > 0);
        if let Some(n) = validator.parse(&value, parse_positive, &mut warnings) {
            config.debounce.max_paths = n;
        }
    }

    if let Some(value) = get_env(ENV_VERBOSITY) {
        let validator = EnvVarValidator::new(ENV_VERBOSITY, &["quiet", "normal", "verbose"]);
        if let Some(verbosity) = validator.parse(&value, parse_verbosity, &mut warnings) {
            config.output.verbosity = verbosity;
        }
    }

    if let Some(value) = get_env(ENV_COLOR) {
        let validator = EnvVarValidator::new(ENV_COLOR, &["auto", "always", "never"]);
        if let Some(color) = validator.parse(&value, parse_color, &mut warnings) {
            config.output.color = color;
        }
    }

    warnings
}
