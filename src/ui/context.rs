use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use syncwatch::config::{ColorMode, Config, Verbosity};
use syncwatch::presentation::cli::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        cli_verbosity: Option<Verbosity>,
        cli_color: Option<ColorWhen>,
        config: &Config,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, cli_verbosity, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_verbosity: Option<Verbosity>,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbosity: cli_verbosity.unwrap_or(config.output.verbosity),
            caps,
            color: color && !json,
            unicode,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }
}
