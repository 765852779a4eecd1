use miette::Diagnostic;
use smol_str::SmolStr;

/// Errors loading toolbar strings or settings.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum ToolbarError {
    #[error("invalid locale: {0}")]
    #[diagnostic(
        code(hashmd::toolbar::locale),
        help("locale keys are camelCase, e.g. `closeToc`")
    )]
    Locale(#[source] serde_json::Error),

    #[error("invalid toolbar config: {0}")]
    #[diagnostic(code(hashmd::toolbar::config))]
    Config(#[source] serde_json::Error),
}

/// Reasons a dropdown could not be placed. The panel stays off-screen.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Diagnostic)]
#[non_exhaustive]
pub enum PositionError {
    #[error("{0} geometry is not finite")]
    #[diagnostic(code(hashmd::toolbar::position))]
    NonFinite(&'static str),

    #[error("{0} has a negative size")]
    #[diagnostic(code(hashmd::toolbar::position))]
    NegativeSize(&'static str),

    #[error("{0} is not mounted")]
    #[diagnostic(code(hashmd::toolbar::position))]
    Unmounted(&'static str),

    #[error("failed to measure {what}: {reason}")]
    #[diagnostic(code(hashmd::toolbar::position))]
    Measure { what: &'static str, reason: SmolStr },
}
