//! Panel configuration types and builder

pub use crate::error::BuilderError;
use crate::mode::ModeDescriptor;
use crate::panels::PanelDescriptor;
use crate::timing::Timings;

/// Panel configuration
///
/// Holds the descriptor of the attached panel model and the values that may
/// be overridden per board. Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panel model
    pub panel: &'static PanelDescriptor,
    /// Settle delays
    pub timings: Timings,
    /// Mode exposed to mode registration
    pub mode: ModeDescriptor,
}

/// Builder for constructing panel configuration
///
/// # Example
///
/// ```
/// use dsi_panel::panels::AUO_NOVATEK_720P;
/// use dsi_panel::{Builder, Timings};
///
/// let config = Builder::new()
///     .panel(&AUO_NOVATEK_720P)
///     .timings(Timings {
///         power_on_ms: 250,
///         ..Timings::DEFAULT
///     })
///     .build();
/// assert!(config.is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Builder {
    panel: Option<&'static PanelDescriptor>,
    timings: Option<Timings>,
    mode: Option<ModeDescriptor>,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel model (required)
    pub fn panel(mut self, panel: &'static PanelDescriptor) -> Self {
        self.panel = Some(panel);
        self
    }

    /// Override the panel's default settle delays
    pub fn timings(mut self, timings: Timings) -> Self {
        self.timings = Some(timings);
        self
    }

    /// Override the panel's display mode
    ///
    /// Useful for boards that run the panel with a different pixel clock or
    /// report a different physical size.
    pub fn mode(mut self, mode: ModeDescriptor) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `BuilderError::MissingPanel` if no panel was set
    /// - `BuilderError::NoSupplies` if the panel names no supplies
    /// - `BuilderError::InvalidMode` if the resulting mode fails validation
    pub fn build(self) -> Result<Config, BuilderError> {
        let panel = self.panel.ok_or(BuilderError::MissingPanel)?;
        if panel.supplies.is_empty() {
            return Err(BuilderError::NoSupplies);
        }
        let mode = self.mode.unwrap_or(panel.mode);
        mode.validate()?;

        Ok(Config {
            panel,
            timings: self.timings.unwrap_or(panel.timings),
            mode,
        })
    }
}
