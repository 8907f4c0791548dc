//! # Skill Gap Workspace
//!
//! Facade over the workspace crates:
//!
//! - [`math`]: series differencing, growth and smoothing helpers (`gap_math`)
//! - [`forecast`]: history loading, forecasting models and the scenario engine (`gap_forecast`)
//!
//! ```
//! use skillgap_workspace::forecast::{Scenario, ScenarioEngine};
//!
//! let baseline = ScenarioEngine::reference()
//!     .generate_scenario(Scenario::Baseline)
//!     .unwrap();
//! assert_eq!(baseline.forecasts.len(), 6);
//! ```

pub use gap_forecast as forecast;
pub use gap_math as math;
