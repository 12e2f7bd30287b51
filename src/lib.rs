//! mkchart
//!
//! Render a single data series described in a JSON file to a PNG (or SVG)
//! line chart with a bordered annotation panel. Pairs with the `mkchart` CLI.
//!
//! ### Features
//! - Load a chart request (`Title`, `Legend`, `Xvalues`, `Yvalues`, units) from JSON
//! - One continuous, area-filled series against a fixed 0–100 Y axis
//! - Word-wrapped title and a series legend
//! - Annotation panel sized exactly to the legend text, anchored bottom-left
//!
//! ### Example
//! ```no_run
//! use mkchart::{ChartOptions, storage, viz};
//!
//! let request = storage::load_request("data.json")?;
//! let written = viz::render_chart(&request, "data.json", &ChartOptions::default())?;
//! assert_eq!(written, std::path::PathBuf::from("data.json.png"));
//! # Ok::<(), mkchart::Error>(())
//! ```

pub mod error;
pub mod models;
pub mod storage;
pub mod style;
pub mod viz;

pub use error::{Error, Result};
pub use models::ChartRequest;
pub use viz::{ChartOptions, OutputFormat};
