//! # Conv Planner
//!
//! Predicts the (channels, width, height) produced by each layer of a
//! stack of 2-D convolutions and transposed convolutions, before any
//! network is built.
//!
//! ## Example
//!
//! ```rust
//! use conv_planner::{propagate, PlannerConfig};
//!
//! let model = PlannerConfig::default().build()?;
//! let records = propagate(&model)?;
//! assert_eq!(records.len(), 5);
//! assert_eq!(records[1].width, 14);
//! # Ok::<(), conv_planner::PlannerError>(())
//! ```
//!
//! Plans can also be assembled layer by layer:
//!
//! ```rust
//! use conv_planner::{propagate, InputShape, LayerSpec, ModelDesc};
//!
//! let model = ModelDesc::new(8, InputShape::new(3, 64, 64))
//!     .with_layer(LayerSpec::conv2d(16, 4, 2, 1))
//!     .with_layer(LayerSpec::conv_transpose2d(3, 4, 2, 1, 0));
//! let records = propagate(&model)?;
//! assert_eq!(records[1].spatial(), (32, 32));
//! assert_eq!(records[2].spatial(), (64, 64));
//! # Ok::<(), conv_planner::PlannerError>(())
//! ```

pub mod compute;
pub mod config;
pub mod error;
pub mod layer;
pub mod model;

pub use compute::{format_plan, print_plan, propagate};
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use model::{InputShape, LayerShape, LayerSpec, LayerType, ModelDesc, ShapeRecord};
