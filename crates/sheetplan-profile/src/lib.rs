//! # sheetplan-profile
//!
//! Samples a sheet's cell grid and describes it: column types, a header row
//! when there is one, and structural patterns such as numeric sequences,
//! date ranges and formulas.
//!
//! - [`plan_windows`] - Choose the blocks to read
//! - [`SheetReader`] - The collaborator that reads them
//! - [`profile_sheet`] / [`profile_windows`] - Build a [`SheetSample`]
//!
//! ## Example
//!
//! ```rust
//! use sheetplan_core::ResolvedRange;
//! use sheetplan_profile::{
//!     profile_sheet, ColumnType, ReadError, SampleConfig, SampleGrid, SampledCell,
//!     SheetDescriptor, SheetReader,
//! };
//!
//! struct Fixed;
//!
//! impl SheetReader for Fixed {
//!     fn read_window(&self, _range: &ResolvedRange) -> Result<SampleGrid, ReadError> {
//!         Ok(vec![
//!             vec![SampledCell::new("Item"), SampledCell::new("Qty")],
//!             vec![SampledCell::new("Bolt"), SampledCell::new(40)],
//!             vec![SampledCell::new("Nut"), SampledCell::new(25)],
//!         ])
//!     }
//! }
//!
//! let sheet = SheetDescriptor::new("Stock", 3, 2);
//! let sample = profile_sheet(&sheet, &Fixed, &SampleConfig::default()).unwrap();
//! assert_eq!(sample.column_profiles[1].inferred_type, ColumnType::Number);
//! println!("{}", sample.summary());
//! ```

pub mod config;
pub mod infer;
pub mod patterns;
pub mod profiler;
pub mod reader;
pub mod sample;
pub mod window;

pub use config::SampleConfig;
pub use infer::{detect_header, infer_column_type, ColumnType};
pub use profiler::{profile_sheet, profile_windows, ProfileError, Result};
pub use reader::{ReadError, SampleGrid, SampledCell, SheetReader};
pub use sample::{ColumnProfile, PatternFlags, SheetSample};
pub use window::{plan_windows, SheetDescriptor, Window, WindowPosition};
