//! Prelude module - common imports for sheetplan users
//!
//! ```rust
//! use sheetplan::prelude::*;
//! ```

pub use crate::{
    // Addressing
    parse_range,
    resolve_range,
    // Operations
    build_request,
    profile_sheet,
    CellFormat,
    CellRef,
    Color,
    DataExtent,
    EngineConfig,
    // Errors
    Error,
    Grid,
    NamedRangeSet,
    Operation,
    OperationIntent,
    Planner,
    Range,
    ResolveLimits,
    Result,
    SampleConfig,
    ScalarValue,
    SheetDescriptor,
    SheetReader,
    SheetSample,
    TranslatedRequest,
    Translation,
};

#[cfg(feature = "csv")]
pub use crate::{CsvReadOptions, CsvSheet};
