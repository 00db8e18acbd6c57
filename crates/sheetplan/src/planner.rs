//! Entry points bound to an [`EngineConfig`]

use crate::config::EngineConfig;
use crate::intent::OperationIntent;
use sheetplan_core::{parse_range, resolve_range, DataExtent, NamedRangeSet, Range, Resolution};
use sheetplan_ops::{build_request, Operation, Translation};
use sheetplan_profile::{profile_sheet, SheetDescriptor, SheetReader, SheetSample};

/// Parses, resolves, translates and profiles with one configuration
///
/// The planner holds no connection to a spreadsheet; it only knows the
/// default sheet and the named ranges the caller configured.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: EngineConfig,
    named_ranges: NamedRangeSet,
}

impl Planner {
    pub fn new(config: EngineConfig) -> Self {
        let named_ranges = config.named_range_set();
        Self {
            config,
            named_ranges,
        }
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Named ranges used while parsing
    pub fn named_ranges(&self) -> &NamedRangeSet {
        &self.named_ranges
    }

    /// Add a named range
    pub fn add_named_range<S: Into<String>>(&mut self, name: S) {
        self.named_ranges.insert(name);
    }

    /// Parse a range expression against the default sheet
    pub fn parse(&self, expression: &str) -> sheetplan_core::Result<Range> {
        parse_range(
            expression,
            self.config.default_sheet.as_deref(),
            &self.named_ranges,
        )
    }

    /// Parse and resolve a range expression under the configured limits
    pub fn resolve(
        &self,
        expression: &str,
        extent: Option<DataExtent>,
    ) -> sheetplan_core::Result<Resolution> {
        let range = self.parse(expression)?;
        Ok(resolve_range(&range, extent, &self.config.limits))
    }

    /// Turn an intent into a typed operation
    pub fn operation(&self, intent: OperationIntent) -> sheetplan_core::Result<Operation> {
        intent.into_operation(self.config.default_sheet.as_deref(), &self.named_ranges)
    }

    /// Validate and translate an intent
    pub fn plan(&self, intent: OperationIntent) -> sheetplan_core::Result<Translation> {
        let kind = intent.as_str();
        let operation = self.operation(intent)?;
        let translation = build_request(&operation, &self.config.limits)?;
        tracing::debug!(
            operation = kind,
            method = translation.request.method(),
            warnings = translation.warnings.len(),
            "planned operation"
        );
        Ok(translation)
    }

    /// Profile a sheet through `reader` with the configured windows
    pub fn profile<R>(
        &self,
        descriptor: &SheetDescriptor,
        reader: &R,
    ) -> sheetplan_profile::Result<SheetSample>
    where
        R: SheetReader + ?Sized,
    {
        profile_sheet(descriptor, reader, &self.config.sampling)
    }
}
