//! Stored display templates.

use crate::lcd::LCD_BYTES_PER_ROW;

/// Provides template row data for `LoadTemplate`.
pub trait TemplateStore {
    /// Row `row` of template `id`, or `None` when the template does not
    /// exist on this build.
    fn template_row(&self, id: u8, row: usize) -> Option<[u8; LCD_BYTES_PER_ROW]>;
}

/// A store with no templates; every lookup misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTemplates;

impl TemplateStore for NullTemplates {
    fn template_row(&self, _id: u8, _row: usize) -> Option<[u8; LCD_BYTES_PER_ROW]> {
        None
    }
}
