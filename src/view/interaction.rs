//! Pointer events a renderer forwards to whoever owns the rows.

/// Capability set for row-level pointer interaction
///
/// A renderer (table row, histogram bar, ...) calls these with the display
/// position of the row under the pointer.
pub trait PointerDelegate {
    /// Double click / activate: reveal the row's source location
    fn on_double_activate(&mut self, row: usize);

    fn on_hover_enter(&mut self, row: usize);

    fn on_hover_exit(&mut self, row: usize);
}
