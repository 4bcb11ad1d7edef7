//! Selection and view state, plus the collaborator seams a renderer uses.
//!
//! - `state`: records, sort order, selection and derived statistics
//! - `reveal`: handing `(path, line)` to an external editor
//! - `interaction`: pointer events forwarded by a renderer

pub mod interaction;
pub mod reveal;
pub mod state;

pub use interaction::PointerDelegate;
pub use reveal::{CommandRevealer, PrintRevealer, RevealTarget, Revealer};
pub use state::ViewState;
