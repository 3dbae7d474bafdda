//! Rendering of card schemas into primitive trees.
//!
//! [`CardRenderer`] walks a [`card_ir::CardSchema`], resolves the theme once,
//! keeps form state between passes and answers host events. The output is a
//! [`CardOutput`] tree that hosts paint however they like; [`paint_text`]
//! draws it as a terminal outline.

pub mod elements;
pub mod form;
pub mod painter;
pub mod primitives;
pub mod registry;
pub mod renderer;
pub mod submit;
pub mod theme;

pub use form::{FieldValues, FormArena, FormKey, FormScope, FormState, FormStore};
pub use painter::paint_text;
pub use primitives::{BROKEN_HEADLINE, BROKEN_MESSAGE, CardOutput, FieldBinding, Primitive, RenderNode};
pub use registry::{Handler, lookup, lookup_tag};
pub use renderer::{CardRenderer, EventResult, UiEvent};
pub use submit::{LogSink, RecordingSink, Submission, SubmissionSink, SubmitAck, SubmitError};
pub use theme::{DEFAULT_GRADIENT, DEFAULT_PRIMARY, HeaderOrnament, ThemeContext};
