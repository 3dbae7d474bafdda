//! Visual primitive builders, one per component tag.
//! These helpers only turn resolved props into primitives; form state and
//! traversal are up to the renderer.

pub mod button;
pub mod chart;
pub mod heading;
pub mod inputs;
pub mod placeholder;
pub mod text;

pub use button::{ButtonPaint, ButtonVariant};
pub use chart::{ChartKind, ChartPoint};
pub use inputs::{NO_SELECTION_LABEL, PERSON_DIRECTORY, PersonOption};
pub use placeholder::unsupported_label;
pub use text::RemarkTone;
