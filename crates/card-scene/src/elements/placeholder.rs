use crate::primitives::Primitive;

/// Placeholder for a tag the renderer cannot draw. Never has children.
pub fn unsupported(tag: &str) -> Primitive {
    Primitive::Unsupported {
        tag: tag.to_string(),
    }
}

/// Text shown inside the placeholder.
pub fn unsupported_label(tag: &str) -> String {
    format!("Unsupported component: {tag}")
}
