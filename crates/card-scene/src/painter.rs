//! Plain-text painter for render trees.
//!
//! Terminal hosts draw a [`CardOutput`] as an indented outline: one line per
//! node, children indented by two spaces.

use std::fmt::Write;

use crate::elements::{ChartKind, NO_SELECTION_LABEL, unsupported_label};
use crate::primitives::{CardOutput, Primitive, RenderNode};
use crate::theme::HeaderOrnament;

const INDENT: &str = "  ";

/// Paint `output` as text.
pub fn paint_text(output: &CardOutput) -> String {
    let mut out = String::new();
    match output {
        CardOutput::Broken {
            headline,
            message,
            reason,
        } => {
            let _ = writeln!(out, "!! {headline}");
            let _ = writeln!(out, "{message}");
            let _ = writeln!(out, "   ({reason})");
        }
        CardOutput::Card {
            title,
            primary,
            header,
            body,
        } => {
            let _ = writeln!(out, "{}", ornament_line(header));
            let _ = writeln!(out, "# {title}  [primary {primary}]");
            for node in body {
                paint_node(&mut out, node, 0);
            }
        }
    }
    out
}

fn ornament_line(header: &HeaderOrnament) -> String {
    match header {
        HeaderOrnament::Custom { from, to } => format!("=== {from} -> {to} ==="),
        HeaderOrnament::Default { stops } => format!("=== {} ===", stops.join(" -> ")),
    }
}

fn paint_node(out: &mut String, node: &RenderNode, depth: usize) {
    let pad = INDENT.repeat(depth);
    let line = match &node.primitive {
        Primitive::Region { .. } => format!("[{}]", node.id),
        Primitive::Grid { cols, gap, .. } => format!("[{} grid {cols}x gap {gap}]", node.id),
        Primitive::Form {
            destination, state, ..
        } => format!(
            "<form {} -> {} ({state:?})>",
            node.id,
            destination.as_deref().unwrap_or("(no endpoint)")
        ),
        Primitive::Heading { text, level } => {
            format!("{} {text}", "#".repeat(usize::from(*level) + 1))
        }
        Primitive::Paragraph { content } => content.clone(),
        Primitive::Remark {
            label,
            content,
            tone,
        } => format!("({}) {label}: {content}", tone.name()),
        Primitive::LabeledValue { label, value } => format!("{label}: {value}"),
        Primitive::Rule => "-".repeat(40),
        Primitive::Chart {
            kind,
            color,
            points,
        } => {
            let kind = match kind {
                ChartKind::Bar => "bar",
                ChartKind::Line => "line",
            };
            let series: Vec<String> = points
                .iter()
                .map(|p| format!("{}={}", p.name, p.value))
                .collect();
            format!("{kind} chart {color}: {}", series.join(", "))
        }
        Primitive::TextInput {
            label,
            placeholder,
            multiline,
            value,
            ..
        } => {
            let shown = if value.is_empty() {
                placeholder.as_deref().unwrap_or("")
            } else {
                value.as_str()
            };
            if *multiline {
                format!("{label} [[ {shown} ]]")
            } else {
                format!("{label} [ {shown} ]")
            }
        }
        Primitive::DateInput { label, value, .. } => {
            let shown = if value.is_empty() { "yyyy-mm-dd" } else { value.as_str() };
            format!("{label} [{shown}]")
        }
        Primitive::PersonSelect {
            label,
            options,
            selected,
            ..
        } => {
            let shown = selected
                .as_deref()
                .map(|id| {
                    options
                        .iter()
                        .find(|o| o.id == id)
                        .map_or(id, |o| o.name.as_str())
                })
                .unwrap_or(NO_SELECTION_LABEL);
            format!("{label} <{shown}>")
        }
        Primitive::Button {
            label,
            variant,
            submits,
            ..
        } => {
            let submit = if submits.is_some() { " submit" } else { "" };
            format!("({label}) {variant:?}{submit}")
        }
        Primitive::Unsupported { tag } => format!("?? {}", unsupported_label(tag)),
    };
    let _ = writeln!(out, "{pad}{line}");

    for child in node.children() {
        paint_node(out, child, depth + 1);
    }
}
