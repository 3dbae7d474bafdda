use super::*;
use crate::form::{FormKey, FormState};
use crate::primitives::{CardOutput, Primitive, RenderNode};
use crate::submit::{RecordingSink, Submission, SubmitError};
use crate::theme::{DEFAULT_PRIMARY, HeaderOrnament};
use card_ir::{CardSchema, SchemaSource, sample_card_source};
use serde_json::{Value, json};

fn source(value: Value) -> SchemaSource {
    SchemaSource::Ready(CardSchema::from_value(&value).unwrap())
}

fn node<'a>(card: &'a CardOutput, id: &str) -> &'a RenderNode {
    card.find(id).unwrap_or_else(|| panic!("node {id} not rendered"))
}

fn input_value(card: &CardOutput, id: &str) -> String {
    match &node(card, id).primitive {
        Primitive::TextInput { value, .. } | Primitive::DateInput { value, .. } => value.clone(),
        other => panic!("{id} is not a text input: {other:?}"),
    }
}

#[test]
fn render_is_idempotent() {
    let mut renderer = CardRenderer::new();
    let sample = sample_card_source();
    let first = renderer.render(&sample);
    let second = renderer.render(&sample);
    assert_eq!(first, second);
    assert_eq!(renderer.passes(), 2);

    // A fresh renderer yields the same tree.
    assert_eq!(CardRenderer::new().render(&sample), first);
}

#[test]
fn unknown_tag_is_isolated() {
    let mut renderer = CardRenderer::new();
    let card = renderer.render(&source(json!({
        "title": "Mixed",
        "body": [
            { "id": "before", "type": "text", "props": { "content": "one" } },
            { "id": "odd", "type": "Carousel", "children": [
                { "id": "hidden", "type": "text", "props": { "content": "never" } }
            ]},
            { "id": "after", "type": "text", "props": { "content": "two" } }
        ]
    })));

    let body = card.body();
    assert_eq!(body.len(), 3);
    assert_eq!(
        body[0].primitive,
        Primitive::Paragraph {
            content: "one".into()
        }
    );
    assert_eq!(
        body[1].primitive,
        Primitive::Unsupported {
            tag: "Carousel".into()
        }
    );
    assert_eq!(
        body[2].primitive,
        Primitive::Paragraph {
            content: "two".into()
        }
    );
    assert!(card.find("hidden").is_none());
}

#[test]
fn missing_props_use_defaults() {
    let mut renderer = CardRenderer::new();
    let card = renderer.render(&source(json!({
        "title": "Defaults",
        "body": [
            { "id": "grid", "type": "columns", "children": [] },
            { "id": "bad_grid", "type": "columns", "props": { "cols": 0, "gap": "wide" } },
            { "id": "heading", "type": "title", "props": { "text": "Hi" } }
        ]
    })));

    for id in ["grid", "bad_grid"] {
        match &node(&card, id).primitive {
            Primitive::Grid { cols, gap, .. } => {
                assert_eq!((*cols, *gap), (2, 4), "{id}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(
        node(&card, "heading").primitive,
        Primitive::Heading {
            text: "Hi".into(),
            level: 1
        }
    );
}

fn deep_card(theme: Option<Value>) -> SchemaSource {
    let mut root = json!({
        "title": "Deep",
        "body": [{ "id": "a", "type": "container", "children": [
            { "id": "b", "type": "columns", "children": [
                { "id": "c", "type": "container", "children": [
                    { "id": "go", "type": "button", "props": { "label": "Go" } },
                    { "id": "entry", "type": "input" }
                ]}
            ]}
        ]}]
    });
    if let Some(theme) = theme {
        root["theme"] = theme;
    }
    source(root)
}

fn button_background(card: &CardOutput, id: &str) -> String {
    match &node(card, id).primitive {
        Primitive::Button { paint, .. } => paint.background.clone(),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn theme_reaches_deep_descendants() {
    let mut renderer = CardRenderer::new();
    let card = renderer.render(&deep_card(Some(json!({ "primary": "#112233" }))));
    assert_eq!(button_background(&card, "go"), "#112233");
    match &node(&card, "entry").primitive {
        Primitive::TextInput { accent, .. } => assert_eq!(accent, "#112233"),
        other => panic!("unexpected {other:?}"),
    }

    let card = renderer.render(&deep_card(None));
    assert_eq!(button_background(&card, "go"), DEFAULT_PRIMARY);
    assert!(matches!(
        card,
        CardOutput::Card {
            header: HeaderOrnament::Default { .. },
            ..
        }
    ));
}

#[test]
fn configured_default_primary_applies_without_theme() {
    let mut renderer = CardRenderer::with_default_primary("#0ea5e9");
    let card = renderer.render(&deep_card(None));
    assert_eq!(button_background(&card, "go"), "#0ea5e9");
}

fn sibling_forms() -> SchemaSource {
    source(json!({
        "title": "Two forms",
        "body": [
            { "id": "form_a", "type": "formContainer", "children": [
                { "id": "input_a", "type": "input", "field": "x" }
            ]},
            { "id": "form_b", "type": "formContainer", "children": [
                { "id": "input_b", "type": "input", "field": "x" }
            ]}
        ]
    }))
}

#[test]
fn sibling_forms_are_scoped() {
    let mut renderer = CardRenderer::new();
    let mut sink = RecordingSink::new();
    let src = sibling_forms();
    renderer.render(&src);

    let result = renderer.handle_event(&UiEvent::change("input_a", "hello"), &mut sink);
    assert_eq!(
        result,
        EventResult::FieldUpdated {
            form: FormKey::new("form_a"),
            field: "x".into()
        }
    );

    let card = renderer.render(&src);
    assert_eq!(input_value(&card, "input_a"), "hello");
    assert_eq!(input_value(&card, "input_b"), "");

    let b = renderer.forms().store(&FormKey::new("form_b")).unwrap();
    assert!(b.values().is_empty());
    assert_eq!(b.state(), FormState::Clean);
    match &node(&card, "form_a").primitive {
        Primitive::Form { state, .. } => assert_eq!(*state, FormState::Edited),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn nested_form_shadows_outer() {
    let mut renderer = CardRenderer::new();
    let mut sink = RecordingSink::new();
    let src = source(json!({
        "title": "Nested",
        "body": [{ "id": "outer", "type": "formContainer", "children": [
            { "id": "outer_input", "type": "input", "field": "x" },
            { "id": "inner", "type": "formContainer", "children": [
                { "id": "inner_input", "type": "input", "field": "x" }
            ]}
        ]}]
    }));
    renderer.render(&src);
    renderer.handle_event(&UiEvent::change("inner_input", "deep"), &mut sink);

    let card = renderer.render(&src);
    assert_eq!(input_value(&card, "inner_input"), "deep");
    assert_eq!(input_value(&card, "outer_input"), "");
    assert!(renderer.forms().store(&FormKey::new("outer/inner")).is_some());
}

fn twin_forms(include_first: bool) -> SchemaSource {
    let first = json!({ "id": "f", "type": "formContainer", "children": [
        { "id": "ia", "type": "input", "field": "x" }
    ]});
    let second = json!({ "id": "f", "type": "formContainer", "children": [
        { "id": "ib", "type": "input", "field": "x" }
    ]});
    let body = if include_first {
        vec![first, second]
    } else {
        vec![second]
    };
    source(json!({ "title": "Twins", "body": body }))
}

#[test]
fn duplicate_form_ids_keep_separate_values() {
    let mut renderer = CardRenderer::new();
    let mut sink = RecordingSink::new();
    let both = twin_forms(true);
    renderer.render(&both);
    renderer.handle_event(&UiEvent::change("ia", "A-secret"), &mut sink);
    renderer.handle_event(&UiEvent::change("ib", "B-typed"), &mut sink);

    let card = renderer.render(&both);
    assert_eq!(input_value(&card, "ia"), "A-secret");
    assert_eq!(input_value(&card, "ib"), "B-typed");
    assert!(renderer.forms().store(&FormKey::new("f@0")).is_some());
    assert!(renderer.forms().store(&FormKey::new("f@1")).is_some());
}

#[test]
fn removed_duplicate_form_does_not_leak_values() {
    let mut renderer = CardRenderer::new();
    let mut sink = RecordingSink::new();
    renderer.render(&twin_forms(true));
    renderer.handle_event(&UiEvent::change("ia", "A-secret"), &mut sink);
    renderer.handle_event(&UiEvent::change("ib", "B-typed"), &mut sink);

    let card = renderer.render(&twin_forms(false));
    assert_ne!(input_value(&card, "ib"), "A-secret");
    assert_eq!(input_value(&card, "ib"), "");
    assert_eq!(renderer.forms().len(), 1);
    assert!(renderer.forms().store(&FormKey::new("f@0")).is_none());
}

#[test]
fn submit_hands_values_to_sink_once() {
    let mut renderer = CardRenderer::new();
    let mut sink = RecordingSink::new();
    let sample = sample_card_source();
    renderer.render(&sample);

    renderer.handle_event(&UiEvent::change("reason_input", "Looks good"), &mut sink);
    renderer.render(&sample);
    let result = renderer.handle_event(&UiEvent::click("submit_btn"), &mut sink);

    assert!(result.is_handled());
    assert!(result.default_prevented());
    match &result {
        EventResult::Clicked {
            submission: Some(ack),
            ..
        } => {
            assert_eq!(
                ack.message,
                "Data submitted successfully! Endpoint: /api/submit-form"
            );
        }
        other => panic!("unexpected {other:?}"),
    }

    let mut expected = crate::form::FieldValues::new();
    expected.insert("approval_reason".into(), json!("Looks good"));
    assert_eq!(
        sink.submissions(),
        [Submission {
            destination: Some("/api/submit-form".into()),
            values: expected,
        }]
    );

    renderer.handle_event(&UiEvent::click("submit_btn"), &mut sink);
    assert_eq!(sink.submissions().len(), 2);
}

#[test]
fn sink_errors_do_not_escape() {
    let mut renderer = CardRenderer::new();
    renderer.render(&sample_card_source());

    let mut calls = 0;
    let mut failing = |_: &Submission| -> Result<(), SubmitError> {
        calls += 1;
        Err(SubmitError::Rejected("offline".into()))
    };
    let result = renderer.handle_event(&UiEvent::click("submit_btn"), &mut failing);
    assert!(result.default_prevented());
    drop(failing);
    assert_eq!(calls, 1);
}

#[test]
fn submit_outside_form_is_plain_button() {
    let mut renderer = CardRenderer::new();
    let mut sink = RecordingSink::new();
    renderer.render(&source(json!({
        "title": "Loose",
        "body": [
            { "id": "loose", "type": "button", "props": { "label": "Send", "isSubmit": true } },
            { "id": "open", "type": "button", "props": { "label": "Open", "onClick": "open_details" } }
        ]
    })));

    assert_eq!(
        renderer.handle_event(&UiEvent::click("loose"), &mut sink),
        EventResult::Ignored
    );
    assert_eq!(
        renderer.handle_event(&UiEvent::click("open"), &mut sink),
        EventResult::Clicked {
            intent: Some("open_details".into()),
            submission: None
        }
    );
    assert!(sink.submissions().is_empty());
}

#[test]
fn broken_schema_renders_broken_state() {
    let mut renderer = CardRenderer::new();
    let card = renderer.render(&SchemaSource::from_text("{ \"title\": "));
    match &card {
        CardOutput::Broken {
            headline, message, ..
        } => {
            assert_eq!(headline, "Broken Schema");
            assert_eq!(
                message,
                "Please fix the JSON errors in the editor to resume live preview."
            );
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(card.body().is_empty());
}

#[test]
fn broken_schema_discards_form_state() {
    let mut renderer = CardRenderer::new();
    let mut sink = RecordingSink::new();
    let sample = sample_card_source();
    renderer.render(&sample);
    renderer.handle_event(&UiEvent::change("reason_input", "draft"), &mut sink);

    renderer.render(&SchemaSource::from_text("not json"));
    assert!(renderer.forms().is_empty());
    assert_eq!(
        renderer.handle_event(&UiEvent::click("submit_btn"), &mut sink),
        EventResult::Ignored
    );

    let card = renderer.render(&sample);
    assert_eq!(input_value(&card, "reason_input"), "");
}

#[test]
fn field_without_form_is_inert() {
    let mut renderer = CardRenderer::new();
    let mut sink = RecordingSink::new();
    let src = source(json!({
        "title": "Loose input",
        "body": [{ "id": "free", "type": "input", "field": "x" }]
    }));
    let card = renderer.render(&src);
    assert_eq!(input_value(&card, "free"), "");

    assert_eq!(
        renderer.handle_event(&UiEvent::change("free", "typed"), &mut sink),
        EventResult::Ignored
    );
    assert_eq!(input_value(&renderer.render(&src), "free"), "");
    assert!(renderer.forms().is_empty());
}

#[test]
fn values_survive_rerender_until_boundary_removed() {
    let mut renderer = CardRenderer::new();
    let mut sink = RecordingSink::new();
    let sample = sample_card_source();
    renderer.render(&sample);
    renderer.handle_event(&UiEvent::change("deadline_date", "2024-06-01"), &mut sink);

    // Edits elsewhere in the card keep the form's values.
    let mut edited = sample.schema().unwrap().clone();
    edited.title = "Renamed".into();
    let card = renderer.render(&edited.clone().into());
    assert_eq!(input_value(&card, "deadline_date"), "2024-06-01");

    edited.body.retain(|node| node.id != "form_area");
    renderer.render(&edited.into());
    assert!(renderer.forms().is_empty());

    let card = renderer.render(&sample);
    assert_eq!(input_value(&card, "deadline_date"), "");
}

#[test]
fn malformed_children_of_unknown_nodes_are_ignored() {
    let mut renderer = CardRenderer::new();
    let card = renderer.render(&source(json!({
        "title": "Odd",
        "body": [
            { "id": "weird", "type": "loopContainer", "children": [42, "x", { "nope": true }] },
            { "id": "typeless" },
            7
        ]
    })));

    let tags: Vec<_> = card
        .body()
        .iter()
        .map(|node| match &node.primitive {
            Primitive::Unsupported { tag } => tag.as_str(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(tags, ["loopContainer", "(missing type)", "(invalid node)"]);
    assert!(card.body().iter().all(|node| node.children().is_empty()));
}

#[test]
fn leaf_nodes_never_render_children() {
    let mut renderer = CardRenderer::new();
    let card = renderer.render(&source(json!({
        "title": "Leaves",
        "body": [
            { "id": "field", "type": "input", "children": [
                { "id": "nested_text", "type": "text", "props": { "content": "x" } }
            ]},
            { "id": "heading", "type": "title", "children": [
                { "id": "nested_button", "type": "button" }
            ]}
        ]
    })));
    assert!(card.body().iter().all(|node| node.children().is_empty()));
    assert!(card.find("nested_text").is_none());
    assert!(card.find("nested_button").is_none());
}

#[test]
fn person_picker_selection_round_trips() {
    let mut renderer = CardRenderer::new();
    let mut sink = RecordingSink::new();
    let sample = sample_card_source();
    renderer.render(&sample);
    renderer.handle_event(&UiEvent::change("approver_select", "user_2"), &mut sink);

    let card = renderer.render(&sample);
    match &node(&card, "approver_select").primitive {
        Primitive::PersonSelect { selected, .. } => {
            assert_eq!(selected.as_deref(), Some("user_2"))
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn events_for_unknown_nodes_are_ignored() {
    let mut renderer = CardRenderer::new();
    let mut sink = RecordingSink::new();
    renderer.render(&sample_card_source());
    assert_eq!(
        renderer.handle_event(&UiEvent::click("nowhere"), &mut sink),
        EventResult::Ignored
    );
    // Clicking an input or typing into a button does nothing.
    assert_eq!(
        renderer.handle_event(&UiEvent::click("reason_input"), &mut sink),
        EventResult::Ignored
    );
    assert_eq!(
        renderer.handle_event(&UiEvent::change("submit_btn", "x"), &mut sink),
        EventResult::Ignored
    );
}
