//! Extraction behaviour against representative documentation pages.

use component_docs::{extract_field, DEFAULT_EXAMPLE_TITLE};

const URL: &str = "https://docs.example.com/fields/text-input";

#[test]
fn test_text_input_end_to_end() {
    let html = "<html><body>\
        <h1>Text Input</h1><p>A basic input.</p>\
        <h2>Usage</h2><pre>TextInput::make('name')</pre>\
        </body></html>";

    let record = extract_field(html, "text-input", URL);
    assert_eq!(record.name, "Text Input");
    assert_eq!(record.url, URL);
    assert_eq!(record.description, "A basic input.");
    assert_eq!(record.usage.as_deref(), Some("TextInput::make('name')"));
    assert!(record.properties.is_none());

    let examples = record.examples.expect("usage block is also an example");
    assert_eq!(examples.len(), 1);
    assert_eq!(examples[0].title, "Usage");
    assert_eq!(examples[0].code, "TextInput::make('name')");
    assert_eq!(examples[0].description, None);
}

#[test]
fn test_page_without_code_blocks() {
    let html = "<h1>Hidden</h1><p>Stores a value without showing it.</p>\
                <h2>Usage</h2><p>Nothing to show.</p>";

    let record = extract_field(html, "hidden", URL);
    assert_eq!(record.usage, None);
    assert_eq!(record.examples, None);

    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("examples").is_none());
    assert!(json.get("properties").is_none());
}

#[test]
fn test_example_order_and_default_title() {
    let html = "<h1>Select</h1>\
                <h3>Validation</h3><pre>Select::make('a')->required()</pre>\
                <p>Another one:</p><pre>Select::make('b')</pre>";

    let examples = extract_field(html, "select", URL).examples.unwrap();
    assert_eq!(examples.len(), 2);
    assert_eq!(examples[0].title, "Validation");
    assert_eq!(examples[0].code, "Select::make('a')->required()");
    assert_eq!(examples[1].title, DEFAULT_EXAMPLE_TITLE);
    assert_eq!(examples[1].code, "Select::make('b')");
    assert_eq!(examples[1].description, None);
}

#[test]
fn test_identical_blocks_are_kept() {
    let html = "<h2>One</h2><pre>same()</pre><h2>Two</h2><pre>same()</pre>";
    let examples = extract_field(html, "x", URL).examples.unwrap();
    assert_eq!(examples.len(), 2);
}

#[test]
fn test_table_without_name_column_yields_nothing() {
    let html = "<h1>Toggle</h1><p>On or off.</p>\
        <h2>Properties</h2>\
        <table><thead><tr><th>Option</th><th>Description</th></tr></thead>\
        <tbody><tr><td>onColor</td><td>Color when on.</td></tr></tbody></table>\
        <h2>Usage</h2><pre>Toggle::make('is_admin')</pre>";

    let record = extract_field(html, "toggle", URL);
    assert_eq!(record.properties, None);
    assert_eq!(record.name, "Toggle");
    assert_eq!(record.description, "On or off.");
    assert_eq!(record.usage.as_deref(), Some("Toggle::make('is_admin')"));
}

#[test]
fn test_properties_from_tables_and_lists() {
    let html = "<h1>Text Input</h1>\
        <h2>Available Methods</h2>\
        <table>\
          <thead><tr><th>Method</th><th>Description</th><th>Type</th><th>Default</th></tr></thead>\
          <tbody>\
            <tr><td>label()</td><td>This field is required.</td><td>string</td><td>null</td></tr>\
            <tr><td>placeholder()</td><td>Optional styling hint</td><td>string</td><td></td></tr>\
          </tbody>\
        </table>\
        <dl><dt>autofocus()</dt><dd>Focus on load.</dd></dl>\
        <h2>Styling</h2>\
        <table><thead><tr><th>Name</th><th>Description</th></tr></thead>\
        <tbody><tr><td>ignored</td><td>Not a reference section.</td></tr></tbody></table>\
        <h3>Configuration</h3>\
        <table><thead><tr><th>Name</th><th>Description</th></tr></thead>\
        <tbody><tr><td>label()</td><td>Also listed here.</td></tr></tbody></table>";

    let props = extract_field(html, "text-input", URL).properties.unwrap();
    let names: Vec<_> = props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["label()", "placeholder()", "autofocus()", "label()"]);

    assert!(props[0].required);
    assert_eq!(props[0].type_name.as_deref(), Some("string"));
    assert_eq!(props[0].default_value.as_deref(), Some("null"));

    assert!(!props[1].required);
    assert_eq!(props[1].default_value, None);

    assert_eq!(props[2].description, "Focus on load.");
    assert_eq!(props[2].type_name, None);
}

#[test]
fn test_description_from_main_region() {
    let html = "<header><h1>Radio</h1></header>\
                <main><aside>tip</aside><p>Pick exactly one.</p></main>";
    let record = extract_field(html, "radio", URL);
    assert_eq!(record.name, "Radio");
    assert_eq!(record.description, "Pick exactly one.");
}

#[test]
fn test_extraction_never_fails_on_garbage() {
    let record = extract_field("<<<not html>>> <pre", "weird", URL);
    assert_eq!(record.name, "weird");
    assert_eq!(record.url, URL);
}
