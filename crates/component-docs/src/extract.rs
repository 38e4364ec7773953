//! Field reference extraction from documentation page markup.
//!
//! Each pass is a pure function over the parsed document returning an
//! optional result. Passes with several strategies try them in a fixed
//! priority order and keep the first one that yields something. A pass that
//! finds nothing degrades its field to empty or absent; extraction as a whole
//! never fails.

use scraper::{ElementRef, Html};

use crate::types::{ExampleEntry, FieldRecord, PropertyEntry, DEFAULT_EXAMPLE_TITLE};

/// Heading phrases that introduce a property or method reference section.
const PROPERTY_SECTION_KEYWORDS: &[&str] = &[
    "api reference",
    "methods",
    "properties",
    "available methods",
    "configuration",
];

const SECTION_HEADINGS: &[&str] = &["h2", "h3"];
const EXAMPLE_HEADINGS: &[&str] = &["h2", "h3", "h4"];

/// Parse raw markup and run every extraction pass over it.
pub fn extract_field(html: &str, subject: &str, url: &str) -> FieldRecord {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let properties = extract_properties(root);
    let examples = extract_examples(root);

    tracing::debug!(
        subject,
        properties = properties.len(),
        examples = examples.len(),
        "extracted field reference"
    );

    FieldRecord {
        name: extract_title(root).unwrap_or_else(|| subject.to_string()),
        url: url.to_string(),
        description: extract_description(root).unwrap_or_default(),
        usage: extract_usage(root),
        properties: non_empty(properties),
        examples: non_empty(examples),
    }
}

// ── Title ───────────────────────────────────────────────────────────────────

/// Text of the first `h1`.
pub fn extract_title(root: ElementRef<'_>) -> Option<String> {
    first_tag(root, "h1").map(text_of).filter(|t| !t.is_empty())
}

// ── Description ─────────────────────────────────────────────────────────────

/// First paragraph after the title, else first paragraph of the main content.
pub fn extract_description(root: ElementRef<'_>) -> Option<String> {
    paragraph_after_title(root).or_else(|| paragraph_in_main_content(root))
}

fn paragraph_after_title(root: ElementRef<'_>) -> Option<String> {
    let h1 = first_tag(root, "h1")?;
    following_elements(h1)
        .find(|el| is_tag(*el, &["p"]))
        .map(text_of)
        .filter(|t| !t.is_empty())
}

fn paragraph_in_main_content(root: ElementRef<'_>) -> Option<String> {
    main_content_regions(root)
        .into_iter()
        .find_map(|region| first_tag(region, "p").map(text_of).filter(|t| !t.is_empty()))
}

/// Candidate main-content containers in priority order.
const MAIN_CONTENT_MATCHERS: [fn(ElementRef<'_>) -> bool; 4] =
    [is_main, is_article, has_main_role, has_content_class];

fn main_content_regions(root: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    MAIN_CONTENT_MATCHERS
        .iter()
        .filter_map(|matches| elements(root).find(|el| matches(*el)))
        .collect()
}

fn is_main(el: ElementRef<'_>) -> bool {
    is_tag(el, &["main"])
}

fn is_article(el: ElementRef<'_>) -> bool {
    is_tag(el, &["article"])
}

fn has_main_role(el: ElementRef<'_>) -> bool {
    el.value().attr("role") == Some("main")
}

fn has_content_class(el: ElementRef<'_>) -> bool {
    el.value().classes().any(|c| c == "content")
}

// ── Usage ───────────────────────────────────────────────────────────────────

/// Code block under the usage heading, else the first code block on the page.
pub fn extract_usage(root: ElementRef<'_>) -> Option<String> {
    code_after_usage_heading(root)
        .or_else(|| first_tag(root, "pre").map(text_of))
        .filter(|code| !code.is_empty())
}

fn code_after_usage_heading(root: ElementRef<'_>) -> Option<String> {
    let heading = elements(root)
        .filter(|el| is_tag(*el, SECTION_HEADINGS))
        .find(|el| is_usage_heading(&text_of(*el)))?;

    following_elements(heading)
        .find(|el| is_tag(*el, &["pre"]))
        .map(text_of)
}

fn is_usage_heading(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("basic usage") || lower == "basic" || lower.contains("usage")
}

// ── Examples ────────────────────────────────────────────────────────────────

/// One entry per non-empty code block, in document order.
pub fn extract_examples(root: ElementRef<'_>) -> Vec<ExampleEntry> {
    elements(root)
        .filter(|el| is_tag(*el, &["pre"]))
        .filter_map(|block| {
            let code = text_of(block);
            if code.is_empty() {
                return None;
            }

            let heading = previous_element(block).filter(|el| is_tag(*el, EXAMPLE_HEADINGS));
            let example = match heading {
                Some(heading) => ExampleEntry {
                    title: text_of(heading),
                    code,
                    description: paragraph_between(heading, block),
                },
                None => ExampleEntry {
                    title: DEFAULT_EXAMPLE_TITLE.to_string(),
                    code,
                    description: None,
                },
            };
            Some(example)
        })
        .collect()
}

fn paragraph_between(start: ElementRef<'_>, end: ElementRef<'_>) -> Option<String> {
    following_elements(start)
        .take_while(|el| el.id() != end.id())
        .find(|el| is_tag(*el, &["p"]))
        .map(text_of)
        .filter(|t| !t.is_empty())
}

// ── Properties ──────────────────────────────────────────────────────────────

/// Entries from every table and definition list under a reference heading.
pub fn extract_properties(root: ElementRef<'_>) -> Vec<PropertyEntry> {
    let mut entries = Vec::new();

    let sections = elements(root)
        .filter(|el| is_tag(*el, SECTION_HEADINGS))
        .filter(|el| is_property_heading(&text_of(*el)));

    for heading in sections {
        let section: Vec<ElementRef<'_>> = following_elements(heading)
            .take_while(|el| !is_tag(*el, SECTION_HEADINGS))
            .collect();

        for block in section.iter().flat_map(|el| reference_blocks(*el)) {
            if is_tag(block, &["table"]) {
                entries.extend(table_entries(block));
            } else {
                entries.extend(definition_list_entries(block));
            }
        }
    }

    entries
}

fn is_property_heading(text: &str) -> bool {
    let lower = text.to_lowercase();
    PROPERTY_SECTION_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Column positions resolved from a table header row.
struct TableColumns {
    name: usize,
    description: usize,
    type_name: Option<usize>,
    default_value: Option<usize>,
}

impl TableColumns {
    fn resolve(headers: &[String]) -> Option<Self> {
        let name = column_index(headers, "method").or_else(|| column_index(headers, "name"))?;
        let description = column_index(headers, "description")?;
        Some(Self {
            name,
            description,
            type_name: column_index(headers, "type"),
            default_value: column_index(headers, "default"),
        })
    }
}

fn column_index(headers: &[String], key: &str) -> Option<usize> {
    headers.iter().position(|h| h == key)
}

/// Tables and definition lists under `root` (inclusive) in document order.
fn reference_blocks(root: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    elements(root).filter(|el| is_tag(*el, &["table", "dl"]))
}

/// Rows belonging to `table` itself, not to tables nested in its cells.
fn own_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        if is_tag(child, &["tr"]) {
            rows.push(child);
        } else if is_tag(child, &["thead", "tbody", "tfoot"]) {
            rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| is_tag(*el, &["tr"])),
            );
        }
    }
    rows
}

fn table_entries(table: ElementRef<'_>) -> Vec<PropertyEntry> {
    let rows = own_rows(table);

    let header = rows
        .iter()
        .find(|row| parent_is(**row, "thead"))
        .or_else(|| rows.first())
        .copied();
    let Some(header) = header else {
        return Vec::new();
    };

    let headers: Vec<String> = cells(header)
        .into_iter()
        .map(|c| text_of(c).to_lowercase())
        .collect();
    let Some(columns) = TableColumns::resolve(&headers) else {
        tracing::debug!(?headers, "skipping table without name/description columns");
        return Vec::new();
    };

    rows.iter()
        .filter(|row| row.id() != header.id() && !parent_is(**row, "thead"))
        .filter_map(|row| {
            let cells: Vec<String> = cells(*row).into_iter().map(text_of).collect();
            let cell = |idx: usize| cells.get(idx).cloned().filter(|t| !t.is_empty());

            let name = cell(columns.name)?;
            let description = cell(columns.description)?;
            Some(PropertyEntry::new(
                name,
                description,
                columns.type_name.and_then(cell),
                columns.default_value.and_then(cell),
            ))
        })
        .collect()
}

/// `dt`/`dd` pairs of `list`, including pairs wrapped in `div` groups.
fn definition_list_entries(list: ElementRef<'_>) -> Vec<PropertyEntry> {
    elements(list)
        .filter(|el| is_tag(*el, &["dt"]))
        .filter(|term| closest_list(*term).is_some_and(|dl| dl.id() == list.id()))
        .filter_map(|term| {
            let definition = following_elements(term)
                .next()
                .filter(|el| is_tag(*el, &["dd"]))?;
            let name = text_of(term);
            let description = text_of(definition);
            if name.is_empty() || description.is_empty() {
                return None;
            }
            Some(PropertyEntry::new(name, description, None, None))
        })
        .collect()
}

fn cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_tag(*el, &["td", "th"]))
        .collect()
}

// ── Tree helpers ────────────────────────────────────────────────────────────

/// All elements under `root` (inclusive) in document order.
fn elements(root: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    root.descendants().filter_map(ElementRef::wrap)
}

fn first_tag<'a>(root: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    elements(root).find(|el| el.value().name() == tag)
}

fn closest_list(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| is_tag(*a, &["dl"]))
}

fn following_elements(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.next_siblings().filter_map(ElementRef::wrap)
}

fn previous_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.prev_siblings().find_map(ElementRef::wrap)
}

fn parent_is(el: ElementRef<'_>, tag: &str) -> bool {
    el.parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|p| p.value().name() == tag)
}

fn is_tag(el: ElementRef<'_>, names: &[&str]) -> bool {
    names.contains(&el.value().name())
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
