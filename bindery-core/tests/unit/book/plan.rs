use super::*;
use crate::book::model::{Book, Poem};

fn sample_book() -> Book {
    let mut content = std::collections::BTreeMap::new();
    content.insert("1".to_string(), "<p>dawn on tin roofs<br>kettle song</p><p>the street wakes</p>".to_string());
    content.insert("2".to_string(), "<p>dust in the throat of June</p>".to_string());

    Book {
        book_title: "The Hours of Rain".to_string(),
        dedicatee: "the reader".to_string(),
        release_date: "June 2025".to_string(),
        url: "https://www.frithhilton.com.ng/poetry".to_string(),
        poems: vec![
            Poem { number: 1, title: "First Light".to_string() },
            Poem { number: 2, title: "Harmattan".to_string() },
        ],
        content: vec![content],
    }
}

#[test]
fn plan_has_front_matter_poems_and_back_matter() {
    let plan = compile_document_plan(&sample_book());
    // Title page, copyright, contents, two poems, back matter.
    assert_eq!(plan.sections.len(), 6);
    assert_eq!(plan.title, "The Hours of Rain");
}

#[test]
fn title_page_carries_title_and_author() {
    let plan = compile_document_plan(&sample_book());
    let blocks = &plan.sections[0].blocks;
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].class, DocClass::Title);
    assert_eq!(blocks[0].text, "The Hours of Rain");
    assert_eq!(blocks[1].class, DocClass::Author);
    assert_eq!(blocks[1].text, "Frith Hilton");
    assert!(blocks.iter().all(|b| b.align == DocAlign::Center));
}

#[test]
fn copyright_page_lines_are_centered() {
    let plan = compile_document_plan(&sample_book());
    let blocks = &plan.sections[1].blocks;
    let texts: Vec<&str> = blocks.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            "The Hours of Rain",
            "© 2025 Frith Hilton. All rights reserved.",
            "Dedicated to the reader",
            "First edition — June 2025",
        ]
    );
    assert!(blocks.iter().all(|b| b.align == DocAlign::Center));
    assert!(blocks[2].space_before_mm > 0.0);
}

#[test]
fn contents_lists_poem_titles_in_order() {
    let plan = compile_document_plan(&sample_book());
    let blocks = &plan.sections[2].blocks;
    assert_eq!(blocks[0].class, DocClass::Heading);
    assert_eq!(blocks[0].text, "Contents");
    let entries: Vec<&str> = blocks[2..].iter().map(|b| b.text.as_str()).collect();
    assert_eq!(entries, ["First Light", "Harmattan"]);
}

#[test]
fn poem_sections_indent_lines_but_not_stanza_breaks() {
    let plan = compile_document_plan(&sample_book());
    let blocks = &plan.sections[3].blocks;

    assert_eq!(blocks[0].class, DocClass::Heading);
    assert_eq!(blocks[0].text, "First Light");

    let lines: Vec<(&str, bool)> = blocks[1..]
        .iter()
        .map(|b| (b.text.as_str(), b.indent_first_line))
        .collect();
    assert_eq!(
        lines,
        [
            ("dawn on tin roofs", true),
            ("kettle song", true),
            ("", false),
            ("the street wakes", true),
            ("", false),
        ]
    );
}

#[test]
fn missing_poem_body_yields_an_empty_section() {
    let mut book = sample_book();
    book.poems.push(Poem { number: 9, title: "Unwritten".to_string() });
    let plan = compile_document_plan(&book);

    let blocks = &plan.sections[5].blocks;
    assert_eq!(blocks[0].text, "Unwritten");
    // Heading plus the trailing blank only.
    assert_eq!(blocks.len(), 2);
}

#[test]
fn back_matter_links_to_the_collection() {
    let plan = compile_document_plan(&sample_book());
    let blocks = &plan.sections[5].blocks;
    assert_eq!(blocks[0].text, "More poetry by Frith Hilton");
    assert_eq!(blocks[1].text, "Visit my poetry collection: ");
    assert_eq!(
        blocks[1].trailing_link.as_deref(),
        Some("https://www.frithhilton.com.ng/poetry")
    );
    assert_eq!(blocks[1].align, DocAlign::Center);
}
