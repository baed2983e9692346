use crate::book::{model::Book, text::flatten_html};

/// Author credited on the title page, copyright line, and back matter.
const AUTHOR: &str = "Frith Hilton";
/// Copyright notice printed on the copyright page.
const COPYRIGHT_NOTICE: &str = "© 2025 Frith Hilton. All rights reserved.";
/// Heading of the table of contents.
const CONTENTS_HEADING: &str = "Contents";
/// Heading of the back-matter page.
const BACK_MATTER_HEADING: &str = "More poetry by Frith Hilton";
/// Lead-in of the back-matter collection link.
const BACK_MATTER_LEAD: &str = "Visit my poetry collection: ";

/// Extra space above the dedication line, in millimeters (20 pt).
const DEDICATION_SPACE_MM: f64 = 7.1;
/// Height of the spacer under the contents heading, in millimeters (24 pt).
const CONTENTS_SPACER_MM: f64 = 8.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Style class of a document block; concrete type settings are applied at emission.
pub enum DocClass {
    /// Book title on the title page (28 pt bold).
    Title,
    /// Author line on the title page (18 pt).
    Author,
    /// Section heading (16 pt bold).
    Heading,
    /// Body text (11 pt).
    Body,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Horizontal alignment of a document block.
pub enum DocAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
}

#[derive(Clone, Debug, PartialEq)]
/// One paragraph-level unit of the document plan.
pub struct DocBlock {
    /// Block text; empty text renders as a blank line.
    pub text: String,
    /// Style class.
    pub class: DocClass,
    /// Horizontal alignment.
    pub align: DocAlign,
    /// Apply the standard first-line indent (body prose; off for stanza breaks).
    pub indent_first_line: bool,
    /// Extra space above the block in millimeters, on top of the class spacing.
    pub space_before_mm: f64,
    /// Extra space below the block in millimeters, on top of the class spacing.
    pub space_after_mm: f64,
    /// Optional URL appended to `text` in link color.
    pub trailing_link: Option<String>,
}

impl DocBlock {
    fn new(text: impl Into<String>, class: DocClass) -> Self {
        Self {
            text: text.into(),
            class,
            align: DocAlign::Left,
            indent_first_line: false,
            space_before_mm: 0.0,
            space_after_mm: 0.0,
            trailing_link: None,
        }
    }

    fn centered(mut self) -> Self {
        self.align = DocAlign::Center;
        self
    }

    fn indented(mut self) -> Self {
        self.indent_first_line = true;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// A run of blocks starting on a fresh page.
pub struct DocSection {
    /// Blocks in reading order.
    pub blocks: Vec<DocBlock>,
}

#[derive(Clone, Debug, PartialEq)]
/// Complete paginated document plan, produced by [`compile_document_plan`].
///
/// The plan is pure data with no font or IO dependencies; emission maps it
/// onto concrete page elements.
pub struct DocumentPlan {
    /// Document title metadata.
    pub title: String,
    /// Sections in order: title page, copyright, contents, poems, back matter.
    pub sections: Vec<DocSection>,
}

/// Compile a book into its paginated document plan.
pub fn compile_document_plan(book: &Book) -> DocumentPlan {
    let mut sections = Vec::with_capacity(book.poems.len() + 4);

    sections.push(title_page(book));
    sections.push(copyright_page(book));
    sections.push(contents_page(book));
    for poem in &book.poems {
        sections.push(poem_section(book, poem.number, &poem.title));
    }
    sections.push(back_matter(book));

    DocumentPlan {
        title: book.book_title.clone(),
        sections,
    }
}

fn title_page(book: &Book) -> DocSection {
    DocSection {
        blocks: vec![
            DocBlock::new(book.book_title.clone(), DocClass::Title).centered(),
            DocBlock::new(AUTHOR, DocClass::Author).centered(),
        ],
    }
}

fn copyright_page(book: &Book) -> DocSection {
    let mut dedication = DocBlock::new(format!("Dedicated to {}", book.dedicatee), DocClass::Body)
        .centered();
    dedication.space_before_mm = DEDICATION_SPACE_MM;

    DocSection {
        blocks: vec![
            DocBlock::new(book.book_title.clone(), DocClass::Body).centered(),
            DocBlock::new(COPYRIGHT_NOTICE, DocClass::Body).centered(),
            dedication,
            DocBlock::new(format!("First edition — {}", book.release_date), DocClass::Body)
                .centered(),
        ],
    }
}

fn contents_page(book: &Book) -> DocSection {
    let mut spacer = DocBlock::new("", DocClass::Body);
    spacer.space_after_mm = CONTENTS_SPACER_MM;

    let mut blocks = vec![
        DocBlock::new(CONTENTS_HEADING, DocClass::Heading).centered(),
        spacer,
    ];
    blocks.extend(
        book.poems
            .iter()
            .map(|poem| DocBlock::new(poem.title.clone(), DocClass::Body).indented()),
    );
    DocSection { blocks }
}

fn poem_section(book: &Book, number: u32, title: &str) -> DocSection {
    let mut blocks = vec![DocBlock::new(title, DocClass::Heading).centered()];
    for line in flatten_html(book.poem_html(number)) {
        let block = DocBlock::new(line, DocClass::Body);
        // Blank lines are stanza breaks and keep zero indent.
        let block = if block.text.is_empty() { block } else { block.indented() };
        blocks.push(block);
    }
    blocks.push(DocBlock::new("", DocClass::Body));
    DocSection { blocks }
}

fn back_matter(book: &Book) -> DocSection {
    let mut link_line = DocBlock::new(BACK_MATTER_LEAD, DocClass::Body).centered();
    link_line.trailing_link = Some(book.url.clone());

    DocSection {
        blocks: vec![
            DocBlock::new(BACK_MATTER_HEADING, DocClass::Heading).centered(),
            link_line,
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/book/plan.rs"]
mod tests;
