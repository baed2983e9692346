use std::path::Path;

use genpdf::{Alignment, Element, Margins, elements, fonts, style};

use crate::{
    book::plan::{DocAlign, DocBlock, DocClass, DocumentPlan},
    foundation::error::{BinderyError, BinderyResult},
};

/// 6x9 in KDP trim, in millimeters.
const PAGE_SIZE_MM: (f64, f64) = (152.4, 228.6);
/// Uniform page margin in millimeters.
const PAGE_MARGIN_MM: f64 = 16.0;
/// Standard first-line indent in millimeters (0.5 in).
const BODY_INDENT_MM: f64 = 12.7;
/// Link color of the back-matter URL.
const LINK_COLOR: style::Color = style::Color::Rgb(0, 0, 238);

/// Assemble a document plan into a PDF at `out`.
///
/// `fonts_dir` must hold `{family}-Regular.ttf`, `{family}-Bold.ttf`,
/// `{family}-Italic.ttf`, and `{family}-BoldItalic.ttf`.
#[tracing::instrument(skip(plan), fields(sections = plan.sections.len()))]
pub fn render_book_pdf(
    plan: &DocumentPlan,
    fonts_dir: &Path,
    family: &str,
    out: &Path,
) -> BinderyResult<()> {
    let family = fonts::from_files(fonts_dir, family, None).map_err(|e| {
        BinderyError::document(format!(
            "load font family '{family}' from '{}': {e}",
            fonts_dir.display()
        ))
    })?;

    let mut doc = genpdf::Document::new(family);
    doc.set_title(plan.title.clone());
    doc.set_paper_size(genpdf::Size::new(PAGE_SIZE_MM.0, PAGE_SIZE_MM.1));

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(Margins::trbl(
        PAGE_MARGIN_MM,
        PAGE_MARGIN_MM,
        PAGE_MARGIN_MM,
        PAGE_MARGIN_MM,
    ));
    doc.set_page_decorator(decorator);

    for (idx, section) in plan.sections.iter().enumerate() {
        if idx > 0 {
            doc.push(elements::PageBreak::new());
        }
        for block in &section.blocks {
            push_block(&mut doc, block);
        }
    }

    doc.render_to_file(out)
        .map_err(|e| BinderyError::document(format!("write pdf '{}': {e}", out.display())))
}

/// Per-class type settings: font size (pt), bold, space before/after (mm).
fn class_settings(class: DocClass) -> (u8, bool, f64, f64) {
    match class {
        DocClass::Title => (28, true, 0.0, 17.6),
        DocClass::Author => (18, false, 0.0, 0.0),
        DocClass::Heading => (16, true, 8.5, 4.2),
        DocClass::Body => (11, false, 0.0, 2.1),
    }
}

fn push_block(doc: &mut genpdf::Document, block: &DocBlock) {
    let (size, bold, class_before, class_after) = class_settings(block.class);

    let mut text_style = style::Style::new().with_font_size(size);
    if bold {
        text_style = text_style.bold();
    }

    let mut par = elements::Paragraph::default();
    par.push_styled(block.text.clone(), text_style.clone());
    if let Some(url) = &block.trailing_link {
        par.push_styled(url.clone(), text_style.with_color(LINK_COLOR));
    }

    let par = par.aligned(match block.align {
        DocAlign::Left => Alignment::Left,
        DocAlign::Center => Alignment::Center,
    });

    let left = if block.indent_first_line { BODY_INDENT_MM } else { 0.0 };
    doc.push(par.padded(Margins::trbl(
        class_before + block.space_before_mm,
        0.0,
        class_after + block.space_after_mm,
        left,
    )));
}
