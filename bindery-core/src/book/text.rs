/// Flatten simple poem markup into trimmed plain-text lines.
///
/// The exported fragments use a small HTML subset: `<p>`/`<div>` blocks,
/// `<br>` line breaks, inline emphasis tags, and character entities. Blocks
/// are separated by a single blank line (a stanza break), all other tags are
/// stripped, entities are decoded, and no word wrapping is applied. Every
/// line is trimmed; runs of blank lines collapse to one, and leading/trailing
/// blank lines are dropped.
pub fn flatten_html(html: &str) -> Vec<String> {
    let mut out = String::new();
    let mut chars = html.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                let mut tag = String::new();
                let mut terminated = false;
                for t in chars.by_ref() {
                    if t == '>' {
                        terminated = true;
                        break;
                    }
                    tag.push(t);
                }
                // An unterminated tag swallows the rest of the fragment.
                if !terminated {
                    break;
                }
                apply_tag(&tag, &mut out);
            }
            '&' => out.push(decode_entity(&mut chars)),
            _ => out.push(c),
        }
    }

    collect_lines(&out)
}

fn apply_tag(raw: &str, out: &mut String) {
    let name = raw
        .trim()
        .trim_end_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match name.as_str() {
        "br" => out.push('\n'),
        // A new block separates from prior content with a blank line.
        "p" | "div" => {
            if !out.is_empty() {
                out.push_str("\n\n");
            }
        }
        "/p" | "/div" => out.push('\n'),
        _ => {}
    }
}

/// Decode one entity starting after `&`; unknown entities pass through as `&`.
fn decode_entity(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> char {
    let mut name = String::new();
    let mut lookahead = chars.clone();
    while let Some(&c) = lookahead.peek() {
        if c == ';' {
            break;
        }
        if name.len() >= 8 || c == '&' || c == '<' || c.is_whitespace() {
            return '&';
        }
        name.push(c);
        lookahead.next();
    }
    if lookahead.peek() != Some(&';') {
        return '&';
    }

    let decoded = match name.as_str() {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => decode_numeric_entity(&name),
    };

    match decoded {
        Some(c) => {
            // Consume the entity body and the ';'.
            for _ in 0..=name.len() {
                chars.next();
            }
            c
        }
        None => '&',
    }
}

fn decode_numeric_entity(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code)
}

fn collect_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() && lines.last().is_none_or(|l: &String| l.is_empty()) {
            continue;
        }
        lines.push(line.to_string());
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/book/text.rs"]
mod tests;
