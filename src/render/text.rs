//! Plain text renderer implementation.
//!
//! Writes a document tree as readable, word-wrapped text: no markup
//! characters, inline formatting reduced to its text, and list markers
//! kept so structure survives.

use comrak::nodes::{AstNode, ListDelimType, ListType, NodeList, NodeValue};
use textwrap::{WordSeparator, WordSplitter, WrapAlgorithm};
use unicode_width::UnicodeWidthStr;

/// Indentation applied to block quote contents.
const QUOTE_INDENT: &str = "  ";

/// Separator between table columns.
const COLUMN_GAP: &str = "  ";

/// Convert a document tree to plain text wrapped at `width` columns.
///
/// A width of 0 disables wrapping; soft line breaks are then kept as
/// newlines instead of being joined into spaces.
pub fn to_plain_text<'a>(root: &'a AstNode<'a>, width: usize) -> String {
    let lines = render_children(root, width, false);
    if lines.is_empty() {
        return String::new();
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Render the block children of `node`, separated by blank lines unless tight.
fn render_children<'a>(node: &'a AstNode<'a>, width: usize, tight: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for child in node.children() {
        let Some(block) = render_block(child, width, tight) else {
            continue;
        };
        if !lines.is_empty() && !tight {
            lines.push(String::new());
        }
        lines.extend(block);
    }

    lines
}

/// Render one block node. `None` means the block has no visible text.
fn render_block<'a>(node: &'a AstNode<'a>, width: usize, tight: bool) -> Option<Vec<String>> {
    let value = node.data.borrow().value.clone();

    let lines = match &value {
        NodeValue::Paragraph | NodeValue::Heading(_) => {
            Some(wrap_text(&inline_text(node, width), width))
        }
        NodeValue::CodeBlock(code) => Some(
            code.literal
                .trim_end_matches('\n')
                .lines()
                .map(str::to_string)
                .collect(),
        ),
        NodeValue::HtmlBlock(_) | NodeValue::ThematicBreak | NodeValue::FrontMatter(_) => None,
        NodeValue::BlockQuote => {
            let inner = render_children(node, narrow(width, QUOTE_INDENT.len()), false);
            Some(indent_lines(inner, QUOTE_INDENT, QUOTE_INDENT))
        }
        NodeValue::List(list) => Some(render_list(node, list, width)),
        NodeValue::Table(_) => Some(render_table(node)),
        _ if value.block() => Some(render_children(node, width, tight)),
        // Stray inline content at block level.
        _ => Some(wrap_text(&inline_text(node, width), width)),
    }?;

    let visible = lines.iter().any(|line| !line.trim().is_empty());
    visible.then_some(lines)
}

/// Render a list, numbering ordered items from the list's start.
///
/// Bullets are `  - `; ordered markers are padded to four columns so
/// single and double digit items line up.
fn render_list<'a>(node: &'a AstNode<'a>, list: &NodeList, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut number = list.start;

    for item in node.children() {
        let mut marker = match list.list_type {
            ListType::Bullet => "  - ".to_string(),
            ListType::Ordered => {
                let delimiter = match list.delimiter {
                    ListDelimType::Period => '.',
                    ListDelimType::Paren => ')',
                };
                let pad = if number < 10 { "  " } else { " " };
                format!("{}{}{}", number, delimiter, pad)
            }
        };
        if let NodeValue::TaskItem(checked) = item.data.borrow().value {
            marker.push_str(if checked.is_some() { "[x] " } else { "[ ] " });
        }
        number += 1;

        let hang = " ".repeat(marker.width());
        let body = render_children(item, narrow(width, hang.len()), list.tight);

        if !lines.is_empty() && !list.tight {
            lines.push(String::new());
        }
        if body.is_empty() {
            lines.push(marker.trim_end().to_string());
        } else {
            lines.extend(indent_lines(body, &marker, &hang));
        }
    }

    lines
}

/// Render a table as rows of cells padded to their column's display width.
fn render_table<'a>(node: &'a AstNode<'a>) -> Vec<String> {
    let mut rows: Vec<(bool, Vec<String>)> = Vec::new();

    for row in node.children() {
        let header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
        let cells = row
            .children()
            .map(|cell| inline_text(cell, 0).replace('\n', " "))
            .collect();
        rows.push((header, cells));
    }

    let columns = rows.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for (_, cells) in &rows {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut lines = Vec::new();
    for (header, cells) in &rows {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            line.push_str(cell);
            line.push_str(&" ".repeat(widths[i] - cell.width()));
        }
        lines.push(line.trim_end().to_string());

        if *header {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            lines.push(rule.join(COLUMN_GAP));
        }
    }

    lines
}

/// Collect the text of an inline container.
fn inline_text<'a>(node: &'a AstNode<'a>, width: usize) -> String {
    let mut output = String::new();
    collect_inline(node, width, &mut output);
    output
}

fn collect_inline<'a>(node: &'a AstNode<'a>, width: usize, output: &mut String) {
    for child in node.children() {
        match child.data.borrow().value {
            NodeValue::Text(ref text) => output.push_str(text),
            NodeValue::Code(ref code) => output.push_str(&code.literal),
            NodeValue::SoftBreak => output.push(if width == 0 { '\n' } else { ' ' }),
            NodeValue::LineBreak => output.push('\n'),
            NodeValue::HtmlInline(_) => {}
            _ => collect_inline(child, width, output),
        }
    }
}

/// Wrap each hard line of `text` to `width` columns without splitting words.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    // Greedy fill: each line takes as many words as fit.
    let options = textwrap::Options::new(width)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation);

    text.split('\n')
        .flat_map(|line| textwrap::wrap(line, &options))
        .map(|line| line.into_owned())
        .collect()
}

/// Prefix the first line with `first` and the remaining non-empty lines with `rest`.
fn indent_lines(lines: Vec<String>, first: &str, rest: &str) -> Vec<String> {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 { first } else { rest };
            if line.is_empty() {
                prefix.trim_end().to_string()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect()
}

/// Width left after indenting by `by` columns. Zero stays zero.
fn narrow(width: usize, by: usize) -> usize {
    if width == 0 {
        0
    } else {
        width.saturating_sub(by).max(1)
    }
}
