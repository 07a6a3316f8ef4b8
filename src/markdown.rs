// SPDX-License-Identifier: MPL-2.0
//! Markdown rendering for project descriptions.
//!
//! Descriptions are authored in markdown. Comrak parses them into its AST,
//! which is reduced here to the handful of constructs a portfolio blurb
//! actually uses: paragraphs, emphasis, strong, inline code, links, and
//! bullet lists. The reduced document is then rendered as Iced rich text.
//! Link spans emit the clicked URL as their message.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};
use iced::font::{Style as FontStyle, Weight};
use iced::widget::{column, rich_text, row, span, text, Column};
use iced::{Color, Element, Font};

/// One styled run of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inline {
    pub text: String,
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
    pub link: Option<String>,
}

/// A block-level element of the reduced document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Vec<Inline>),
    Paragraph(Vec<Inline>),
    /// A bullet list; each item is flattened to a single run of inlines.
    List(Vec<Vec<Inline>>),
}

/// A parsed description, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Parses markdown source into the reduced document model.
#[must_use]
pub fn parse(source: &str) -> Document {
    let arena = Arena::new();
    let root = parse_document(&arena, source, &Options::default());

    let mut blocks = Vec::new();
    for node in root.children() {
        collect_block(node, &mut blocks);
    }
    Document { blocks }
}

fn collect_block<'a>(node: &'a AstNode<'a>, blocks: &mut Vec<Block>) {
    match &node.data.borrow().value {
        NodeValue::Paragraph => {
            let inlines = collect_inlines(node, &Context::default());
            if !inlines.is_empty() {
                blocks.push(Block::Paragraph(inlines));
            }
        }
        NodeValue::Heading(_) => {
            let inlines = collect_inlines(node, &Context::default());
            if !inlines.is_empty() {
                blocks.push(Block::Heading(inlines));
            }
        }
        NodeValue::List(_) => {
            let mut items = Vec::new();
            for item in node.children() {
                let mut inlines = Vec::new();
                // Items wrap their text in paragraphs; flatten them.
                for child in item.children() {
                    inlines.extend(collect_inlines(child, &Context::default()));
                }
                if !inlines.is_empty() {
                    items.push(inlines);
                }
            }
            if !items.is_empty() {
                blocks.push(Block::List(items));
            }
        }
        // Fenced code keeps its text in the node's literal, not in child
        // text nodes, so it needs its own arm to survive.
        NodeValue::CodeBlock(block) => {
            let literal = block.literal.trim_end_matches('\n');
            if !literal.is_empty() {
                blocks.push(Block::Paragraph(vec![Inline {
                    text: literal.to_string(),
                    code: true,
                    ..Inline::default()
                }]));
            }
        }
        // Other unsupported blocks (block quotes, tables) degrade to their
        // inline text content rather than disappearing.
        _ => {
            let inlines = collect_inlines(node, &Context::default());
            if !inlines.is_empty() {
                blocks.push(Block::Paragraph(inlines));
            }
        }
    }
}

/// Inline styling context carried down the AST walk.
#[derive(Debug, Clone, Default)]
struct Context {
    strong: bool,
    emphasis: bool,
    link: Option<String>,
}

fn collect_inlines<'a>(node: &'a AstNode<'a>, ctx: &Context) -> Vec<Inline> {
    let mut inlines = Vec::new();
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(content) => inlines.push(styled(content.clone(), ctx, false)),
            NodeValue::Code(code) => inlines.push(styled(code.literal.clone(), ctx, true)),
            NodeValue::SoftBreak | NodeValue::LineBreak => {
                inlines.push(styled(" ".to_string(), ctx, false));
            }
            NodeValue::Strong => {
                let inner = Context {
                    strong: true,
                    ..ctx.clone()
                };
                inlines.extend(collect_inlines(child, &inner));
            }
            NodeValue::Emph => {
                let inner = Context {
                    emphasis: true,
                    ..ctx.clone()
                };
                inlines.extend(collect_inlines(child, &inner));
            }
            NodeValue::Link(link) => {
                let inner = Context {
                    link: Some(link.url.clone()),
                    ..ctx.clone()
                };
                inlines.extend(collect_inlines(child, &inner));
            }
            _ => inlines.extend(collect_inlines(child, ctx)),
        }
    }
    inlines
}

fn styled(text: String, ctx: &Context, code: bool) -> Inline {
    Inline {
        text,
        strong: ctx.strong,
        emphasis: ctx.emphasis,
        code,
        link: ctx.link.clone(),
    }
}

/// Visual parameters for rendering a document.
#[derive(Debug, Clone, Copy)]
pub struct Appearance {
    pub text_size: f32,
    pub text_color: Color,
    pub link_color: Color,
}

/// Renders the document as a column of rich-text blocks. Clicking a link span
/// emits the link's URL.
pub fn view(doc: &Document, appearance: Appearance) -> Element<'_, String> {
    let mut content: Column<'_, String> = column![].spacing(appearance.text_size * 0.6);

    for block in &doc.blocks {
        let element: Element<'_, String> = match block {
            Block::Heading(inlines) => heading(inlines, appearance),
            Block::Paragraph(inlines) => paragraph(inlines, appearance),
            Block::List(items) => list(items, appearance),
        };
        content = content.push(element);
    }

    content.into()
}

fn heading(inlines: &[Inline], appearance: Appearance) -> Element<'_, String> {
    let emphasized = Appearance {
        text_size: appearance.text_size * 1.2,
        ..appearance
    };
    rich_text(spans(
        inlines,
        Context {
            strong: true,
            ..Context::default()
        },
        emphasized,
    ))
    .into()
}

fn paragraph(inlines: &[Inline], appearance: Appearance) -> Element<'_, String> {
    rich_text(spans(inlines, Context::default(), appearance)).into()
}

fn list<'a>(items: &'a [Vec<Inline>], appearance: Appearance) -> Element<'a, String> {
    let rows = items.iter().map(|item| {
        row![
            text("•").size(appearance.text_size).color(appearance.text_color),
            paragraph(item, appearance),
        ]
        .spacing(appearance.text_size * 0.5)
        .into()
    });

    column(rows).spacing(appearance.text_size * 0.3).into()
}

fn spans<'a>(
    inlines: &'a [Inline],
    base: Context,
    appearance: Appearance,
) -> Vec<iced::widget::text::Span<'a, String>> {
    inlines
        .iter()
        .map(|inline| {
            let mut font = Font::default();
            if inline.strong || base.strong {
                font.weight = Weight::Bold;
            }
            if inline.emphasis {
                font.style = FontStyle::Italic;
            }
            if inline.code {
                font = Font {
                    weight: font.weight,
                    ..Font::MONOSPACE
                };
            }

            let mut span = span(inline.text.as_str())
                .size(appearance.text_size)
                .font(font)
                .color(appearance.text_color);

            if let Some(url) = &inline.link {
                span = span
                    .color(appearance.link_color)
                    .underline(true)
                    .link(url.clone());
            }

            span
        })
        .collect()
}
