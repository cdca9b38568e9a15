//! Rendering of the radio form (pure line builders + frame drawing).
//!
//! The hidden flag is projected to presentation here and only here: a hidden
//! wrapper contributes no lines at all, a visible wrapper renders its slot
//! fields indented beneath the option it belongs to. The actual flag is
//! maintained by `visibility.rs`; this module never mutates it.

use color_eyre::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::schema::{ConditionalField, FieldKind, FormDocument, RadioGroup};

/// Placeholder rendered for a field's (host-owned) value area.
fn placeholder(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "________",
        FieldKind::Secret => "••••••••",
        FieldKind::Number => "####",
        FieldKind::Date => "YYYY-MM-DD",
    }
}

fn field_line(field: &ConditionalField) -> Line<'static> {
    Line::from(vec![
        Span::raw("      "),
        Span::styled(format!("{}: ", field.label), Style::default().fg(Color::Gray)),
        Span::styled(
            placeholder(&field.kind).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Compose the lines for a single group. `focused` is the index of the
/// focused option within this group, if the group has focus.
pub fn group_lines(group: &RadioGroup, focused: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        group.name.clone(),
        Style::default().fg(Color::White).bold(),
    )));

    for (idx, option) in group.options.iter().enumerate() {
        let marker = if option.checked { "(x)" } else { "( )" };
        let label = format!("{marker} {}", option.label);
        if focused == Some(idx) {
            lines.push(Line::from(vec![
                Span::raw("> "),
                Span::styled(label, Style::default().fg(Color::Black).bg(Color::White)),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(label, Style::default().fg(Color::White)),
            ]));
        }

        // A wrapper only shows up while its hidden flag is cleared.
        if let Some(wrapper) = group.wrapper_for(&option.value) {
            if !wrapper.hidden {
                for field in &wrapper.slot {
                    lines.push(field_line(field));
                }
            }
        }
    }

    lines
}

/// Compose the lines for the whole form. Fields that were never relocated
/// stay in their original location at form level and are always shown.
pub fn form_lines(doc: &FormDocument, focus: (usize, usize)) -> Vec<Line<'static>> {
    let (focused_group, focused_option) = focus;
    let mut lines = Vec::new();

    for (idx, group) in doc.groups.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::raw(""));
        }
        let focused = (idx == focused_group).then_some(focused_option);
        lines.extend(group_lines(group, focused));
    }

    if !doc.unattached.is_empty() {
        lines.push(Line::raw(""));
        for field in &doc.unattached {
            lines.push(field_line(field));
        }
    }

    lines
}

/// Draw the form into `area`.
pub fn render_form(
    doc: &FormDocument,
    focus: (usize, usize),
    f: &mut Frame<'_>,
    area: Rect,
) -> Result<()> {
    if area.width < 5 || area.height < 3 {
        return Ok(());
    }
    let text = Text::from(form_lines(doc, focus));
    let para = Paragraph::new(text).wrap(Wrap { trim: false });
    f.render_widget(para, area);
    Ok(())
}
