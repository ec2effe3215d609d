use ratatui::layout::{Constraint, Layout, Rect};
use symptom_core::FormViewModel;

use super::constants::ERROR_PREFIX;

/// Screen regions of the form, top to bottom. Hidden sections get zero height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub title: Rect,
    pub input: Rect,
    pub banner: Rect,
    pub button: Rect,
    pub loading: Rect,
    pub result: Rect,
    pub footer: Rect,
}

pub fn split(area: Rect, view: &FormViewModel) -> FormLayout {
    let banner_height = view
        .error_banner
        .as_deref()
        .map(|message| bordered_height(ERROR_PREFIX.len() + 1 + message.chars().count(), area.width))
        .unwrap_or(0);
    let loading_height = u16::from(view.loading_text.is_some());
    let result = if view.result.is_some() {
        Constraint::Min(3)
    } else {
        Constraint::Fill(1)
    };

    let [title, input, banner, button, loading, result, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(banner_height),
        Constraint::Length(1),
        Constraint::Length(loading_height),
        result,
        Constraint::Length(1),
    ])
    .areas(area);

    FormLayout {
        title,
        input,
        banner,
        button,
        loading,
        result,
        footer,
    }
}

/// Rows needed to show `text_len` characters wrapped inside a bordered block.
fn bordered_height(text_len: usize, width: u16) -> u16 {
    let inner = usize::from(width.saturating_sub(2)).max(1);
    let lines = text_len.div_ceil(inner).max(1);
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}
