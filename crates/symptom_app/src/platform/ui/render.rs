use ratatui::layout::Position;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use symptom_core::FormViewModel;

use super::constants::*;
use super::layout::{self, FormLayout};

const ACCENT: Color = Color::Magenta;

pub fn render(frame: &mut Frame, view: &FormViewModel) {
    let areas = layout::split(frame.area(), view);

    frame.render_widget(
        Paragraph::new(TITLE).bold().fg(ACCENT).centered(),
        areas.title,
    );
    render_input(frame, &areas, view);

    if let Some(error) = view.error_banner.as_deref() {
        let banner = Paragraph::new(Line::from(vec![
            Span::styled(ERROR_PREFIX, Style::new().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::raw(error),
        ]))
        .wrap(Wrap { trim: false })
        .fg(Color::Red)
        .block(Block::bordered().border_style(Style::new().fg(Color::Red)));
        frame.render_widget(banner, areas.banner);
    }

    let button_style = if view.submit_enabled {
        Style::new().fg(Color::White).bg(ACCENT).bold()
    } else {
        Style::new().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(format!("[ {} ]", view.submit_label))
            .style(button_style)
            .centered(),
        areas.button,
    );

    if let Some(loading) = view.loading_text {
        frame.render_widget(
            Paragraph::new(loading).fg(ACCENT).italic().centered(),
            areas.loading,
        );
    }

    if let Some(result) = view.result.as_deref() {
        let panel = Paragraph::new(result)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title(RESULT_TITLE).border_style(Style::new().fg(ACCENT)));
        frame.render_widget(panel, areas.result);
    }

    frame.render_widget(Paragraph::new(KEY_HINTS).fg(Color::DarkGray), areas.footer);
}

fn render_input(frame: &mut Frame, areas: &FormLayout, view: &FormViewModel) {
    let text = if view.input.is_empty() {
        Line::from(INPUT_PLACEHOLDER).fg(Color::DarkGray)
    } else {
        Line::from(view.input.as_str())
    };
    let style = if view.input_enabled {
        Style::new()
    } else {
        Style::new().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(style)
            .block(Block::bordered().title(INPUT_LABEL)),
        areas.input,
    );

    if view.input_enabled {
        let typed = u16::try_from(view.input.chars().count()).unwrap_or(u16::MAX);
        let max_x = areas.input.right().saturating_sub(2);
        let x = areas.input.x.saturating_add(1).saturating_add(typed).min(max_x);
        frame.set_cursor_position(Position::new(x, areas.input.y + 1));
    }
}
