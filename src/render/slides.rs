// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Render the slide viewport.
//!
//! Slides are laid out side by side, one viewport wide each, and the strip is
//! shifted by the eased container offset. Slides straddling an edge are
//! clipped by scrolling their text.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    App,
    model::{NodeId, Page},
    render::icons::{ICON_NEXT, ICON_PREV},
    theme::Theme,
    util::format::{center, wrap_words},
};

// Columns kept free on each side of the body text for the buttons.
const BODY_MARGIN: usize = 4;

pub(crate) fn draw_slides(f: &mut Frame, area: Rect, app: &mut App, offset: f64) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.frame_colour));
    let inner = block.inner(area);
    f.render_widget(block, area);
    app.hits.set_viewport(inner);

    let slides = app.page.element_children(app.slider.wrapper());
    if slides.is_empty() {
        f.render_widget(
            Paragraph::new("No slides configured")
                .alignment(Alignment::Center)
                .fg(app.theme.error_fg),
            inner,
        );
        return;
    }

    let extent = app.slider.slide_extent();
    let width = f64::from(inner.width);
    for (i, &slide) in slides.iter().enumerate() {
        let left = (i as f64 * extent + offset).round();
        let visible_left = left.max(0.0);
        let visible_right = (left + extent).min(width);
        if visible_right <= visible_left {
            continue;
        }

        let area = Rect::new(
            inner.x + visible_left as u16,
            inner.y,
            (visible_right - visible_left) as u16,
            inner.height,
        );
        let skip = (visible_left - left) as u16;
        let lines = slide_lines(&app.page, slide, extent as usize, inner.height, &app.theme);
        f.render_widget(Paragraph::new(lines).scroll((0, skip)), area);
    }

    draw_buttons(f, inner, app);
}

fn slide_lines(
    page: &Page,
    slide: NodeId,
    width: usize,
    height: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let title = text_of(page, slide, "h2");
    let body = text_of(page, slide, "p");

    let mut lines = vec![
        Line::from(Span::styled(
            center(&title, width),
            Style::default().fg(theme.title_fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for row in wrap_words(&body, width.saturating_sub(2 * BODY_MARGIN)) {
        lines.push(Line::from(Span::styled(
            center(&row, width),
            Style::default().fg(theme.body_fg),
        )));
    }

    let top = usize::from(height).saturating_sub(lines.len()) / 2;
    let mut padded = vec![Line::from(""); top];
    padded.extend(lines);
    padded
}

fn text_of(page: &Page, slide: NodeId, tag: &str) -> String {
    page.query_selector(Some(slide), tag)
        .ok()
        .flatten()
        .map(|node| page.text_content(node))
        .unwrap_or_default()
}

fn draw_buttons(f: &mut Frame, area: Rect, app: &mut App) {
    if area.width < 8 || area.height == 0 {
        return;
    }
    let y = area.y + area.height / 2;
    let style = Style::default()
        .fg(app.theme.button_fg)
        .add_modifier(Modifier::BOLD);

    let buttons = [
        (app.slider.previous_button(), area.x, ICON_PREV),
        (app.slider.next_button(), area.right() - 3, ICON_NEXT),
    ];
    for (button, x, icon) in buttons {
        let Some(button) = button else {
            continue;
        };
        let rect = Rect::new(x, y, 3, 1);
        f.render_widget(
            Paragraph::new(icon).alignment(Alignment::Center).style(style),
            rect,
        );
        app.hits.add(rect, button);
    }
}
