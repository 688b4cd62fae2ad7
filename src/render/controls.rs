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

//! Render the position markers, the logo row and the status line.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    render::icons::{ICON_AUTOPLAY, ICON_WARNING, MARKER, MARKER_ACTIVE},
    slider::indicator::ACTIVE_CLASS,
    util::format::parse_percent,
};

/// Draws one marker per real slide, centred, two columns apart.
pub(crate) fn draw_indicators(f: &mut Frame, area: Rect, app: &mut App) {
    let Some(indicators) = app.slider.indicators() else {
        return;
    };
    let markers = indicators.markers().to_vec();

    let span = (markers.len() * 2).saturating_sub(1) as u16;
    let start = area.x + area.width.saturating_sub(span) / 2;
    for (n, marker) in markers.into_iter().enumerate() {
        let x = start.saturating_add(n as u16 * 2);
        if x >= area.right() {
            break;
        }
        let (symbol, colour) = if app.page.has_class(marker, ACTIVE_CLASS) {
            (MARKER_ACTIVE, app.theme.highlight)
        } else {
            (MARKER, app.theme.marker_fg)
        };
        let rect = Rect::new(x, area.y, 1, 1);
        f.render_widget(Paragraph::new(symbol).fg(colour), rect);
        app.hits.add(rect, marker);
    }
}

/// Draws the displayed logos in their declared order and widths.
pub(crate) fn draw_logos(f: &mut Frame, area: Rect, app: &mut App) {
    let Some(strip) = app.slider.logos() else {
        return;
    };
    let logos = strip.logos(&app.page).unwrap_or_default();
    if logos.is_empty() {
        return;
    }
    let share = 100.0 / logos.len() as f64;

    let mut shown: Vec<_> = logos
        .into_iter()
        .filter(|&logo| app.page.style(logo, "display") != Some("none"))
        .map(|logo| {
            let order: usize = app
                .page
                .style(logo, "order")
                .and_then(|o| o.parse().ok())
                .unwrap_or(0);
            (order, logo)
        })
        .collect();
    shown.sort_by_key(|&(order, _)| order);

    let mut x = area.x;
    for (_, logo) in shown {
        let percent = app
            .page
            .style(logo, "width")
            .and_then(parse_percent)
            .unwrap_or(share);
        let width = ((f64::from(area.width) * percent / 100.0) as u16)
            .max(1)
            .min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }

        let style = if app.page.has_class(logo, ACTIVE_CLASS) {
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.logo_fg)
        };
        let rect = Rect::new(x, area.y, width, 1);
        f.render_widget(
            Paragraph::new(app.page.text_content(logo))
                .alignment(Alignment::Center)
                .style(style),
            rect,
        );
        app.hits.add(rect, logo);
        x += width;
    }
}

/// Shows the last interaction error, or the position and key help.
pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(message) => Line::from(vec![
            Span::styled(
                format!(" {ICON_WARNING} "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(message.clone()),
        ])
        .fg(app.theme.error_fg),
        None => {
            let position = match app.slider.real_ordinal() {
                Some(ordinal) => format!(" {}/{} ", ordinal + 1, app.slider.real_count()),
                None => " -/- ".to_string(),
            };
            let autoplay = if app.slider.is_autoplay() {
                format!("{ICON_AUTOPLAY} ")
            } else {
                String::new()
            };
            Line::from(vec![
                Span::styled(position, Style::default().add_modifier(Modifier::BOLD))
                    .fg(app.theme.highlight),
                Span::raw(autoplay),
                Span::raw("\u{2190}/h \u{2192}/l move  1-9 jump  drag to swipe  q quit"),
            ])
        }
    };

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme.status_bg)),
        area,
    );
}
