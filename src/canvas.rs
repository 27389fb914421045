use std::io::Stdout;

use tui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph},
    Frame, Terminal,
};

use crate::{
    app::{App, PanelField},
    constants::{GALLERY_HELP_TEXT, HELP_TEXT},
    utils::general::round_to_cell,
};

/// The styles used outside the items themselves.
#[derive(Debug, Clone)]
struct CanvasStyles {
    text: Style,
    muted: Style,
    selected: Style,
    border: Style,
}

impl Default for CanvasStyles {
    fn default() -> Self {
        Self {
            text: Style::default().fg(Color::Gray),
            muted: Style::default().fg(Color::DarkGray),
            selected: Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),
        }
    }
}

/// Handles drawing the demo.
#[derive(Debug, Default)]
pub struct Painter {
    styles: CanvasStyles,
}

impl Painter {
    pub fn init() -> Self {
        Self::default()
    }

    pub fn draw_data(
        &self, terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App,
    ) -> anyhow::Result<()> {
        terminal.draw(|f| self.draw_frame(f, app))?;

        Ok(())
    }

    /// Draws a whole frame. The strip's area is handed back to the app, as
    /// it's also the carousel's viewport.
    fn draw_frame(&self, f: &mut Frame<'_>, app: &mut App) {
        let panel_height = if app.show_panel() {
            PANEL_ROWS + 2
        } else {
            0
        };

        let [strip, dots, panel, help] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(panel_height),
            Constraint::Length(1),
        ])
        .areas(f.area());

        app.set_carousel_area(strip);

        self.draw_strip(f, app, strip);
        self.draw_page_indicator(f, app, dots);
        if app.show_panel() {
            self.draw_panel(f, app, panel);
        }
        self.draw_help(f, app, help);
    }

    fn draw_strip(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let controller = app.controller();
        let layout = controller.layout();
        let viewport = controller.viewport();
        let width = controller.item_width();
        let offset = app.displayed_offset();

        for (slot, item) in controller.wrapped_data().enumerate() {
            let x = f32::from(area.x) + layout.slot_position(viewport, offset, slot);
            let Some(rect) = slot_rect(area, x, width, app.item_height(), controller.slot_scale(slot))
            else {
                continue;
            };

            let colour = item.colour();
            let is_active = slot == controller.active_index();
            let block = Block::bordered()
                .border_type(if is_active {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(Style::default().fg(colour));

            // Pad from the top so the label sits in the middle.
            let inner_height = rect.height.saturating_sub(2);
            let mut lines = vec![Line::default(); usize::from(inner_height.saturating_sub(1) / 2)];
            let mut label_style = Style::default().fg(colour);
            if is_active {
                label_style = label_style.add_modifier(Modifier::BOLD);
            }
            lines.push(Line::styled(item.label(), label_style));

            f.render_widget(
                Paragraph::new(Text::from(lines))
                    .alignment(Alignment::Center)
                    .block(block),
                rect,
            );
        }
    }

    fn draw_page_indicator(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let controller = app.controller();
        let current = controller.external_index();

        let spans: Vec<Span<'_>> = controller
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if index == current {
                    Span::styled("● ", Style::default().fg(item.colour()))
                } else {
                    Span::styled("○ ", self.styles.muted)
                }
            })
            .collect();

        f.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn draw_panel(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let panel = app.panel();
        let controller = app.controller();

        let mut lines: Vec<Line<'_>> = panel
            .fields()
            .map(|(field, value)| {
                let value = match field {
                    PanelField::Spacing | PanelField::Headspace => format!("{value:.0}"),
                    PanelField::SidesScaling => format!("{value:.2}"),
                    PanelField::AutoScrollInterval if panel.is_auto_scroll_enabled() => {
                        format!("{value:.0}s")
                    }
                    PanelField::AutoScrollInterval => format!("{value:.0}s (off)"),
                };
                let text = format!(" {:<22}{value:>10} ", field.name());

                if field == panel.selected() {
                    Line::styled(text, self.styles.selected)
                } else {
                    Line::styled(text, self.styles.text)
                }
            })
            .collect();

        lines.push(Line::styled(
            format!(
                " Wrap: {}  Auto-scroll: {}  Timer: {}  Focus: {}",
                on_off(panel.is_wrap()),
                on_off(panel.is_auto_scroll_enabled()),
                if controller.is_timer_active() {
                    "running"
                } else {
                    "paused"
                },
                if app.is_foreground() {
                    "foreground"
                } else {
                    "background"
                },
            ),
            self.styles.text,
        ));

        let last_event = match app.last_event() {
            Some(event) => format!("{event:?}"),
            None => "-".to_string(),
        };
        lines.push(Line::styled(
            format!(" Last event: {last_event}"),
            self.styles.muted,
        ));

        f.render_widget(
            Paragraph::new(Text::from(lines)).block(
                Block::bordered()
                    .title(" Controls ")
                    .border_style(self.styles.border),
            ),
            area,
        );
    }

    fn draw_help(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let help = if app.show_panel() {
            HELP_TEXT
        } else {
            GALLERY_HELP_TEXT
        };

        f.render_widget(
            Paragraph::new(help)
                .style(self.styles.muted)
                .alignment(Alignment::Center),
            area,
        );
    }
}

/// The rows the control panel needs inside its border: one per field, plus
/// the status and last event lines.
const PANEL_ROWS: u16 = 6;

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Where an item starting at column `x` lands within `area`. Items are
/// scaled vertically only and centered in the strip, then clipped to it.
/// Returns `None` if nothing would be visible.
fn slot_rect(area: Rect, x: f32, width: f32, height: u16, scale: f32) -> Option<Rect> {
    let full_height = height.min(area.height);
    let scaled_height = round_to_cell(f32::from(full_height) * scale).clamp(0, i32::from(full_height));
    if scaled_height == 0 {
        return None;
    }

    let left = round_to_cell(x).max(i32::from(area.left()));
    let right = round_to_cell(x + width).min(i32::from(area.right()));
    if right <= left {
        return None;
    }

    // Both are within the area, so these fit in a u16.
    let scaled_height = scaled_height as u16;
    let y = area.y + (area.height - scaled_height) / 2;

    Some(Rect::new(
        left as u16,
        y,
        (right - left) as u16,
        scaled_height,
    ))
}
