//! Draws the mounted view tree.
//!
//! The tree is framework-agnostic; this module lays it out with ratatui. Each
//! node reports a height hint, columns and panels stack their children, rows
//! split horizontally by weight. Interactive nodes are counted in the same
//! depth-first order as `ViewNode::interactives`, which is how the focused
//! one is found.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use client_frontend_core::view::{Tone, ViewNode};
use dashboard_core::{Dataset, Theme};

use crate::presentation::{terminal::Tui, theme::DashboardTheme, widgets};

/// Everything needed to draw one frame.
pub struct RenderContext<'a> {
    pub tree: Option<&'a ViewNode>,
    pub theme: Theme,
    pub dataset: Dataset,
    /// Index of the focused interactive node.
    pub focus: usize,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Draws a full frame: the tree above a one-line key legend.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let palette = DashboardTheme::new(ctx.theme, ctx.dataset);
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let [body, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    match ctx.tree {
        Some(tree) => {
            let mut painter = Painter {
                palette: &palette,
                focus: ctx.focus,
                next_interactive: 0,
            };
            painter.node(frame, body, tree);
        }
        None => frame.render_widget(
            Paragraph::new("Starting...").style(palette.tone(Tone::Muted)),
            body,
        ),
    }

    widgets::footer::render(frame, footer, &palette);
}

struct Painter<'a> {
    palette: &'a DashboardTheme,
    focus: usize,
    next_interactive: usize,
}

impl Painter<'_> {
    /// Claims the next interactive slot; true when it holds focus.
    fn claim_focus(&mut self) -> bool {
        let focused = self.next_interactive == self.focus;
        self.next_interactive += 1;
        focused
    }

    fn node(&mut self, frame: &mut Frame, area: Rect, node: &ViewNode) {
        match node {
            ViewNode::Column(children) => self.stack(frame, area, children),
            ViewNode::Row { weights, children } => {
                let constraints = children
                    .iter()
                    .enumerate()
                    .map(|(index, _)| Constraint::Fill(weights.get(index).copied().unwrap_or(1)));
                let areas = Layout::horizontal(constraints).split(area);
                for (child, child_area) in children.iter().zip(areas.iter()) {
                    self.node(frame, *child_area, child);
                }
            }
            ViewNode::Panel {
                title,
                subtitle,
                children,
            } => {
                let block = Block::bordered()
                    .title(Span::styled(
                        format!(" {title} "),
                        self.palette.tone(Tone::Accent),
                    ))
                    .border_style(self.palette.border(false));
                let inner = block.inner(area);
                frame.render_widget(block, area);

                let content = match subtitle {
                    Some(subtitle) => {
                        let [line, rest] =
                            Layout::vertical([Constraint::Length(1), Constraint::Min(0)])
                                .areas(inner);
                        frame.render_widget(
                            Paragraph::new(subtitle.as_str()).style(self.palette.tone(Tone::Muted)),
                            line,
                        );
                        rest
                    }
                    None => inner,
                };
                self.stack(frame, content, children);
            }
            ViewNode::Text { text, tone } => {
                frame.render_widget(
                    Paragraph::new(text.as_str()).style(self.palette.tone(*tone)),
                    area,
                );
            }
            ViewNode::ChipGroup { label, chips } => {
                let mut spans = Vec::with_capacity(chips.len() * 2);
                for chip in chips {
                    let focused = self.claim_focus();
                    spans.push(Span::styled(
                        format!(" {} ", chip.label),
                        self.palette.chip(chip.active, focused),
                    ));
                    spans.push(Span::raw(" "));
                }
                let block = Block::bordered()
                    .title(format!(" {label} "))
                    .border_style(self.palette.border(false));
                frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
            }
            ViewNode::Select(select) => {
                let focused = self.claim_focus();
                let current = select
                    .options
                    .get(select.selected)
                    .map(String::as_str)
                    .unwrap_or_default();
                let value_style = if focused {
                    self.palette.chip(false, true)
                } else {
                    self.palette.tone(Tone::Normal)
                };
                let line = Line::from(vec![
                    Span::styled("◂ ", self.palette.tone(Tone::Muted)),
                    Span::styled(current.to_string(), value_style),
                    Span::styled(" ▸", self.palette.tone(Tone::Muted)),
                ]);
                let block = Block::bordered()
                    .title(format!(" {} ", select.label))
                    .border_style(self.palette.border(focused));
                frame.render_widget(Paragraph::new(line).block(block), area);
            }
            ViewNode::Metrics(cards) => widgets::metrics::render(frame, area, cards, self.palette),
            ViewNode::Chart(chart) => widgets::chart::render(frame, area, chart, self.palette),
            ViewNode::Table(table) => widgets::table::render(frame, area, table, self.palette),
        }
    }

    fn stack(&mut self, frame: &mut Frame, area: Rect, children: &[ViewNode]) {
        let areas = Layout::vertical(children.iter().map(constraint)).split(area);
        for (child, child_area) in children.iter().zip(areas.iter()) {
            self.node(frame, *child_area, child);
        }
    }
}

/// Minimum height of `node` and whether it can use extra space.
fn height_hint(node: &ViewNode) -> (u16, bool) {
    match node {
        ViewNode::Text { .. } => (1, false),
        ViewNode::ChipGroup { .. } | ViewNode::Select(_) => (3, false),
        ViewNode::Metrics(_) => (4, false),
        ViewNode::Chart(_) => (10, true),
        ViewNode::Table(_) => (4, true),
        ViewNode::Column(children) => stacked(children),
        ViewNode::Panel {
            subtitle, children, ..
        } => {
            let (height, grows) = stacked(children);
            let chrome = 2 + u16::from(subtitle.is_some());
            (height.saturating_add(chrome), grows)
        }
        ViewNode::Row { children, .. } => children
            .iter()
            .map(height_hint)
            .fold((0, false), |(height, grows), (h, g)| {
                (height.max(h), grows || g)
            }),
    }
}

fn stacked(children: &[ViewNode]) -> (u16, bool) {
    children
        .iter()
        .map(height_hint)
        .fold((0, false), |(height, grows), (h, g)| {
            (height.saturating_add(h), grows || g)
        })
}

fn constraint(node: &ViewNode) -> Constraint {
    match height_hint(node) {
        (height, true) => Constraint::Min(height),
        (height, false) => Constraint::Length(height),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use client_frontend_core::{Composer, DashboardComposer};
    use dashboard_core::{Snapshot, Store};
    use ratatui::{Terminal, backend::TestBackend};
    use runtime::{Actions, FixtureLoader, fixtures};

    use super::*;

    fn screen(ctx: &RenderContext) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 60)).unwrap();
        terminal.draw(|frame| draw(frame, ctx)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn compose(snapshot: &Snapshot) -> ViewNode {
        let actions = Actions::new(Store::default(), Rc::new(FixtureLoader));
        DashboardComposer::default().compose(snapshot, &actions)
    }

    #[test]
    fn loading_frame_shows_loading_panel() {
        let tree = compose(&Snapshot::default());
        let text = screen(&RenderContext {
            tree: Some(&tree),
            theme: Theme::Standard,
            dataset: Dataset::Ambulatory,
            focus: 0,
        });

        assert!(text.contains("University Hospital"));
        assert!(text.contains("Loading data..."));
        assert!(text.contains("quit"));
    }

    #[test]
    fn loaded_frame_draws_every_section() {
        let data = fixtures::dashboard_data(Dataset::Surgical);
        let snapshot = Snapshot {
            dataset: Dataset::Surgical,
            summary: data.summary,
            series: data.series,
            records: data.records,
            loading: false,
            ..Snapshot::default()
        };
        let tree = compose(&snapshot);
        let text = screen(&RenderContext {
            tree: Some(&tree),
            theme: Theme::OnCall,
            dataset: Dataset::Surgical,
            focus: 4,
        });

        for expected in [
            "Advanced filters",
            "Executive summary",
            "Procedures",
            "Monthly trend",
            "Recent activity",
            "Team",
        ] {
            assert!(text.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn missing_tree_draws_placeholder() {
        let text = screen(&RenderContext {
            tree: None,
            theme: Theme::Standard,
            dataset: Dataset::Ambulatory,
            focus: 0,
        });
        assert!(text.contains("Starting..."));
    }

    #[test]
    fn height_hints_add_panel_chrome() {
        let panel = ViewNode::Panel {
            title: "Filters".into(),
            subtitle: Some("sub".into()),
            children: vec![ViewNode::text("a"), ViewNode::text("b")],
        };
        assert_eq!(height_hint(&panel), (5, false));
        assert_eq!(constraint(&panel), Constraint::Length(5));
    }
}
