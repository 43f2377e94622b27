//! Framework-agnostic view tree produced by composition.
//!
//! A tree is rebuilt from scratch for every snapshot. Interactive nodes carry
//! their handlers as `Rc` closures, so dropping a tree drops its handlers.
use std::{fmt, rc::Rc};

/// Handler fired when a chip is pressed.
pub type Callback = Rc<dyn Fn()>;

/// Handler fired with the newly chosen option of a select.
pub type SelectCallback = Rc<dyn Fn(&str)>;

/// Semantic emphasis; frontends map it to concrete styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Normal,
    Muted,
    Accent,
    Positive,
    Negative,
}

/// 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub enum ViewNode {
    /// Children stacked top to bottom.
    Column(Vec<ViewNode>),
    /// Children side by side; `weights` has one entry per child.
    Row {
        weights: Vec<u16>,
        children: Vec<ViewNode>,
    },
    Panel {
        title: String,
        subtitle: Option<String>,
        children: Vec<ViewNode>,
    },
    Text {
        text: String,
        tone: Tone,
    },
    ChipGroup {
        label: String,
        chips: Vec<Chip>,
    },
    Select(Select),
    Metrics(Vec<MetricCard>),
    Chart(Chart),
    Table(Table),
}

pub struct Chip {
    pub label: String,
    pub active: bool,
    pub on_press: Callback,
}

pub struct Select {
    pub name: String,
    pub label: String,
    pub options: Vec<String>,
    pub selected: usize,
    pub on_change: SelectCallback,
}

impl Select {
    /// Option `step` positions away from the current one, wrapping around.
    pub fn option_at_offset(&self, step: isize) -> Option<&str> {
        let len = self.options.len() as isize;
        if len == 0 {
            return None;
        }
        let index = (self.selected as isize + step).rem_euclid(len) as usize;
        self.options.get(index).map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub trend: Trend,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trend {
    pub text: String,
    pub direction: TrendDirection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub labels: Vec<String>,
    pub lines: Vec<ChartLine>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLine {
    pub name: String,
    pub values: Vec<f64>,
    pub color: Rgb,
    pub dashed: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Borrowed view of an interactive node, in tree order.
#[derive(Clone, Copy)]
pub enum Interactive<'a> {
    Chip(&'a Chip),
    Select(&'a Select),
}

impl ViewNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            tone: Tone::Normal,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self::Text {
            text: text.into(),
            tone,
        }
    }

    /// Row with equal weights.
    pub fn row(children: Vec<ViewNode>) -> Self {
        Self::Row {
            weights: vec![1; children.len()],
            children,
        }
    }

    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Column(children)
            | ViewNode::Row { children, .. }
            | ViewNode::Panel { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    /// Interactive nodes in depth-first order. This order is the focus order.
    pub fn interactives(&self) -> Vec<Interactive<'_>> {
        let mut found = Vec::new();
        self.collect_interactives(&mut found);
        found
    }

    fn collect_interactives<'a>(&'a self, found: &mut Vec<Interactive<'a>>) {
        match self {
            ViewNode::ChipGroup { chips, .. } => {
                found.extend(chips.iter().map(Interactive::Chip));
            }
            ViewNode::Select(select) => found.push(Interactive::Select(select)),
            other => {
                for child in other.children() {
                    child.collect_interactives(found);
                }
            }
        }
    }

    /// Depth-first search for the first text node containing `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            ViewNode::Text { text, .. } => text.contains(needle),
            ViewNode::Panel {
                title,
                subtitle,
                children,
            } => {
                title.contains(needle)
                    || subtitle.as_deref().is_some_and(|s| s.contains(needle))
                    || children.iter().any(|child| child.contains_text(needle))
            }
            other => other.children().iter().any(|child| child.contains_text(needle)),
        }
    }
}

impl fmt::Debug for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewNode::Column(children) => f.debug_tuple("Column").field(children).finish(),
            ViewNode::Row { weights, children } => f
                .debug_struct("Row")
                .field("weights", weights)
                .field("children", children)
                .finish(),
            ViewNode::Panel {
                title, children, ..
            } => f
                .debug_struct("Panel")
                .field("title", title)
                .field("children", children)
                .finish(),
            ViewNode::Text { text, .. } => f.debug_tuple("Text").field(text).finish(),
            ViewNode::ChipGroup { label, chips } => f
                .debug_struct("ChipGroup")
                .field("label", label)
                .field(
                    "chips",
                    &chips.iter().map(|chip| &chip.label).collect::<Vec<_>>(),
                )
                .finish(),
            ViewNode::Select(select) => f
                .debug_struct("Select")
                .field("name", &select.name)
                .field("selected", &select.options.get(select.selected))
                .finish(),
            ViewNode::Metrics(cards) => f.debug_tuple("Metrics").field(cards).finish(),
            ViewNode::Chart(chart) => f.debug_tuple("Chart").field(&chart.labels).finish(),
            ViewNode::Table(table) => f
                .debug_struct("Table")
                .field("headers", &table.headers)
                .field("rows", &table.rows.len())
                .finish(),
        }
    }
}
