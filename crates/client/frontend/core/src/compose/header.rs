use std::rc::Rc;

use dashboard_core::{Dataset, Snapshot, Theme};
use runtime::Actions;
use strum::IntoEnumIterator;

use crate::view::{Chip, Tone, ViewNode};

pub const BRAND: &str = "University Hospital";
pub const TAGLINE: &str = "Indicators managed in real time";

/// Brand block plus the dataset and theme chip groups.
pub fn header(snapshot: &Snapshot, actions: &Actions) -> ViewNode {
    let dataset_chips = Dataset::iter()
        .map(|dataset| {
            let actions = actions.clone();
            Chip {
                label: dataset.label().to_string(),
                active: dataset == snapshot.dataset,
                on_press: Rc::new(move || {
                    let _ = actions.change_dataset(dataset);
                }),
            }
        })
        .collect();

    let theme_chips = Theme::iter()
        .map(|theme| {
            let actions = actions.clone();
            Chip {
                label: theme.label().to_string(),
                active: theme == snapshot.theme,
                on_press: Rc::new(move || actions.toggle_theme(theme)),
            }
        })
        .collect();

    ViewNode::Row {
        weights: vec![2, 1, 1],
        children: vec![
            ViewNode::Column(vec![
                ViewNode::toned(BRAND, Tone::Accent),
                ViewNode::toned(TAGLINE, Tone::Muted),
            ]),
            ViewNode::ChipGroup {
                label: "Dataset".to_string(),
                chips: dataset_chips,
            },
            ViewNode::ChipGroup {
                label: "Theme".to_string(),
                chips: theme_chips,
            },
        ],
    }
}
