//! Dashboard composition: snapshot in, view tree out.
//!
//! Each section lives in its own module and is a pure function of the
//! snapshot. Handlers close over a clone of [`Actions`] and only run when the
//! frontend fires them.
mod chart;
mod filters;
mod header;
mod records;
mod summary;

use dashboard_core::Snapshot;
use runtime::Actions;

use crate::{config::FrontendConfig, pipeline::Composer, view::ViewNode};

pub use chart::{palette, production_chart};
pub use filters::{filter_options, filter_panel, format_label};
pub use header::header;
pub use records::{format_date, records_table};
pub use summary::{metric_cards, summary_panel};

pub const LOADING_TEXT: &str = "Loading data...";

/// Composer for the full dashboard screen.
#[derive(Clone, Debug, Default)]
pub struct DashboardComposer {
    config: FrontendConfig,
}

impl DashboardComposer {
    pub fn new(config: FrontendConfig) -> Self {
        Self { config }
    }
}

impl Composer for DashboardComposer {
    fn compose(&self, snapshot: &Snapshot, actions: &Actions) -> ViewNode {
        let body = if snapshot.loading {
            ViewNode::Panel {
                title: LOADING_TEXT.to_string(),
                subtitle: None,
                children: Vec::new(),
            }
        } else {
            ViewNode::Row {
                weights: vec![1, 3],
                children: vec![
                    filter_panel(snapshot.dataset, &snapshot.filters, actions),
                    ViewNode::Column(vec![
                        summary_panel(snapshot.dataset, snapshot.summary.as_ref()),
                        production_chart(snapshot.dataset, &snapshot.series),
                        records_table(
                            snapshot.dataset,
                            &snapshot.records,
                            self.config.max_table_rows,
                        ),
                    ]),
                ],
            }
        };

        ViewNode::Column(vec![header(snapshot, actions), body])
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use dashboard_core::{Dataset, Store};
    use runtime::{FixtureLoader, fixtures};

    use super::*;

    fn actions() -> Actions {
        Actions::new(Store::default(), Rc::new(FixtureLoader))
    }

    fn loaded(dataset: Dataset) -> Snapshot {
        let data = fixtures::dashboard_data(dataset);
        Snapshot {
            dataset,
            summary: data.summary,
            series: data.series,
            records: data.records,
            loading: false,
            ..Snapshot::default()
        }
    }

    #[test]
    fn loading_state_shows_only_header_and_loading_panel() {
        let tree = DashboardComposer::default().compose(&Snapshot::default(), &actions());

        assert!(tree.contains_text(LOADING_TEXT));
        assert!(!tree.contains_text("Executive summary"));
        // Dataset and theme chips stay interactive while loading.
        assert_eq!(tree.interactives().len(), 4);
    }

    #[test]
    fn loaded_state_lays_out_every_section() {
        let tree = DashboardComposer::default().compose(&loaded(Dataset::Surgical), &actions());

        for title in [
            "University Hospital",
            "Advanced filters",
            "Executive summary",
            "Monthly trend",
            "Recent activity",
        ] {
            assert!(tree.contains_text(title), "missing {title}");
        }
        assert!(!tree.contains_text(LOADING_TEXT));
        // 4 header chips plus the specialty and team selects.
        assert_eq!(tree.interactives().len(), 6);
    }

    #[test]
    fn composition_does_not_touch_the_store() {
        let actions = actions();
        let notified = Rc::new(std::cell::Cell::new(0));
        let counter = Rc::clone(&notified);
        let _sub = actions
            .store()
            .subscribe(move |_| counter.set(counter.get() + 1));

        DashboardComposer::default().compose(&loaded(Dataset::Ambulatory), &actions);
        assert_eq!(notified.get(), 1);
    }
}
