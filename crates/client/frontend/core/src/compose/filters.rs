use std::rc::Rc;

use dashboard_core::{Dataset, Filters};
use runtime::Actions;

use crate::view::{Select, ViewNode};

type FilterSpec = (&'static str, &'static [&'static str]);

const AMBULATORY: &[FilterSpec] = &[
    (
        "specialty",
        &[
            "All",
            "Cardiology",
            "Internal Medicine",
            "Endocrinology",
            "Pediatrics",
        ],
    ),
    (
        "professional",
        &[
            "All",
            "Dr. João Alves",
            "Dra. Fernanda Rocha",
            "Dra. Luiza Costa",
        ],
    ),
];

const SURGICAL: &[FilterSpec] = &[
    ("specialty", &["All", "General", "Orthopedics", "Neurology"]),
    ("team", &["All", "Team 1", "Team 2", "Team 3"]),
];

/// Filter names and their options for `dataset`, in display order.
/// The first option is the implicit default.
pub fn filter_options(dataset: Dataset) -> &'static [FilterSpec] {
    match dataset {
        Dataset::Ambulatory => AMBULATORY,
        Dataset::Surgical => SURGICAL,
    }
}

/// Turns a filter key into a label: `avgStay` / `avg_stay` -> `Avg Stay` /
/// `Avg stay`.
pub fn format_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        match ch {
            '_' => label.push(' '),
            ch if ch.is_uppercase() => {
                label.push(' ');
                label.push(ch);
            }
            ch => label.push(ch),
        }
    }

    let trimmed = label.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn filter_panel(dataset: Dataset, filters: &Filters, actions: &Actions) -> ViewNode {
    let selects = filter_options(dataset)
        .iter()
        .map(|(name, options)| {
            let selected = filters
                .get(*name)
                .and_then(|current| {
                    options
                        .iter()
                        .position(|option| *option == current.as_str())
                })
                .unwrap_or(0);
            let actions = actions.clone();
            let key = name.to_string();

            ViewNode::Select(Select {
                name: name.to_string(),
                label: format_label(name),
                options: options.iter().map(|option| option.to_string()).collect(),
                selected,
                on_change: Rc::new(move |value: &str| {
                    let _ = actions.apply_filter(key.clone(), value);
                }),
            })
        })
        .collect();

    ViewNode::Panel {
        title: "Advanced filters".to_string(),
        subtitle: Some("Refine the analysis by combining filters.".to_string()),
        children: selects,
    }
}

#[cfg(test)]
mod tests {
    use dashboard_core::Store;
    use runtime::FixtureLoader;

    use super::*;
    use crate::view::Interactive;

    fn selections(dataset: Dataset, filters: &Filters) -> Vec<(String, String, String)> {
        let actions = Actions::new(Store::default(), Rc::new(FixtureLoader));
        let panel = filter_panel(dataset, filters, &actions);
        panel
            .interactives()
            .into_iter()
            .filter_map(|node| match node {
                Interactive::Select(select) => Some((
                    select.name.clone(),
                    select.label.clone(),
                    select.options[select.selected].clone(),
                )),
                Interactive::Chip(_) => None,
            })
            .collect()
    }

    #[test]
    fn labels_split_camel_case_and_underscores() {
        assert_eq!(format_label("specialty"), "Specialty");
        assert_eq!(format_label("avgStay"), "Avg Stay");
        assert_eq!(format_label("wait_days"), "Wait days");
        assert_eq!(format_label(""), "");
    }

    #[test]
    fn missing_filter_defaults_to_first_option() {
        let filters = Filters::from([("team".to_string(), "Team 2".to_string())]);
        assert_eq!(
            selections(Dataset::Surgical, &filters),
            [
                ("specialty".into(), "Specialty".into(), "All".into()),
                ("team".into(), "Team".into(), "Team 2".into()),
            ]
        );
    }

    #[test]
    fn unknown_filter_value_falls_back_to_first_option() {
        let filters = Filters::from([("professional".to_string(), "Dr. Nobody".to_string())]);
        let selected = selections(Dataset::Ambulatory, &filters);
        assert_eq!(selected[1].2, "All");
    }
}
