//! End-to-end runs of the client with a scripted, headless frontend.
use std::{cell::RefCell, rc::Rc};

use anyhow::Result;
use async_trait::async_trait;
use tokio::task::LocalSet;

use client_frontend_core::{DashboardComposer, Frontend, Mount, RenderPipeline, Trigger};
use dashboard_client::Client;
use dashboard_core::{Dataset, Filters, Snapshot, Store};
use runtime::{Actions, FixtureLoader, fixtures};

/// Lets spawned refresh tasks run to completion against fixtures.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// Drives the mounted tree the way a user would, recording what it saw.
#[derive(Default)]
struct ScriptedFrontend {
    frames: Rc<RefCell<Vec<String>>>,
}

impl ScriptedFrontend {
    fn capture(&self, mount: &Mount, label: &str) {
        let loaded = mount.with_tree(|tree| tree.is_some_and(|t| t.contains_text("Executive summary")));
        self.frames
            .borrow_mut()
            .push(format!("{label}:{}", if loaded { "loaded" } else { "loading" }));
    }
}

#[async_trait(?Send)]
impl Frontend for ScriptedFrontend {
    async fn run(&mut self, actions: Actions) -> Result<()> {
        let mount = Mount::new();
        let pipeline = RenderPipeline::attach(
            actions.store(),
            mount.clone(),
            DashboardComposer::default(),
            actions.clone(),
        );
        self.capture(&mount, "attach");

        settle().await;
        self.capture(&mount, "initial");

        // Focus order: dataset chips, theme chips, then the filter selects.
        assert!(mount.trigger(1, Trigger::Press));
        self.capture(&mount, "dataset");
        settle().await;

        assert!(mount.trigger(5, Trigger::Next));
        settle().await;
        self.capture(&mount, "filter");

        pipeline.detach();
        Ok(())
    }
}

#[tokio::test]
async fn user_flow_switches_dataset_and_filters() {
    LocalSet::new()
        .run_until(async {
            let store = Store::new(Snapshot::default());
            let frontend = ScriptedFrontend::default();
            let frames = Rc::clone(&frontend.frames);

            Client::builder()
                .store(store.clone())
                .loader(Rc::new(FixtureLoader))
                .frontend(frontend)
                .build()
                .unwrap()
                .run()
                .await
                .unwrap();

            assert_eq!(
                *frames.borrow(),
                [
                    "attach:loading",
                    "initial:loaded",
                    "dataset:loading",
                    "filter:loaded"
                ]
            );

            let state = store.get_state();
            assert_eq!(state.dataset, Dataset::Surgical);
            assert_eq!(
                state.filters,
                Filters::from([("team".to_string(), "Team 1".to_string())])
            );
            assert!(!state.loading);
            assert_eq!(state.summary, Some(fixtures::summary(Dataset::Surgical)));
            assert_eq!(store.subscriber_count(), 0);
        })
        .await;
}

#[test]
fn builder_requires_loader_and_frontend() {
    let missing_loader = Client::builder()
        .frontend(ScriptedFrontend::default())
        .build()
        .err()
        .unwrap();
    assert!(missing_loader.to_string().contains("Loader is required"));

    let missing_frontend = Client::builder()
        .loader(Rc::new(FixtureLoader))
        .build()
        .err()
        .unwrap();
    assert!(missing_frontend.to_string().contains("Frontend is required"));
}
