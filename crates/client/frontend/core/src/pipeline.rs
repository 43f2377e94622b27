//! Render pipeline: the single store subscriber that rebuilds the view.
//!
//! Every notification recomposes the whole tree from the snapshot and swaps
//! it into the [`Mount`]. Nothing is patched in place, so handlers bound to
//! an older tree are dropped together with it.
use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use dashboard_core::{Snapshot, Store, Subscription};
use runtime::Actions;

use crate::view::{Callback, Interactive, SelectCallback, ViewNode};

/// Builds a view tree from one snapshot.
///
/// Implementations must not mutate the store while composing; handlers they
/// attach run later, from input handling.
pub trait Composer {
    fn compose(&self, snapshot: &Snapshot, actions: &Actions) -> ViewNode;
}

impl<F> Composer for F
where
    F: Fn(&Snapshot, &Actions) -> ViewNode,
{
    fn compose(&self, snapshot: &Snapshot, actions: &Actions) -> ViewNode {
        self(snapshot, actions)
    }
}

/// Input directed at an interactive node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Press a chip, or advance a select.
    Press,
    /// Select the next option.
    Next,
    /// Select the previous option.
    Previous,
}

/// Fixed container holding the most recently rendered tree.
///
/// Cloning yields another handle to the same container.
#[derive(Clone, Default)]
pub struct Mount {
    inner: Rc<MountInner>,
}

#[derive(Default)]
struct MountInner {
    tree: RefCell<Option<ViewNode>>,
    generation: Cell<u64>,
}

enum Fire {
    Press(Callback),
    Choose(SelectCallback, String),
}

impl Mount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in `tree`, dropping the previous tree and its handlers.
    /// Returns the new generation.
    pub fn replace(&self, tree: ViewNode) -> u64 {
        let previous = self.inner.tree.replace(Some(tree));
        drop(previous);
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        generation
    }

    /// Number of trees mounted so far.
    pub fn generation(&self) -> u64 {
        self.inner.generation.get()
    }

    pub fn with_tree<R>(&self, f: impl FnOnce(Option<&ViewNode>) -> R) -> R {
        f(self.inner.tree.borrow().as_ref())
    }

    pub fn interactive_count(&self) -> usize {
        self.with_tree(|tree| tree.map_or(0, |tree| tree.interactives().len()))
    }

    /// Fires the handler of the interactive node at `index` (focus order).
    ///
    /// The handler is cloned out of the tree before it runs, so it may cause
    /// a re-render that replaces this very tree. Returns `false` when no
    /// handler applies.
    pub fn trigger(&self, index: usize, trigger: Trigger) -> bool {
        let fire = self.with_tree(|tree| {
            let tree = tree?;
            match (tree.interactives().into_iter().nth(index)?, trigger) {
                (Interactive::Chip(chip), Trigger::Press) => {
                    Some(Fire::Press(Rc::clone(&chip.on_press)))
                }
                (Interactive::Chip(_), _) => None,
                (Interactive::Select(select), trigger) => {
                    let step = if trigger == Trigger::Previous { -1 } else { 1 };
                    let option = select.option_at_offset(step)?.to_string();
                    Some(Fire::Choose(Rc::clone(&select.on_change), option))
                }
            }
        });

        match fire {
            Some(Fire::Press(on_press)) => {
                on_press();
                true
            }
            Some(Fire::Choose(on_change, option)) => {
                on_change(&option);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mount")
            .field("generation", &self.generation())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Rendering,
}

struct Renderer {
    mount: Mount,
    composer: Box<dyn Composer>,
    actions: Actions,
    phase: Cell<Phase>,
    parked: RefCell<Option<Snapshot>>,
    renders: Cell<u64>,
}

/// Resets the phase to `Idle` when a render ends, including on unwind.
struct RenderingGuard<'a>(&'a Cell<Phase>);

impl<'a> RenderingGuard<'a> {
    fn enter(phase: &'a Cell<Phase>) -> Self {
        phase.set(Phase::Rendering);
        Self(phase)
    }
}

impl Drop for RenderingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(Phase::Idle);
    }
}

impl Renderer {
    fn on_snapshot(&self, snapshot: Snapshot) {
        if self.phase.get() == Phase::Rendering {
            tracing::warn!("notification arrived mid-render; deferring it to the end of this pass");
            self.parked.replace(Some(snapshot));
            return;
        }

        let mut next = Some(snapshot);
        while let Some(snapshot) = next {
            let tree = {
                let _rendering = RenderingGuard::enter(&self.phase);
                self.composer.compose(&snapshot, &self.actions)
            };
            let generation = self.mount.replace(tree);
            self.renders.set(self.renders.get() + 1);
            tracing::trace!(
                generation,
                dataset = %snapshot.dataset,
                loading = snapshot.loading,
                "view rebuilt"
            );
            next = self.parked.take();
        }
    }
}

/// Subscription that keeps a [`Mount`] in sync with a [`Store`].
///
/// Dropping the pipeline detaches it.
pub struct RenderPipeline {
    renderer: Rc<Renderer>,
    store: Store,
    subscription: Option<Subscription>,
}

impl RenderPipeline {
    /// Subscribes to `store`. The first render happens before this returns.
    pub fn attach(
        store: &Store,
        mount: Mount,
        composer: impl Composer + 'static,
        actions: Actions,
    ) -> Self {
        let renderer = Rc::new(Renderer {
            mount,
            composer: Box::new(composer),
            actions,
            phase: Cell::new(Phase::Idle),
            parked: RefCell::new(None),
            renders: Cell::new(0),
        });

        let weak: Weak<Renderer> = Rc::downgrade(&renderer);
        let subscription = store.subscribe(move |snapshot| {
            if let Some(renderer) = weak.upgrade() {
                renderer.on_snapshot(snapshot);
            }
        });
        tracing::debug!(subscriber = ?subscription.id(), "render pipeline attached");

        Self {
            renderer,
            store: store.clone(),
            subscription: Some(subscription),
        }
    }

    /// Completed renders since attach.
    pub fn renders(&self) -> u64 {
        self.renderer.renders.get()
    }

    pub fn mount(&self) -> &Mount {
        &self.renderer.mount
    }

    /// Stops listening to the store. The last tree stays mounted.
    pub fn detach(mut self) {
        self.unsubscribe();
    }

    fn unsubscribe(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            let id = subscription.id();
            if self.store.unsubscribe(id) {
                tracing::debug!(subscriber = ?id, "render pipeline detached");
            }
        }
    }
}

impl Drop for RenderPipeline {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for RenderPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPipeline")
            .field("renders", &self.renders())
            .field("attached", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use dashboard_core::{Dataset, Patch, Theme};
    use runtime::FixtureLoader;
    use tokio::task::LocalSet;

    use super::*;
    use crate::view::Chip;

    fn actions(store: &Store) -> Actions {
        Actions::new(store.clone(), Rc::new(FixtureLoader))
    }

    fn theme_chip(snapshot: &Snapshot, actions: &Actions) -> ViewNode {
        let actions = actions.clone();
        ViewNode::ChipGroup {
            label: format!("{}", snapshot.theme),
            chips: vec![Chip {
                label: "On-call".into(),
                active: snapshot.theme == Theme::OnCall,
                on_press: Rc::new(move || actions.toggle_theme(Theme::OnCall)),
            }],
        }
    }

    #[test]
    fn renders_once_per_notification() {
        let store = Store::default();
        let mount = Mount::new();
        let pipeline = RenderPipeline::attach(&store, mount.clone(), theme_chip, actions(&store));
        assert_eq!(pipeline.renders(), 1);

        store.set_state(Patch::new().loading(false));
        store.set_state(Patch::new());
        assert_eq!(pipeline.renders(), 3);
        assert_eq!(mount.generation(), 3);
    }

    #[test]
    fn rerender_drops_previous_handlers() {
        let store = Store::default();
        let mount = Mount::new();
        let _pipeline =
            RenderPipeline::attach(&store, mount.clone(), theme_chip, actions(&store));

        let old_handler = mount.with_tree(|tree| match tree {
            Some(ViewNode::ChipGroup { chips, .. }) => Rc::downgrade(&chips[0].on_press),
            other => panic!("unexpected tree {other:?}"),
        });
        assert!(old_handler.upgrade().is_some());

        store.set_state(Patch::new().dataset(Dataset::Surgical));
        assert!(old_handler.upgrade().is_none());
    }

    #[test]
    fn triggered_handler_rerenders_through_the_store() {
        let store = Store::default();
        let mount = Mount::new();
        let pipeline = RenderPipeline::attach(&store, mount.clone(), theme_chip, actions(&store));

        assert!(mount.trigger(0, Trigger::Press));
        assert!(!mount.trigger(0, Trigger::Next));
        assert!(!mount.trigger(5, Trigger::Press));

        assert_eq!(store.get_state().theme, Theme::OnCall);
        assert_eq!(pipeline.renders(), 2);
        mount.with_tree(|tree| match tree {
            Some(ViewNode::ChipGroup { chips, .. }) => assert!(chips[0].active),
            other => panic!("unexpected tree {other:?}"),
        });
    }

    #[test]
    fn detach_stops_rendering_and_keeps_last_tree() {
        let store = Store::default();
        let mount = Mount::new();
        let pipeline = RenderPipeline::attach(&store, mount.clone(), theme_chip, actions(&store));
        pipeline.detach();
        assert_eq!(store.subscriber_count(), 0);

        store.set_state(Patch::new().theme(Theme::OnCall));
        assert_eq!(mount.generation(), 1);
        assert_eq!(mount.interactive_count(), 1);
    }

    #[test]
    fn notification_during_render_is_deferred() {
        let store = Store::default();
        let mount = Mount::new();
        let composed = Rc::new(RefCell::new(Vec::new()));
        let reentry: Rc<RefCell<Weak<Renderer>>> = Rc::new(RefCell::new(Weak::new()));

        let log = Rc::clone(&composed);
        let hook = Rc::clone(&reentry);
        let composer = move |snapshot: &Snapshot, _: &Actions| {
            log.borrow_mut().push(snapshot.theme);
            if snapshot.theme == Theme::Standard
                && let Some(renderer) = hook.borrow().upgrade()
            {
                renderer.on_snapshot(Snapshot {
                    theme: Theme::OnCall,
                    ..snapshot.clone()
                });
                assert_eq!(renderer.renders.get(), 0);
            }
            ViewNode::text(snapshot.theme.label())
        };

        let renderer = Rc::new(Renderer {
            mount: mount.clone(),
            composer: Box::new(composer),
            actions: actions(&store),
            phase: Cell::new(Phase::Idle),
            parked: RefCell::new(None),
            renders: Cell::new(0),
        });
        *reentry.borrow_mut() = Rc::downgrade(&renderer);

        renderer.on_snapshot(store.get_state());

        assert_eq!(*composed.borrow(), [Theme::Standard, Theme::OnCall]);
        assert_eq!(renderer.renders.get(), 2);
        assert_eq!(renderer.phase.get(), Phase::Idle);
        mount.with_tree(|tree| assert!(tree.is_some_and(|t| t.contains_text("On-call"))));
    }

    #[tokio::test]
    async fn select_handler_applies_filter_inside_local_set() {
        LocalSet::new()
            .run_until(async {
                let store = Store::default();
                let mount = Mount::new();
                let composer = |snapshot: &Snapshot, actions: &Actions| {
                    let actions = actions.clone();
                    let options = vec!["All".to_string(), "Team 1".to_string()];
                    let selected = snapshot
                        .filters
                        .get("team")
                        .and_then(|value| options.iter().position(|o| o == value))
                        .unwrap_or(0);
                    ViewNode::Select(crate::view::Select {
                        name: "team".into(),
                        label: "Team".into(),
                        options,
                        selected,
                        on_change: Rc::new(move |value: &str| {
                            let _ = actions.apply_filter("team", value);
                        }),
                    })
                };
                let _pipeline =
                    RenderPipeline::attach(&store, mount.clone(), composer, actions(&store));

                assert!(mount.trigger(0, Trigger::Next));
                assert_eq!(
                    store.get_state().filters.get("team").map(String::as_str),
                    Some("Team 1")
                );
                assert!(store.get_state().loading);

                for _ in 0..4 {
                    tokio::task::yield_now().await;
                }
                assert!(!store.get_state().loading);
            })
            .await;
    }
}
