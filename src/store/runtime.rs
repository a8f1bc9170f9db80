//! The store: a single task that owns [`NationsState`].
//!
//! Handles send commands over an mpsc channel; the task applies intents one
//! at a time, publishes an immutable snapshot after every transition and
//! spawns fetches whose outcomes come back on a second channel. Readers only
//! ever see whole snapshots, never a half-applied transition.

use std::collections::VecDeque;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};

use crate::api::NationsApi;
use crate::ui::mvi::Reducer;

use super::effects::{execute, Effect, EffectOrchestrator, FetchOutcome, FetchRequest};
use super::intent::NationsIntent;
use super::observer::DispatchObserver;
use super::reducer::NationsReducer;
use super::state::NationsState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Store runtime has stopped")]
    Stopped,
}

enum StoreCommand {
    Dispatch(NationsIntent),
    /// Answer once no fetch is in flight.
    WhenSettled { respond_to: oneshot::Sender<()> },
}

enum Event {
    Command(Option<StoreCommand>),
    Completed(FetchOutcome),
}

/// Entry point for building a store.
pub struct Store;

impl Store {
    pub fn builder<A: NationsApi>(api: Arc<A>) -> StoreBuilder<A> {
        StoreBuilder {
            api,
            state: NationsState::default(),
            observers: Vec::new(),
        }
    }
}

pub struct StoreBuilder<A> {
    api: Arc<A>,
    state: NationsState,
    observers: Vec<Box<dyn DispatchObserver>>,
}

impl<A: NationsApi> StoreBuilder<A> {
    pub fn initial_state(mut self, state: NationsState) -> Self {
        self.state = state;
        self
    }

    pub fn observer(mut self, observer: impl DispatchObserver) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Start the runtime on the current tokio runtime.
    ///
    /// The runtime stops once every [`StoreHandle`] has been dropped.
    pub fn spawn(self) -> StoreHandle {
        let (commands_tx, commands) = mpsc::unbounded_channel();
        let (completions_tx, completions) = mpsc::unbounded_channel();
        let (snapshots, snapshot_rx) = watch::channel(Arc::new(self.state.clone()));

        let runtime = StoreRuntime {
            api: self.api,
            state: self.state,
            effects: EffectOrchestrator::new(),
            observers: self.observers,
            snapshots,
            commands,
            completions_tx,
            completions,
            in_flight: 0,
            settle_waiters: Vec::new(),
        };
        tokio::spawn(runtime.run());

        StoreHandle {
            commands: commands_tx,
            snapshots: snapshot_rx,
        }
    }
}

struct StoreRuntime<A> {
    api: Arc<A>,
    state: NationsState,
    effects: EffectOrchestrator,
    observers: Vec<Box<dyn DispatchObserver>>,
    snapshots: watch::Sender<Arc<NationsState>>,
    commands: mpsc::UnboundedReceiver<StoreCommand>,
    completions_tx: mpsc::UnboundedSender<FetchOutcome>,
    completions: mpsc::UnboundedReceiver<FetchOutcome>,
    in_flight: usize,
    settle_waiters: Vec<oneshot::Sender<()>>,
}

impl<A: NationsApi> StoreRuntime<A> {
    async fn run(mut self) {
        self.apply(NationsIntent::Init);

        loop {
            let event = tokio::select! {
                command = self.commands.recv() => Event::Command(command),
                Some(outcome) = self.completions.recv() => Event::Completed(outcome),
            };

            match event {
                Event::Command(Some(StoreCommand::Dispatch(intent))) => self.apply(intent),
                Event::Command(Some(StoreCommand::WhenSettled { respond_to })) => {
                    self.settle_waiters.push(respond_to);
                }
                Event::Command(None) => break,
                Event::Completed(outcome) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    if let Some(intent) = self.effects.resolve(outcome) {
                        self.apply(intent);
                    }
                }
            }

            if self.in_flight == 0 {
                for waiter in self.settle_waiters.drain(..) {
                    if waiter.send(()).is_err() {
                        tracing::trace!("Store: settled notification dropped (receiver gone)");
                    }
                }
            }
        }

        tracing::debug!(in_flight = self.in_flight, "Store runtime stopped");
    }

    /// Reduce `intent` and every intent derived from it, in order.
    fn apply(&mut self, intent: NationsIntent) {
        let mut queue = VecDeque::from([intent]);

        while let Some(intent) = queue.pop_front() {
            let previous = std::mem::take(&mut self.state);
            let next = NationsReducer::reduce(previous.clone(), intent.clone());
            for observer in &self.observers {
                observer.on_transition(&intent, &previous, &next);
            }
            self.state = next;
            self.snapshots.send_replace(Arc::new(self.state.clone()));

            for effect in self.effects.react(&intent, &self.state) {
                match effect {
                    Effect::Dispatch(derived) => queue.push_back(derived),
                    Effect::Fetch(request) => self.spawn_fetch(request),
                }
            }
        }
    }

    fn spawn_fetch(&mut self, request: FetchRequest) {
        self.in_flight += 1;
        let api = Arc::clone(&self.api);
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let outcome = execute(api.as_ref(), request).await;
            if completions.send(outcome).is_err() {
                tracing::trace!("Store: fetch finished after runtime stopped");
            }
        });
    }
}

/// Cloneable handle to a running store.
#[derive(Clone)]
pub struct StoreHandle {
    commands: mpsc::UnboundedSender<StoreCommand>,
    snapshots: watch::Receiver<Arc<NationsState>>,
}

impl StoreHandle {
    /// Queue `intent`. Never blocks.
    pub fn dispatch(&self, intent: impl Into<NationsIntent>) -> Result<(), StoreError> {
        self.commands
            .send(StoreCommand::Dispatch(intent.into()))
            .map_err(|_| StoreError::Stopped)
    }

    /// Latest published snapshot.
    pub fn state(&self) -> Arc<NationsState> {
        Arc::clone(&self.snapshots.borrow())
    }

    /// Run `selector` against the latest snapshot.
    pub fn select<V>(&self, selector: impl FnOnce(&NationsState) -> V) -> V {
        let state = self.state();
        selector(state.as_ref())
    }

    /// Receiver notified after every transition.
    pub fn subscribe(&self) -> watch::Receiver<Arc<NationsState>> {
        self.snapshots.clone()
    }

    /// Wait until every intent dispatched so far has been applied and no
    /// fetch is in flight, then return the snapshot.
    pub async fn settled(&self) -> Result<Arc<NationsState>, StoreError> {
        let (respond_to, receiver) = oneshot::channel();
        self.commands
            .send(StoreCommand::WhenSettled { respond_to })
            .map_err(|_| StoreError::Stopped)?;
        receiver.await.map_err(|_| StoreError::Stopped)?;
        Ok(self.state())
    }

    /// Wait for the first snapshot satisfying `predicate`.
    pub async fn wait_for(
        &self,
        mut predicate: impl FnMut(&NationsState) -> bool,
    ) -> Result<Arc<NationsState>, StoreError> {
        let mut snapshots = self.snapshots.clone();
        let state = snapshots
            .wait_for(|state| predicate(state.as_ref()))
            .await
            .map_err(|_| StoreError::Stopped)?;
        Ok(Arc::clone(&state))
    }
}
