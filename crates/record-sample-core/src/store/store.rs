use crate::store::{ChainPolicy, Middleware, Observers, Subscription};

use std::fmt::Debug;

use tokio::task::JoinSet;
use tracing::{debug, error, instrument, trace};

/// Reducer signature: the only function allowed to change the state.
pub type Reducer<S, A> = fn(&mut S, &A);

/// Single source of truth for the state tree.
///
/// All mutation goes through [`dispatch`](Store::dispatch). Effects returned
/// by middlewares run as tokio tasks; their follow-up actions come back to
/// whichever task owns the store, through [`settle`](Store::settle) or
/// [`next_follow_up`](Store::next_follow_up), and re-enter `dispatch` there.
///
/// # Thread Safety
///
/// The store is meant to live on one task (the host's main context). It must
/// be used inside a tokio runtime because `dispatch` spawns effect tasks.
/// In-flight effects are never cancelled by later dispatches; dropping the
/// store aborts them.
///
/// Middlewares run synchronously inside `dispatch` on the owning task's
/// thread. Recorder middlewares block it briefly (stream setup, teardown
/// and a few milliseconds of callback settling); anything longer belongs
/// in an effect.
pub struct Store<S, A> {
    state: S,
    reducer: Reducer<S, A>,
    middlewares: Vec<Box<dyn Middleware<S, A>>>,
    policy: ChainPolicy,
    effects: JoinSet<A>,
    observers: Observers<S>,
}

impl<S, A> Store<S, A>
where
    S: 'static,
    A: Debug + Send + 'static,
{
    /// Creates a store with the default [`ChainPolicy`].
    ///
    /// Middlewares run in the order given.
    pub fn new(
        state: S,
        reducer: Reducer<S, A>,
        middlewares: Vec<Box<dyn Middleware<S, A>>>,
    ) -> Self {
        Self {
            state,
            reducer,
            middlewares,
            policy: ChainPolicy::default(),
            effects: JoinSet::new(),
            observers: Observers::new(),
        }
    }

    /// Replaces the chain policy.
    pub fn with_chain_policy(mut self, policy: ChainPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current state snapshot.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Chain policy in effect.
    pub fn chain_policy(&self) -> ChainPolicy {
        self.policy
    }

    /// Number of middleware effects still running.
    pub fn pending_effects(&self) -> usize {
        self.effects.len()
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Registers an observer called after every completed dispatch.
    ///
    /// The observer must not subscribe or unsubscribe from inside the
    /// callback.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&S) + Send + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    /// Reduces `action`, runs the middlewares and notifies observers.
    #[instrument(level = "debug", skip(self))]
    pub fn dispatch(&mut self, action: A) {
        (self.reducer)(&mut self.state, &action);

        for middleware in self.middlewares.iter_mut() {
            match middleware.handle(&self.state, &action) {
                Some(effect) => {
                    if let Some(future) = effect.into_future() {
                        trace!(middleware = middleware.name(), "Effect spawned");
                        self.effects.spawn(future);
                    }
                }
                None => match self.policy {
                    ChainPolicy::HaltOnMissingEffect => {
                        debug!(
                            middleware = middleware.name(),
                            "No effect, skipping remaining middlewares"
                        );
                        break;
                    }
                    ChainPolicy::ContinueOnMissingEffect => {}
                },
            }
        }

        self.observers.notify(&self.state);
    }

    /// Waits for one effect to finish and dispatches its follow-up action.
    ///
    /// Returns `false` immediately when no effect is pending. Guard it with
    /// [`pending_effects`](Store::pending_effects) inside `select!` loops.
    pub async fn next_follow_up(&mut self) -> bool {
        match self.effects.join_next().await {
            Some(Ok(action)) => {
                debug!(action = ?action, "Follow-up action");
                self.dispatch(action);
                true
            }
            Some(Err(e)) => {
                error!(error = ?e, "Middleware effect task failed");
                true
            }
            None => false,
        }
    }

    /// Dispatches follow-ups until no effect is pending, including effects
    /// spawned by those follow-ups.
    pub async fn settle(&mut self) {
        while self.next_follow_up().await {}
    }
}
