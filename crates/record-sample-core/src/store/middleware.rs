use crate::store::Effect;

/// A side-effecting observer of the dispatch pipeline.
///
/// Called after the reducer with the post-reduction state and the original
/// action. Returning `None` means "no effect", which the store's
/// [`ChainPolicy`] may treat as a signal to skip the remaining middlewares.
/// Return [`Effect::none`] for "nothing to do" when the chain should go on.
pub trait Middleware<S, A> {
    /// Observe one dispatch.
    fn handle(&mut self, state: &S, action: &A) -> Option<Effect<A>>;

    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<S, A, F> Middleware<S, A> for F
where
    F: FnMut(&S, &A) -> Option<Effect<A>>,
{
    fn handle(&mut self, state: &S, action: &A) -> Option<Effect<A>> {
        self(state, action)
    }
}

/// What the store does when a middleware returns no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainPolicy {
    /// Skip every middleware after the one that returned `None`.
    ///
    /// Middlewares registered later are gated on the earlier ones having
    /// something to say about the action.
    #[default]
    HaltOnMissingEffect,
    /// Keep evaluating the remaining middlewares.
    ContinueOnMissingEffect,
}
