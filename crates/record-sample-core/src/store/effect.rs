use std::{future::Future, pin::Pin};

type EffectFuture<A> = Pin<Box<dyn Future<Output = A> + Send + 'static>>;

/// Asynchronous work returned by a middleware.
///
/// An effect either resolves to exactly one follow-up action or is empty.
/// An empty effect means "nothing to do" and, unlike a missing effect,
/// never stops the middleware chain.
pub struct Effect<A> {
    future: Option<EffectFuture<A>>,
}

impl<A: Send + 'static> Effect<A> {
    /// An effect that resolves to nothing.
    pub fn none() -> Self {
        Self { future: None }
    }

    /// An effect that immediately yields `action`.
    ///
    /// The action is still delivered asynchronously, after the current
    /// dispatch has finished.
    pub fn just(action: A) -> Self {
        Self::future(async move { action })
    }

    /// An effect whose follow-up action is produced by `future`.
    pub fn future<F>(future: F) -> Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        Self {
            future: Some(Box::pin(future)),
        }
    }

    /// True for an empty effect.
    pub fn is_none(&self) -> bool {
        self.future.is_none()
    }

    pub(crate) fn into_future(self) -> Option<EffectFuture<A>> {
        self.future
    }
}

impl<A> std::fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effect")
            .field("pending", &self.future.is_some())
            .finish()
    }
}
