mod effect;
mod middleware;
#[allow(clippy::module_inception)]
mod store;
mod subscription;

pub use {
    effect::Effect,
    middleware::{ChainPolicy, Middleware},
    store::{Reducer, Store},
    subscription::Subscription,
};

pub(crate) use subscription::Observers;
