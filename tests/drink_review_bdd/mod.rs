//! Support modules for drink review BDD tests.

pub(crate) mod state;

pub(crate) use state::ReviewState;
