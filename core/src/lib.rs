//! Computation behind the weekly budget screens.
//!
//! Everything in `week` is pure arithmetic over the shared models: the
//! screens fetch data through the client crate, hand it over here, and render
//! whatever comes back. `resource` bridges one-shot fetches into that
//! synchronous render flow.

pub mod currency;
pub mod resource;
pub mod week;

pub use resource::{ReadState, Resource, Settlement};
pub use week::{
    carried_balance, compute_remaining, counts_toward_week, edit_cutoff, is_editable,
    next_week_anchor, previous_week_anchor, split_amount, Split,
};
