//! Bracket construction, seeding helpers, and score propagation.

pub(crate) mod duel;
pub(crate) mod ffa;
mod groups;
pub(crate) mod results;
mod robin;
pub(crate) mod scoring;
mod seeding;

pub use groups::groups;
pub use robin::robin;
pub use seeding::{duel_expected, seeds};
