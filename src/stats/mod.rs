pub mod derive;
pub mod key;

pub use derive::{derive, per_game, round2, DerivedStats};
pub use key::StatKey;
