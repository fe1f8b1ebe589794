pub mod random;
pub mod reveal;
pub mod scope;

pub use random::{weighted_choice, WeightedTable};
pub use reveal::{reveal_class, use_reveal};
pub use scope::{use_effect_scope, ScopeHandle};
