//! All built-in lint rule implementations.
//!
//! This module re-exports the individual rule types and provides
//! `register_builtin_rules` to add all of them to a `LintEngine`.

mod l101;
mod l102;
mod l103;

pub use l101::TrailingWhitespace;
pub use l102::NoDebugger;
pub use l103::MaxLineLength;

use crate::LintEngine;

/// Registers every built-in rule with `engine`.
pub fn register_builtin_rules(engine: &mut LintEngine) {
    engine.register(Box::new(TrailingWhitespace));
    engine.register(Box::new(NoDebugger));
    engine.register(Box::new(MaxLineLength));
}
