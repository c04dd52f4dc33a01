//! Startup validation of the constant rule tables.
//!
//! The weight tables, archetype catalog and badge rules are compile-time
//! data, but an internally inconsistent table (a rule referencing a key
//! with no metadata, weights that don't sum to 1.0) is a programmer
//! error that must fail fast at startup, never be silently swallowed
//! mid-evaluation.

use std::error::Error;

use crate::{archetype, badges, scores};

pub fn validate() -> Result<(), Box<dyn Error>> {
    scores::validate_weights().map_err(|e| format!("score table: {e}"))?;
    scores::four_factors::validate_weights().map_err(|e| format!("four-factor table: {e}"))?;
    archetype::validate_tables().map_err(|e| format!("archetype table: {e}"))?;
    badges::validate_tables().map_err(|e| format!("badge table: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tables_validate() {
        assert!(validate().is_ok(), "{:?}", validate().err());
    }
}
