//! Built-in cog catalog - the static discovery mechanism
//!
//! Cogs are compiled in and enumerated here; the registry is built from
//! this table at startup with every cog initially unloaded.

use super::fetch::FetchCog;
use super::ping::PingCog;
use super::trait_def::Cog;
use super::uptime::UptimeCog;
use once_cell::sync::Lazy;
use std::sync::Arc;

type CogFactory = fn() -> Arc<dyn Cog>;

static BUILTIN: Lazy<Vec<CogFactory>> = Lazy::new(|| {
    vec![
        || Arc::new(PingCog::new()) as Arc<dyn Cog>,
        || Arc::new(UptimeCog::new()) as Arc<dyn Cog>,
        || Arc::new(FetchCog::new()) as Arc<dyn Cog>,
    ]
});

/// Instantiate every built-in cog
pub fn builtin_cogs() -> Vec<Arc<dyn Cog>> {
    BUILTIN.iter().map(|factory| factory()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_names_are_unique() {
        let cogs = builtin_cogs();
        let names: HashSet<&str> = cogs.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), cogs.len());
    }
}
