//! CSV batch runs over premium quotes and claims
//!
//! Loaders read a whole file (or any reader) up front; calculations then fan
//! out over the rayon pool when `FinanceConfig::parallel` is set.

mod claims;
mod quotes;

pub use claims::{
    load_claims, load_claims_from_reader, run_claims, write_claim_results, ClaimRequest, ClaimResult,
};
pub use quotes::{
    load_quotes, load_quotes_from_reader, run_quotes, write_quote_results, QuoteRequest, QuoteResult,
};

use rayon::prelude::*;

/// Apply `f` to every item, in parallel when requested; output order matches input
fn map_items<T, R, F>(items: &[T], parallel: bool, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if parallel {
        items.par_iter().map(f).collect()
    } else {
        items.iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_items_preserves_order() {
        let items: Vec<u32> = (0..1000).collect();
        let doubled = map_items(&items, true, |x| x * 2);
        assert_eq!(doubled, map_items(&items, false, |x| x * 2));
        assert_eq!(doubled[999], 1998);
    }
}
