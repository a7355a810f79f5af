use crate::core::{
    attributes,
    ban_list::BanList,
    errors::CatFinderError,
    models::CatRecord,
};

/// Cap on remote calls per fetch round. Keeps a heavily banned registry from
/// turning one click into an unbounded loop.
pub const MAX_ATTEMPTS: u32 = 10;

/// One remote request for a single record with breed data. `None` means the
/// source returned an empty page for this attempt.
pub trait CatSource {
    fn next_cat(&mut self) -> Result<Option<CatRecord>, CatFinderError>;
}

#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Found(CatRecord),
    /// Every attempt was spent without an acceptable candidate. An expected
    /// outcome, not a failure.
    Exhausted,
}

/// Requests records until one has no banned attribute value, up to
/// `MAX_ATTEMPTS`. Empty pages and breed-less records silently consume an
/// attempt. A transport, HTTP, or parse error aborts the whole round.
pub fn fetch_acceptable_cat(
    source: &mut dyn CatSource,
    bans: &BanList,
) -> Result<FetchOutcome, CatFinderError> {
    for _ in 0..MAX_ATTEMPTS {
        let Some(record) = source.next_cat()? else {
            continue;
        };

        // has_breeds=1 notwithstanding, breed-less records do come back.
        if record.breeds.is_empty() {
            continue;
        }

        let banned =
            attributes::checkable_values(&record).iter().any(|value| bans.is_banned(value));

        if !banned {
            return Ok(FetchOutcome::Found(record));
        }
    }

    Ok(FetchOutcome::Exhausted)
}
