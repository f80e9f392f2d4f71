//! Zoo-wide reports, one entry per enclosure.
//!
//! Each report fetches a fresh snapshot from the store, keys the result by
//! enclosure name, and adds an [`UNASSIGNED_KEY`] entry for animals without
//! an enclosure when there are any. Enclosures sharing a name share one
//! entry, the later one winning.

use std::collections::BTreeMap;

use zoo_types::{Animal, Enclosure};

use crate::constraints::{NO_ENCLOSURE_ISSUE, check_enclosure};
use crate::daily::{enclosure_sunrise, enclosure_sunset, sunrise_status, sunset_status};
use crate::feeding::{enclosure_feeding_time, feeding_info};
use crate::store::ZooStore;

/// Report key for animals that have no enclosure.
pub const UNASSIGNED_KEY: &str = "Unassigned";

/// Lines per enclosure name.
pub type ZooLines = BTreeMap<String, Vec<String>>;

/// Constraint report per enclosure name.
pub type ZooConstraintReport = BTreeMap<String, BTreeMap<String, Vec<String>>>;

async fn collect_lines<S, E, A>(store: &S, per_enclosure: E, per_animal: A) -> Result<ZooLines, S::Error>
where
    S: ZooStore,
    E: Fn(&Enclosure) -> Vec<String>,
    A: Fn(&Animal) -> String,
{
    let enclosures = store.list_enclosures_with_animals().await?;
    let mut lines: ZooLines = enclosures
        .iter()
        .map(|e| (e.name.clone(), per_enclosure(e)))
        .collect();

    let unassigned = store.list_unassigned_animals().await?;
    if !unassigned.is_empty() {
        lines.insert(
            UNASSIGNED_KEY.to_owned(),
            unassigned.iter().map(per_animal).collect(),
        );
    }
    Ok(lines)
}

/// Sunrise status for the whole zoo.
///
/// # Errors
///
/// Returns the store's error unchanged.
pub async fn zoo_sunrise<S: ZooStore>(store: &S) -> Result<ZooLines, S::Error> {
    collect_lines(store, enclosure_sunrise, sunrise_status).await
}

/// Sunset status for the whole zoo.
///
/// # Errors
///
/// Returns the store's error unchanged.
pub async fn zoo_sunset<S: ZooStore>(store: &S) -> Result<ZooLines, S::Error> {
    collect_lines(store, enclosure_sunset, sunset_status).await
}

/// Feeding time for the whole zoo.
///
/// Animals without an enclosure have no enclosure mates, so they get the
/// plain description.
///
/// # Errors
///
/// Returns the store's error unchanged.
pub async fn zoo_feeding_time<S: ZooStore>(store: &S) -> Result<ZooLines, S::Error> {
    collect_lines(store, enclosure_feeding_time, |a| feeding_info(a, None)).await
}

/// Constraint report for every enclosure, plus one issue per animal
/// without an enclosure.
///
/// # Errors
///
/// Returns the store's error unchanged.
pub async fn check_zoo_constraints<S: ZooStore>(store: &S) -> Result<ZooConstraintReport, S::Error> {
    let enclosures = store.list_enclosures_with_animals().await?;
    let mut report: ZooConstraintReport = enclosures
        .iter()
        .map(|e| (e.name.clone(), check_enclosure(e)))
        .collect();

    let unassigned = store.list_unassigned_animals().await?;
    if !unassigned.is_empty() {
        let issues = unassigned
            .into_iter()
            .map(|a| (a.name, vec![NO_ENCLOSURE_ISSUE.to_owned()]))
            .collect();
        report.insert(UNASSIGNED_KEY.to_owned(), issues);
    }
    Ok(report)
}
