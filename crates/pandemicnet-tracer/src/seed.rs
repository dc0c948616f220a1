//! Demo population: ten users and a small curated set of contacts
//! (one tight cluster around user2, a few weak pairs).

use chrono::NaiveDate;

use pandemicnet_core::errors::{PandemicError, PandemicResult};
use pandemicnet_core::models::{NewContact, NewIndividual};
use pandemicnet_core::traits::IContactStore;

use crate::tracing_setup::events;

pub const DEMO_PEOPLE: usize = 10;

/// (handle, handle, year, month, day)
pub const DEMO_CONTACTS: [(&str, &str, i32, u32, u32); 6] = [
    // strong
    ("user1", "user2", 2025, 3, 15),
    ("user2", "user3", 2025, 3, 15),
    ("user2", "user4", 2025, 3, 14),
    // weak
    ("user5", "user6", 2025, 3, 1),
    ("user6", "user7", 2025, 3, 2),
    ("user8", "user9", 2025, 3, 10),
];

/// How many rows a seeding run actually inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub people: usize,
    pub contacts: usize,
}

/// `user<i>` / `12345678<i:02>`.
pub fn demo_person(i: usize) -> PandemicResult<NewIndividual> {
    NewIndividual::new(&format!("user{i}"), Some(&format!("12345678{i:02}")))
}

/// Insert the demo population into `store`. Rows that already exist are
/// skipped, so seeding twice inserts nothing the second time.
pub fn demo_population(store: &dyn IContactStore) -> PandemicResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for i in 1..=DEMO_PEOPLE {
        if skip_conflict(store.insert_individual(&demo_person(i)?))?.is_some() {
            summary.people += 1;
        }
    }

    for (a, b, year, month, day) in DEMO_CONTACTS {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| PandemicError::validation("contact_date", format!("{year}-{month}-{day}")))?;
        let first = lookup(store, a)?;
        let second = lookup(store, b)?;
        if skip_conflict(store.insert_contact(&NewContact::new(first, second, date)?))?.is_some() {
            summary.contacts += 1;
        }
    }

    events::demo_seeded(summary.people, summary.contacts);
    Ok(summary)
}

fn lookup(store: &dyn IContactStore, handle: &str) -> PandemicResult<i64> {
    store
        .get_individual_by_handle(handle)?
        .map(|p| p.id)
        .ok_or_else(|| PandemicError::not_found("individual", handle))
}

fn skip_conflict<T>(result: PandemicResult<T>) -> PandemicResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_conflict() => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_phones_are_ten_digits() {
        assert_eq!(demo_person(1).unwrap().phone(), Some("1234567801"));
        assert_eq!(demo_person(10).unwrap().phone(), Some("1234567810"));
    }

    #[test]
    fn skip_conflict_only_swallows_conflicts() {
        let ok: PandemicResult<u8> = Ok(1);
        assert_eq!(skip_conflict(ok).unwrap(), Some(1));

        let dup: PandemicResult<u8> = Err(PandemicError::conflict("dup"));
        assert_eq!(skip_conflict(dup).unwrap(), None);

        let bad: PandemicResult<u8> = Err(PandemicError::validation("x", "y"));
        assert!(skip_conflict(bad).is_err());
    }
}
