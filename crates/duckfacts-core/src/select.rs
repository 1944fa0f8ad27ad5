//! Random and positional fact selection.

use rand::Rng;

use crate::error::FactsError;
use crate::language::Language;
use crate::store::FactStore;
use crate::types::Fact;

/// Pick one fact uniformly at random, returning its position and text.
///
/// Each call draws independently; repeats across calls are expected.
pub fn pick_random(facts: &[String]) -> Result<(usize, &str), FactsError> {
    if facts.is_empty() {
        return Err(FactsError::EmptyStore);
    }
    let index = rand::thread_rng().gen_range(0..facts.len());
    Ok((index, facts[index].as_str()))
}

/// Look up a fact by its zero-based position.
///
/// The range failure here is the canonical not-found signal; callers never
/// index the sequence directly.
pub fn pick_by_id(facts: &[String], id: i64) -> Result<&str, FactsError> {
    let index = usize::try_from(id)
        .ok()
        .filter(|&i| i < facts.len())
        .ok_or(FactsError::OutOfRange { id, len: facts.len() })?;
    Ok(facts[index].as_str())
}

/// Select a random fact from the store in the given language.
pub fn random_fact(store: &FactStore, lang: Language) -> Result<Fact, FactsError> {
    let (id, text) = pick_random(store.facts_for(lang))?;
    Ok(Fact { id, fact: text.to_string(), lang })
}

/// Select the fact at `id` from the store in the given language.
pub fn fact_by_id(store: &FactStore, lang: Language, id: i64) -> Result<Fact, FactsError> {
    let text = pick_by_id(store.facts_for(lang), id)?;
    Ok(Fact { id: id as usize, fact: text.to_string(), lang })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("fact {i}")).collect()
    }

    #[test]
    fn random_pick_stays_in_bounds() {
        let facts = sequence(10);
        for _ in 0..100 {
            let (index, text) = pick_random(&facts).unwrap();
            assert!(index < facts.len());
            assert_eq!(text, facts[index]);
        }
    }

    #[test]
    fn random_pick_covers_more_than_one_fact() {
        let facts = sequence(10);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(pick_random(&facts).unwrap().0);
        }
        // 100 uniform draws over 10 values landing on a single one is
        // vanishingly unlikely.
        assert!(seen.len() > 1);
    }

    #[test]
    fn random_pick_fails_on_empty_sequence() {
        assert!(matches!(pick_random(&[]), Err(FactsError::EmptyStore)));
    }

    #[test]
    fn positional_pick_returns_the_indexed_fact() {
        let facts = sequence(3);
        assert_eq!(pick_by_id(&facts, 0).unwrap(), "fact 0");
        assert_eq!(pick_by_id(&facts, 2).unwrap(), "fact 2");
    }

    #[test]
    fn positional_pick_rejects_out_of_range_ids() {
        let facts = sequence(3);
        assert!(matches!(pick_by_id(&facts, 3), Err(FactsError::OutOfRange { id: 3, len: 3 })));
        assert!(matches!(pick_by_id(&facts, 999), Err(FactsError::OutOfRange { .. })));
        assert!(matches!(pick_by_id(&facts, -1), Err(FactsError::OutOfRange { id: -1, .. })));
        assert!(matches!(pick_by_id(&facts, i64::MAX), Err(FactsError::OutOfRange { .. })));
    }

    #[test]
    fn fact_by_id_is_deterministic() {
        let store = FactStore::from_slice(br#"{"en": ["a", "b"], "de": ["c", "d"]}"#).unwrap();
        let first = fact_by_id(&store, Language::De, 1).unwrap();
        let second = fact_by_id(&store, Language::De, 1).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Fact { id: 1, fact: "d".to_string(), lang: Language::De });
    }

    #[test]
    fn random_fact_carries_the_resolved_language() {
        let store = FactStore::from_slice(br#"{"en": ["a"], "de": ["c"]}"#).unwrap();
        let fact = random_fact(&store, Language::De).unwrap();
        assert_eq!(fact.lang, Language::De);
        assert_eq!(fact.fact, "c");
    }
}
