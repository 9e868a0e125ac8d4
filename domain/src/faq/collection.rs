//! Ordered collection of FAQ records

use super::entities::{Faq, FaqId};
use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::HashSet;

/// An ordered, immutable set of FAQ records with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FaqCollection {
    records: Vec<Faq>,
}

impl FaqCollection {
    /// Build a collection, rejecting duplicate ids
    pub fn new(records: Vec<Faq>) -> Result<Self, DomainError> {
        let mut seen: HashSet<FaqId> = HashSet::with_capacity(records.len());
        for faq in &records {
            if !seen.insert(faq.id()) {
                return Err(DomainError::DuplicateId(faq.id()));
            }
        }
        Ok(Self { records })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy of this collection sorted by descending frequency.
    ///
    /// The sort is stable: records with equal frequency keep their
    /// original relative order.
    pub fn sorted_by_frequency(&self) -> Self {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.frequency().cmp(&a.frequency()));
        Self { records }
    }

    /// Records whose question or answer contains `query`, ignoring case.
    ///
    /// Source order is preserved.
    pub fn filter(&self, query: &str) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|faq| faq.matches(query))
                .cloned()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Faq> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Faq] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a FaqCollection {
    type Item = &'a Faq;
    type IntoIter = std::slice::Iter<'a, Faq>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(id: u32, question: &str, frequency: u32) -> Faq {
        Faq::new(id, question, format!("answer {id}"), frequency).unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = FaqCollection::new(vec![faq(1, "a", 1), faq(1, "b", 2)]);
        assert_eq!(result.unwrap_err(), DomainError::DuplicateId(FaqId::new(1)));
    }

    #[test]
    fn test_sorted_by_frequency_descending() {
        let collection =
            FaqCollection::new(vec![faq(1, "a", 10), faq(2, "b", 30), faq(3, "c", 20)]).unwrap();
        let frequencies: Vec<u32> = collection
            .sorted_by_frequency()
            .iter()
            .map(Faq::frequency)
            .collect();
        assert_eq!(frequencies, vec![30, 20, 10]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let collection = FaqCollection::new(vec![
            faq(1, "a", 5),
            faq(2, "b", 9),
            faq(3, "c", 5),
            faq(4, "d", 5),
        ])
        .unwrap();
        let ids: Vec<u32> = collection
            .sorted_by_frequency()
            .iter()
            .map(|f| f.id().value())
            .collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let collection = FaqCollection::new(vec![
            faq(1, "Where is the venue?", 1),
            faq(2, "What are the prizes?", 50),
            faq(3, "Is the venue accessible?", 3),
        ])
        .unwrap();
        let ids: Vec<u32> = collection
            .filter("VENUE")
            .iter()
            .map(|f| f.id().value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_empty_query_keeps_everything() {
        let collection = FaqCollection::new(vec![faq(1, "a", 1), faq(2, "b", 2)]).unwrap();
        assert_eq!(collection.filter(""), collection);
    }

    #[test]
    fn test_empty_collection() {
        let collection = FaqCollection::empty();
        assert!(collection.is_empty());
        assert_eq!(collection.sorted_by_frequency().len(), 0);
    }
}
