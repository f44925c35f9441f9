// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hashbrown::HashMap;
use std::sync::Mutex;

use crate::aggregate::{Aggregate, IndexRange};
use crate::errors::RangeError;
use crate::types::list::TypeList;

#[derive(Debug, PartialEq, Eq, Hash)]
struct Key {
    aggregate: Aggregate,
    range: IndexRange,
}

/// Memoized extraction, keyed by structural equality of the inputs.
/// Extraction is pure so a hit and a recomputation are interchangeable.
#[derive(Debug, Default)]
pub struct ExtractCache {
    cache: Mutex<HashMap<Key, TypeList>>,
}

impl ExtractCache {
    pub fn get(&self, aggregate: &Aggregate, range: IndexRange) -> Option<TypeList> {
        let cache = self.cache.lock().unwrap();
        cache
            .get(&Key {
                aggregate: aggregate.clone(),
                range,
            })
            .cloned()
    }

    pub fn save(&self, aggregate: Aggregate, range: IndexRange, types: TypeList) {
        let mut cache = self.cache.lock().unwrap();
        cache.insert(Key { aggregate, range }, types);
    }

    pub fn extract(&self, aggregate: &Aggregate, range: IndexRange) -> Result<TypeList, RangeError> {
        if let Some(types) = self.get(aggregate, range) {
            return Ok(types);
        }

        let types = aggregate.extract(range)?;
        self.save(aggregate.clone(), range, types.clone());

        Ok(types)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::mk_type;
    use crate::types::cv::{CVQualifier, Qualifier, RefQualifier};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hit_matches_miss() {
        let cache = ExtractCache::default();
        let agg = Aggregate::tuple(TypeList::new(vec![mk_type!(Int), mk_type!(Double)]))
            .with_qualifier(Qualifier::new(CVQualifier::CONST, RefQualifier::LValue));
        let range = IndexRange::new(0, 2).unwrap();

        let miss = cache.extract(&agg, range).unwrap();
        let hit = cache.extract(&agg, range).unwrap();

        assert_eq!(miss, agg.extract(range).unwrap());
        assert_eq!(hit, miss);
    }

    #[test]
    fn test_distinct_keys() {
        let cache = ExtractCache::default();
        let agg = Aggregate::array(mk_type!(Float), 4);

        let head = cache.extract(&agg, IndexRange::new(0, 2).unwrap()).unwrap();
        let tail = cache.extract(&agg, IndexRange::new(2, 4).unwrap()).unwrap();

        assert_eq!(head, tail);
        assert_eq!(cache.get(&agg, IndexRange::new(0, 2).unwrap()), Some(head));
        assert_eq!(cache.get(&agg, IndexRange::new(0, 3).unwrap()), None);
    }

    #[test]
    fn test_error_not_cached() {
        let cache = ExtractCache::default();
        let agg = Aggregate::array(mk_type!(Int), 2);
        let range = IndexRange::new(1, 4).unwrap();

        assert_eq!(
            cache.extract(&agg, range),
            Err(RangeError::OutOfBounds {
                start: 1,
                end: 4,
                size: 2
            })
        );
        assert_eq!(cache.get(&agg, range), None);
    }
}
