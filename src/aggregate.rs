// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::ops::Range;
use termcolor::StandardStreamLock;

use crate::dump::Dump;
use crate::dump_start;
use crate::errors::RangeError;
use crate::types::cv::Qualifier;
use crate::types::list::TypeList;
use crate::types::r#type::Type;

/// Half-open `[start, end)` bounds selecting a sub-range of an
/// aggregate's elements. Inverted bounds are rejected at construction;
/// the upper bound is checked against the aggregate size on extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexRange {
    start: usize,
    end: usize,
}

impl IndexRange {
    pub fn new(start: usize, end: usize) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn full(size: usize) -> Self {
        Self {
            start: 0,
            end: size,
        }
    }

    pub fn start(self) -> usize {
        self.start
    }

    pub fn end(self) -> usize {
        self.end
    }

    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn positions(self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AggregateShape {
    Tuple(TypeList),
    Array { element: Type, size: usize },
}

/// A tuple-like or fixed-array-like type: its element types plus the
/// qualifiers the aggregate bears as a whole.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Aggregate {
    shape: AggregateShape,
    qualifier: Qualifier,
}

impl Aggregate {
    pub fn tuple(types: TypeList) -> Self {
        Self {
            shape: AggregateShape::Tuple(types),
            qualifier: Qualifier::default(),
        }
    }

    pub fn array(element: Type, size: usize) -> Self {
        Self {
            shape: AggregateShape::Array { element, size },
            qualifier: Qualifier::default(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = qualifier;
        self
    }

    pub fn shape(&self) -> &AggregateShape {
        &self.shape
    }

    pub fn qualifier(&self) -> &Qualifier {
        &self.qualifier
    }

    pub fn size(&self) -> usize {
        match &self.shape {
            AggregateShape::Tuple(types) => types.len(),
            AggregateShape::Array { size, .. } => *size,
        }
    }

    /// The element types in `range`, with the aggregate's qualifiers
    /// applied to each.
    pub fn extract(&self, range: IndexRange) -> Result<TypeList, RangeError> {
        let size = self.size();
        if range.end > size {
            return Err(RangeError::OutOfBounds {
                start: range.start,
                end: range.end,
                size,
            });
        }

        // An unqualified tuple taken whole is already the answer.
        if let AggregateShape::Tuple(types) = &self.shape {
            if self.qualifier.is_empty() && range.start == 0 && range.end == size {
                return Ok(types.clone());
            }
        }

        let types: TypeList = match &self.shape {
            AggregateShape::Tuple(base) => range
                .positions()
                .map(|pos| self.qualifier.apply(&base[pos]))
                .collect(),
            AggregateShape::Array { element, .. } => {
                let element = self.qualifier.apply(element);
                range.positions().map(|_| element.clone()).collect()
            }
        };

        Ok(types)
    }

    pub fn extract_range(&self, start: usize, end: usize) -> Result<TypeList, RangeError> {
        self.extract(IndexRange::new(start, end)?)
    }

    pub fn extract_all(&self) -> TypeList {
        match self.extract(IndexRange::full(self.size())) {
            Ok(types) => types,
            Err(_) => unreachable!("Full range is always valid"),
        }
    }
}

impl Dump for Aggregate {
    fn dump(&self, name: &str, prefix: &str, last: bool, stdout: &mut StandardStreamLock) {
        match &self.shape {
            AggregateShape::Tuple(types) => {
                let prefix = dump_start!(name, "tuple", prefix, last, stdout);
                self.qualifier.dump("qualifier", &prefix, false, stdout);
                types.dump("types", &prefix, true, stdout);
            }
            AggregateShape::Array { element, size } => {
                let prefix = dump_start!(name, "array", prefix, last, stdout);
                self.qualifier.dump("qualifier", &prefix, false, stdout);
                element.dump("element", &prefix, false, stdout);
                size.dump("size", &prefix, true, stdout);
            }
        }
    }
}
