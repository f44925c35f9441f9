// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use bitflags::bitflags;
use termcolor::StandardStreamLock;

use super::r#type::Type;
use crate::dump::Dump;
use crate::{bitflags_to_str, dump_str};

bitflags! {
    pub struct CVQualifier: u8 {
        const CONST = 0b1;
        const VOLATILE = 0b10;
    }
}

impl ToString for CVQualifier {
    fn to_string(&self) -> String {
        bitflags_to_str!(self, Self, CONST, "const", VOLATILE, "volatile")
    }
}

impl Dump for CVQualifier {
    fn dump(&self, name: &str, prefix: &str, last: bool, stdout: &mut StandardStreamLock) {
        dump_str!(name, self.to_string(), Cyan, prefix, last, stdout);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefQualifier {
    None,
    LValue,
    RValue,
}

impl Default for RefQualifier {
    fn default() -> Self {
        RefQualifier::None
    }
}

impl ToString for RefQualifier {
    fn to_string(&self) -> String {
        match self {
            Self::None => "".to_string(),
            Self::LValue => "&".to_string(),
            Self::RValue => "&&".to_string(),
        }
    }
}

impl Dump for RefQualifier {
    fn dump(&self, name: &str, prefix: &str, last: bool, stdout: &mut StandardStreamLock) {
        dump_str!(name, self.to_string(), Cyan, prefix, last, stdout);
    }
}

impl RefQualifier {
    pub fn is_reference(self) -> bool {
        self != RefQualifier::None
    }

    // C++ reference collapsing: lvalue wins unless both sides are rvalue.
    pub(crate) fn collapse(self, inner: RefQualifier) -> RefQualifier {
        match (self, inner) {
            (RefQualifier::None, r) | (r, RefQualifier::None) => r,
            (RefQualifier::RValue, RefQualifier::RValue) => RefQualifier::RValue,
            _ => RefQualifier::LValue,
        }
    }
}

/// Qualifiers borne by an aggregate as a whole, pushed onto each
/// element type on extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Qualifier {
    pub cv: CVQualifier,
    pub reference: RefQualifier,
}

impl Default for Qualifier {
    fn default() -> Self {
        Self {
            cv: CVQualifier::empty(),
            reference: RefQualifier::None,
        }
    }
}

impl ToString for Qualifier {
    fn to_string(&self) -> String {
        let cv = self.cv.to_string();
        let reference = self.reference.to_string();
        if cv.is_empty() {
            reference
        } else if reference.is_empty() {
            cv
        } else {
            format!("{} {}", cv, reference)
        }
    }
}

impl Dump for Qualifier {
    fn dump(&self, name: &str, prefix: &str, last: bool, stdout: &mut StandardStreamLock) {
        dump_str!(name, self.to_string(), Cyan, prefix, last, stdout);
    }
}

impl Qualifier {
    pub fn new(cv: CVQualifier, reference: RefQualifier) -> Self {
        Self { cv, reference }
    }

    pub fn is_empty(&self) -> bool {
        self.cv.is_empty() && self.reference == RefQualifier::None
    }

    /// Produces the qualified version of an element type: cv flags join
    /// the element's own (skipped when the element is itself a reference,
    /// as in C++), reference categories collapse.
    pub fn apply(&self, ty: &Type) -> Type {
        let cv = if ty.reference.is_reference() {
            ty.cv
        } else {
            ty.cv | self.cv
        };
        Type {
            base: ty.base.clone(),
            cv,
            reference: self.reference.collapse(ty.reference),
        }
    }
}
