use termcolor::StandardStreamLock;

use super::cv::{CVQualifier, RefQualifier};
use super::name::Qualified;
use super::primitive::Primitive;
use crate::dump::Dump;
use crate::dump_str;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BaseType {
    Primitive(Primitive),
    UD(Qualified),
}

/// A single element type: an opaque base plus the cv flags and
/// reference category it carries.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Type {
    pub base: BaseType,
    pub cv: CVQualifier,
    pub reference: RefQualifier,
}

#[macro_export]
macro_rules! mk_type {
    ( $prim: ident ) => {
        $crate::types::r#type::Type {
            base: $crate::types::r#type::BaseType::Primitive(
                $crate::types::primitive::Primitive::$prim,
            ),
            cv: $crate::types::cv::CVQualifier::empty(),
            reference: $crate::types::cv::RefQualifier::None,
        }
    };
}

impl Type {
    pub fn primitive(prim: Primitive) -> Self {
        Self {
            base: BaseType::Primitive(prim),
            cv: CVQualifier::empty(),
            reference: RefQualifier::None,
        }
    }

    pub fn ud(name: Qualified) -> Self {
        Self {
            base: BaseType::UD(name),
            cv: CVQualifier::empty(),
            reference: RefQualifier::None,
        }
    }

    pub fn base(&self) -> &BaseType {
        &self.base
    }

    pub fn is_const(&self) -> bool {
        self.cv.intersects(CVQualifier::CONST)
    }

    pub fn is_volatile(&self) -> bool {
        self.cv.intersects(CVQualifier::VOLATILE)
    }

    pub fn is_lvalue_ref(&self) -> bool {
        self.reference == RefQualifier::LValue
    }

    pub fn is_rvalue_ref(&self) -> bool {
        self.reference == RefQualifier::RValue
    }
}

impl ToString for Type {
    fn to_string(&self) -> String {
        let mut buf = String::new();
        let cv = self.cv.to_string();
        if !cv.is_empty() {
            buf.push_str(&cv);
            buf.push(' ');
        }
        match &self.base {
            BaseType::Primitive(prim) => buf.push_str(prim.to_str()),
            BaseType::UD(name) => buf.push_str(&name.to_string()),
        }
        buf.push_str(&self.reference.to_string());
        buf
    }
}

impl Dump for Type {
    fn dump(&self, name: &str, prefix: &str, last: bool, stdout: &mut StandardStreamLock) {
        dump_str!(name, self.to_string(), Cyan, prefix, last, stdout);
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::mk_id;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_string() {
        assert_eq!(mk_type!(Int).to_string(), "int");
        assert_eq!(
            Type {
                cv: CVQualifier::CONST,
                reference: RefQualifier::LValue,
                ..mk_type!(Double)
            }
            .to_string(),
            "const double&"
        );
        assert_eq!(
            Type {
                cv: CVQualifier::CONST | CVQualifier::VOLATILE,
                reference: RefQualifier::RValue,
                ..Type::ud(mk_id!("std", "string"))
            }
            .to_string(),
            "const volatile std::string&&"
        );
    }

    #[test]
    fn test_predicates() {
        let ty = Type {
            cv: CVQualifier::CONST,
            reference: RefQualifier::LValue,
            ..mk_type!(Float)
        };

        assert!(ty.is_const());
        assert!(!ty.is_volatile());
        assert!(ty.is_lvalue_ref());
        assert!(!ty.is_rvalue_ref());
    }
}
