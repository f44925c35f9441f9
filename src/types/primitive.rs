use hashbrown::HashMap;
use lazy_static::lazy_static;
use termcolor::StandardStreamLock;

use crate::dump::Dump;
use crate::dump_str;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Void,
    Char,
    SignedChar,
    Short,
    Int,
    Long,
    LongLong,
    UnsignedChar,
    UnsignedShort,
    UnsignedInt,
    UnsignedLong,
    UnsignedLongLong,
    Float,
    Double,
    LongDouble,
    Bool,
    WcharT,
    Char8T,
    Char16T,
    Char32T,
}

impl Primitive {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Char => "char",
            Self::SignedChar => "signed char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::LongLong => "long long",
            Self::UnsignedChar => "unsigned char",
            Self::UnsignedShort => "unsigned short",
            Self::UnsignedInt => "unsigned int",
            Self::UnsignedLong => "unsigned long",
            Self::UnsignedLongLong => "unsigned long long",
            Self::Float => "float",
            Self::Double => "double",
            Self::LongDouble => "long double",
            Self::Bool => "bool",
            Self::WcharT => "wchar_t",
            Self::Char8T => "char8_t",
            Self::Char16T => "char16_t",
            Self::Char32T => "char32_t",
        }
    }

    pub fn from_spelling(name: &str) -> Option<Primitive> {
        SPELLINGS.get(name).copied()
    }
}

lazy_static! {
    static ref SPELLINGS: HashMap<&'static str, Primitive> = {
        let mut map = HashMap::with_capacity(32);
        map.insert("void", Primitive::Void);
        map.insert("char", Primitive::Char);
        map.insert("signed char", Primitive::SignedChar);
        map.insert("short", Primitive::Short);
        map.insert("int", Primitive::Int);
        map.insert("long", Primitive::Long);
        map.insert("long long", Primitive::LongLong);
        map.insert("unsigned char", Primitive::UnsignedChar);
        map.insert("unsigned short", Primitive::UnsignedShort);
        map.insert("unsigned", Primitive::UnsignedInt);
        map.insert("unsigned int", Primitive::UnsignedInt);
        map.insert("unsigned long", Primitive::UnsignedLong);
        map.insert("unsigned long long", Primitive::UnsignedLongLong);
        map.insert("float", Primitive::Float);
        map.insert("double", Primitive::Double);
        map.insert("long double", Primitive::LongDouble);
        map.insert("bool", Primitive::Bool);
        map.insert("wchar_t", Primitive::WcharT);
        map.insert("char8_t", Primitive::Char8T);
        map.insert("char16_t", Primitive::Char16T);
        map.insert("char32_t", Primitive::Char32T);
        map
    };
}

impl Dump for Primitive {
    fn dump(&self, name: &str, prefix: &str, last: bool, stdout: &mut StandardStreamLock) {
        dump_str!(name, self.to_str(), Cyan, prefix, last, stdout);
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spelling_lookup() {
        assert_eq!(Primitive::from_spelling("int"), Some(Primitive::Int));
        assert_eq!(
            Primitive::from_spelling("unsigned long long"),
            Some(Primitive::UnsignedLongLong)
        );
        assert_eq!(Primitive::from_spelling("unsigned"), Some(Primitive::UnsignedInt));
        assert_eq!(Primitive::from_spelling("i32"), None);
    }

    #[test]
    fn test_spelling_roundtrip() {
        assert_eq!(Primitive::from_spelling(Primitive::WcharT.to_str()), Some(Primitive::WcharT));
        assert_eq!(
            Primitive::from_spelling(Primitive::SignedChar.to_str()),
            Some(Primitive::SignedChar)
        );
    }
}
