// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use termcolor::StandardStreamLock;

use crate::dump::Dump;
use crate::dump_str;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub val: String,
}

#[macro_export]
macro_rules! mk_id {
    ( $( $name:expr ),* ) => {
        $crate::types::name::Qualified {
            names: vec![
                $(
                    $crate::types::name::Identifier { val: $name.to_string() },
                )*
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Qualified {
    pub names: Vec<Identifier>,
}

impl Qualified {
    pub fn from_spelling(name: &str) -> Self {
        Qualified {
            names: name
                .split("::")
                .map(|part| Identifier {
                    val: part.trim().to_string(),
                })
                .collect(),
        }
    }
}

impl ToString for Qualified {
    fn to_string(&self) -> String {
        self.names
            .iter()
            .map(|name| name.val.as_str())
            .collect::<Vec<_>>()
            .join("::")
    }
}

impl Dump for Qualified {
    fn dump(&self, name: &str, prefix: &str, last: bool, stdout: &mut StandardStreamLock) {
        dump_str!(name, self.to_string(), Cyan, prefix, last, stdout);
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_spelling() {
        assert_eq!(Qualified::from_spelling("A::B::C"), mk_id!("A", "B", "C"));
        assert_eq!(Qualified::from_spelling("std :: string"), mk_id!("std", "string"));
    }

    #[test]
    fn test_to_string() {
        assert_eq!(mk_id!("std", "pair").to_string(), "std::pair");
        assert_eq!(mk_id!("T").to_string(), "T");
    }
}
