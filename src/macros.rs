// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#[macro_export]
macro_rules! bitflags_to_str {
    ( $self: ident, $ty: ident, $( $flag: ident, $name: expr ),* ) => {{
        let mut v = Vec::new();
        $(
            if $self.contains($ty::$flag) {
                v.push($name);
            }
        )*
        v.join(" ")
    }};
}
