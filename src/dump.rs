// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use termcolor::{ColorChoice, StandardStream, StandardStreamLock};

#[macro_export]
macro_rules! color {
    ( $stream: ident, $color: ident) => {{
        use termcolor::WriteColor;
        $stream
            .set_color(termcolor::ColorSpec::new().set_fg(Some(termcolor::Color::$color)))
            .unwrap();
    }};
    ( $stream: ident, $color: ident, $intense: expr) => {{
        use termcolor::WriteColor;
        $stream
            .set_color(
                termcolor::ColorSpec::new()
                    .set_fg(Some(termcolor::Color::$color))
                    .set_intense($intense),
            )
            .unwrap();
    }};
}

#[macro_export]
macro_rules! dump_str {
    ( $name: expr, $val: expr, $prefix: ident, $last: ident, $out: ident) => {
        $crate::dump_str!($name, $val, White, $prefix, $last, $out);
    };
    ( $name: expr, $val: expr, $color: ident, $prefix: ident, $last: ident, $out: ident) => {{
        use std::io::Write;
        $crate::color!($out, Blue);
        write!($out, "{}{}", $prefix, Self::get_pref($last)).unwrap();
        if !$name.is_empty() {
            $crate::color!($out, Yellow, true);
            write!($out, "{}: ", $name).unwrap();
        }
        $crate::color!($out, $color);
        writeln!($out, "{}", $val).unwrap();
    }};
}

#[macro_export]
macro_rules! dump_start {
    ( $name: expr, $label: expr, $prefix: ident, $last: ident, $out: ident) => {{
        use std::io::Write;
        $crate::color!($out, Blue);
        write!($out, "{}{}", $prefix, Self::get_pref($last)).unwrap();
        if !$name.is_empty() {
            $crate::color!($out, Yellow, true);
            write!($out, "{}: ", $name).unwrap();
        }
        $crate::color!($out, Green, true);
        writeln!($out, "{}", $label).unwrap();
        format!("{}{}", $prefix, Self::get_pref_child($last))
    }};
}

pub trait Dump {
    fn dump_me(&self) {
        let stdout = StandardStream::stdout(ColorChoice::Always);
        let mut stdout = stdout.lock();
        self.dump("", "", true, &mut stdout);
        color!(stdout, White);
    }

    fn get_pref(last: bool) -> &'static str {
        // https://en.wikipedia.org/wiki/Box-drawing_character
        if last {
            // "`- "
            "\u{2570}\u{2500} "
        } else {
            // "|- "
            "\u{251C}\u{2500} "
        }
    }

    fn get_pref_child(last: bool) -> &'static str {
        if last {
            "   "
        } else {
            // "|   "
            "\u{2502}  "
        }
    }

    fn dump(&self, name: &str, prefix: &str, last: bool, stdout: &mut StandardStreamLock);
}

impl<T: Dump> Dump for Option<T> {
    fn dump(&self, name: &str, prefix: &str, last: bool, stdout: &mut StandardStreamLock) {
        if let Some(x) = self {
            x.dump(name, prefix, last, stdout);
        } else {
            dump_str!(name, "\u{2717}", Red, prefix, last, stdout);
        }
    }
}

impl Dump for String {
    fn dump(&self, name: &str, prefix: &str, last: bool, stdout: &mut StandardStreamLock) {
        dump_str!(name, self, prefix, last, stdout);
    }
}

impl Dump for bool {
    fn dump(&self, name: &str, prefix: &str, last: bool, stdout: &mut StandardStreamLock) {
        let v = if *self { "true" } else { "false" };
        dump_str!(name, v, Cyan, prefix, last, stdout);
    }
}

impl Dump for usize {
    fn dump(&self, name: &str, prefix: &str, last: bool, stdout: &mut StandardStreamLock) {
        dump_str!(name, self, Cyan, prefix, last, stdout);
    }
}
