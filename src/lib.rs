// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#[macro_use]
pub mod macros;
pub use self::macros::*;

#[macro_use]
pub mod dump;
pub use self::dump::*;

pub mod errors;
pub use self::errors::*;

#[macro_use]
pub mod types;
pub use self::types::*;

pub mod aggregate;
pub use self::aggregate::*;

pub mod cache;
pub use self::cache::*;

pub mod json;
