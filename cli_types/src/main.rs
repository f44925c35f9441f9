// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#[macro_use]
extern crate clap;

use clap::{App, Arg};
use cpp_tuple_types::aggregate::Aggregate;
use cpp_tuple_types::dump::Dump;
use std::fs::File;
use std::io::Read;

fn main() {
    let matches = App::new("Type list dump")
        .version(crate_version!())
        .author(&*env!("CARGO_PKG_AUTHORS").replace(':', "\n"))
        .about("Extract and dump tuple/array element types")
        .arg(
            Arg::with_name("file")
                .help("JSON aggregate description to extract from")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("start")
                .help("First element position")
                .short("s")
                .long("start")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("end")
                .help("Past-the-last element position")
                .short("e")
                .long("end")
                .takes_value(true),
        )
        .get_matches();

    let file = matches.value_of("file").unwrap().to_string();
    let mut data = Vec::new();
    File::open(&file).unwrap().read_to_end(&mut data).unwrap();

    let aggregate = match Aggregate::from_json(&data) {
        Ok(aggregate) => aggregate,
        Err(e) => {
            eprintln!("{}", e.stringly().message);
            std::process::exit(1);
        }
    };

    let start = matches.value_of("start").map_or(0, |s| s.parse().unwrap());
    let end = matches
        .value_of("end")
        .map_or_else(|| aggregate.size(), |s| s.parse().unwrap());

    match aggregate.extract_range(start, end) {
        Ok(types) => {
            aggregate.dump_me();
            types.dump_me();
        }
        Err(e) => {
            eprintln!("{}", e.stringly().message);
            std::process::exit(1);
        }
    }
}
