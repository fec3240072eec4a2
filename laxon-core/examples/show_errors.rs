//! Show how parse errors report positions: decode a handful of
//! malformed inputs and point a caret at each reported offset.

use laxon_core::decode;

fn main() {
    let samples = [
        "",
        "@",
        "{\"a\" \"b\"}",
        "{\"a\":1",
        "[1;2]",
        "'never closed",
        "[1, [2, @]]",
    ];

    for input in samples {
        match decode(input) {
            Ok(value) => println!("{input:?} decoded: {value:?}"),
            Err(err) => {
                println!("{input}");
                println!("{}^", " ".repeat(err.position()));
                println!("  error: {err}\n");
            }
        }
    }
}
