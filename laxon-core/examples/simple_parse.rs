use laxon_core::{decode, Value};

fn render(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Null => println!("{pad}null"),
        Value::Bool(b) => println!("{pad}bool: {b}"),
        Value::Int(i) => println!("{pad}int: {i}"),
        Value::Float(f) => println!("{pad}float: {f}"),
        Value::String(s) => println!("{pad}string: {s:?}"),
        Value::Array(items) => {
            println!("{pad}array ({} items)", items.len());
            for item in items {
                render(item, indent + 1);
            }
        }
        Value::Object(entries) => {
            println!("{pad}object ({} entries)", entries.len());
            for (key, val) in entries {
                println!("{pad}  {key}:");
                render(val, indent + 2);
            }
        }
    }
}

fn main() {
    let input = "{\n  host: localhost,\n  port: 8080,\n  verbose: TRUE,\n  tags: [db, 'prod',],\n}";

    println!("Input:\n{input}\n");

    match decode(input) {
        Ok(value) => {
            println!("Decoded:");
            render(&value, 1);
        }
        Err(err) => {
            eprintln!("decode failed: {err}");
            std::process::exit(1);
        }
    }
}
