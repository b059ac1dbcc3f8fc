use std::fmt::Write;

use primgen_core::{PRIMITIVES, PROPERTY_NAMES, PrimitiveDescriptor};
use serde::Serialize;

use super::template_loader::exit_with_message;

pub struct PrimitivesArgs {
    pub json: bool,
}

#[derive(Serialize)]
struct Listing<'a> {
    primitives: &'a [PrimitiveDescriptor],
    properties: &'a [&'a str],
}

pub fn run(args: PrimitivesArgs) {
    if args.json {
        let json = render_json().unwrap_or_else(|e| exit_with_message(&e.to_string()));
        println!("{}", json);
        return;
    }
    print!("{}", render_table());
}

pub fn render_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Listing {
        primitives: &PRIMITIVES,
        properties: PROPERTY_NAMES,
    })
}

pub fn render_table() -> String {
    const HEADER: [&str; 7] = ["type", "name", "wrapper", "delta", "sum", "sumType", "zero"];

    let rows: Vec<[String; 7]> = PRIMITIVES
        .iter()
        .map(|d| {
            [
                d.type_name.to_string(),
                d.name.to_string(),
                d.wrapper_name.to_string(),
                quoted_or_dash(d.delta),
                if d.supports_sum { "yes" } else { "no" }.to_string(),
                or_dash(d.sum_type),
                d.zero.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let header = HEADER.map(String::from);
    for row in std::iter::once(&header).chain(&rows) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{}", line.trim_end()).expect("writing to a String cannot fail");
    }

    writeln!(out).expect("writing to a String cannot fail");
    writeln!(out, "Properties: {}", PROPERTY_NAMES.join(", ")).expect("writing to a String cannot fail");
    out
}

fn quoted_or_dash(text: &str) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        format!("{:?}", text)
    }
}

fn or_dash(text: &str) -> String {
    let text = if text.is_empty() { "-" } else { text };
    text.to_string()
}
