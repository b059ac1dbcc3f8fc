//! Helpers shared by the crate's tests.

use std::fmt::Write;

use crate::diagnostics::Diagnostics;
use crate::parser::{Body, Chunk, Cond, DictValue, Expr, Group, parse_group};
use crate::source_map::SourceMap;

/// Parses `src` as an inline group.
pub fn parse(src: &str) -> (Group, Diagnostics) {
    let mut sources = SourceMap::new();
    let source = sources.add_inline(src);
    let mut diagnostics = Diagnostics::new();
    let group = parse_group(source, src, &mut diagnostics);
    (group, diagnostics)
}

/// Parses `src`, asserting it has no diagnostics, and dumps the result.
pub fn dump(src: &str) -> String {
    let (group, diagnostics) = parse(src);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics:\n{}",
        diagnostics.render_plain()
    );
    dump_group(&group)
}

/// Parses `src`, asserting it has diagnostics, and renders them.
pub fn dump_diagnostics(src: &str) -> String {
    let (_, diagnostics) = parse(src);
    assert!(!diagnostics.is_empty(), "expected diagnostics");
    diagnostics.render_plain()
}

pub fn dump_group(group: &Group) -> String {
    let mut out = String::new();
    for import in &group.imports {
        writeln!(out, "import {:?}", import.path).unwrap();
    }
    for template in &group.templates {
        let params: Vec<&str> = template.params.iter().map(|p| p.text.as_str()).collect();
        writeln!(out, "template {}({})", template.name.text, params.join(", ")).unwrap();
        dump_body(&mut out, &template.body, 1);
    }
    for dict in &group.dicts {
        writeln!(out, "dict {}", dict.name.text).unwrap();
        let entries = dict
            .entries
            .iter()
            .map(|(key, entry)| (format!("{:?}", key), &entry.value))
            .chain(dict.default.iter().map(|e| ("default".to_string(), &e.value)));
        for (key, value) in entries {
            match value {
                DictValue::Key => writeln!(out, "  {}: key", key).unwrap(),
                DictValue::Body(body) => {
                    writeln!(out, "  {}:", key).unwrap();
                    dump_body(&mut out, body, 2);
                }
            }
        }
    }
    out
}

fn dump_body(out: &mut String, body: &Body, depth: usize) {
    let pad = "  ".repeat(depth);
    for chunk in &body.chunks {
        match chunk {
            Chunk::Text(text) => writeln!(out, "{pad}text {:?}", text).unwrap(),
            Chunk::Expr { expr, indent } => match indent {
                Some(indent) => writeln!(out, "{pad}expr {} indent={:?}", fmt_expr(expr), indent),
                None => writeln!(out, "{pad}expr {}", fmt_expr(expr)),
            }
            .unwrap(),
            Chunk::If {
                branches,
                otherwise,
            } => {
                for (i, (cond, body)) in branches.iter().enumerate() {
                    let keyword = if i == 0 { "if" } else { "elseif" };
                    writeln!(out, "{pad}{} {}", keyword, fmt_cond(cond)).unwrap();
                    dump_body(out, body, depth + 1);
                }
                if let Some(body) = otherwise {
                    writeln!(out, "{pad}else").unwrap();
                    dump_body(out, body, depth + 1);
                }
                writeln!(out, "{pad}endif").unwrap();
            }
        }
    }
}

pub fn fmt_expr(expr: &Expr) -> String {
    match expr {
        Expr::Attr(ident) => ident.text.clone(),
        Expr::Str { value, .. } => format!("{:?}", value),
        Expr::Call { name, args, .. } => {
            let args: Vec<String> = args.iter().map(fmt_expr).collect();
            format!("{}({})", name.text, args.join(", "))
        }
        Expr::Prop { target, name } => format!("{}.{}", fmt_expr(target), name.text),
        Expr::Lookup { target, key, .. } => format!("{}.({})", fmt_expr(target), fmt_expr(key)),
    }
}

pub fn fmt_cond(cond: &Cond) -> String {
    match cond {
        Cond::Expr(expr) => fmt_expr(expr),
        Cond::Not(inner) => format!("!{}", fmt_cond(inner)),
        Cond::And(a, b) => format!("({} && {})", fmt_cond(a), fmt_cond(b)),
        Cond::Or(a, b) => format!("({} || {})", fmt_cond(a), fmt_cond(b)),
    }
}
