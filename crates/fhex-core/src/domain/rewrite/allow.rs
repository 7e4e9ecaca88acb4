use std::path::Path;

use super::{Rewrite, has_extension};

const CALL: &str = ".allowThis(";

/// `<recv>.allowThis(<args>)` → `<recv>.allow(<args>, address(this))`.
///
/// Arguments are matched by balancing parentheses. A call whose closing
/// parenthesis is missing, or that has no arguments, is left as written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllowRewrite;

impl AllowRewrite {
    fn rewrite(content: &str) -> String {
        let mut out = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(at) = rest.find(CALL) {
            let args_start = at + CALL.len();
            let Some(args_len) = closing_paren(&rest[args_start..]) else {
                out.push_str(&rest[..args_start]);
                rest = &rest[args_start..];
                continue;
            };
            let args = &rest[args_start..args_start + args_len];
            if args.trim().is_empty() {
                out.push_str(&rest[..args_start]);
                rest = &rest[args_start..];
                continue;
            }

            out.push_str(&rest[..at]);
            out.push_str(".allow(");
            out.push_str(&Self::rewrite(args));
            out.push_str(", address(this))");
            rest = &rest[args_start + args_len + 1..];
        }
        out.push_str(rest);
        out
    }
}

/// Offset of the `)` closing an already-opened parenthesis.
fn closing_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

impl Rewrite for AllowRewrite {
    fn name(&self) -> &'static str {
        "rewrite-allow"
    }

    fn applies_to(&self, path: &Path) -> bool {
        has_extension(path, "sol")
    }

    fn apply(&self, content: &str) -> String {
        Self::rewrite(content)
    }
}
