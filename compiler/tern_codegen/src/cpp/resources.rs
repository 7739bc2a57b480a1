//! Embedded resource tables.
//!
//! Each resource becomes a `const std::array<uint8_t, N>` inside
//! `namespace { namespace TernResource { ... } }` in the definitions
//! artifact.

use rustc_hash::FxHashMap;

use crate::c_family::sanitize_identifier;
use crate::context::CodegenContext;

const NAMESPACE: &str = "TernResource";

/// Bytes per line of a resource initializer.
const BYTES_PER_LINE: usize = 16;

/// Identifier of resource `name`.
///
/// A `reference` is qualified with the resource namespace; the definition
/// site, already inside that namespace, is not.
pub fn resource_name(name: &str, reference: bool) -> String {
    let identifier = sanitize_identifier(name);
    if reference {
        format!("{NAMESPACE}::{identifier}")
    } else {
        identifier
    }
}

/// Write the resource table: `extern` declarations, or with `define` the
/// full initializers. Resources are ordered by name.
pub fn write_resources(
    ctx: &mut CodegenContext<'_>,
    resources: &FxHashMap<String, Vec<u8>>,
    define: bool,
) {
    if resources.is_empty() {
        return;
    }
    let mut names: Vec<&String> = resources.keys().collect();
    names.sort();

    ctx.newline();
    ctx.writeln("namespace");
    ctx.open_block();
    ctx.writeln(&format!("namespace {NAMESPACE}"));
    ctx.open_block();
    for name in names {
        let bytes = &resources[name];
        let declaration = format!(
            "const std::array<uint8_t, {}> {}",
            bytes.len(),
            resource_name(name, false)
        );
        if !define {
            ctx.writeln(&format!("extern {declaration};"));
            continue;
        }
        ctx.writeln(&format!("{declaration} = {{"));
        ctx.indent();
        let mut lines = bytes.chunks(BYTES_PER_LINE).peekable();
        while let Some(line) = lines.next() {
            let text = line
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            if lines.peek().is_some() {
                ctx.writeln(&format!("{text},"));
            } else {
                ctx.writeln(&text);
            }
        }
        ctx.dedent();
        ctx.writeln("};");
    }
    ctx.close_block();
    ctx.close_block();
}
