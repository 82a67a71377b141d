//! ABI instance source: the populated tables matching the header layouts.
use crate::chain::{Revision, walk};
use crate::emit::{Context, GENERATED_MARKER, Writer};
use crate::naming::Interface;

pub fn emit_source(ctx: &Context<'_>) -> String {
    let naming = &ctx.naming;
    let base = naming.base_struct();
    let mut w = Writer::new();

    w.line(GENERATED_MARKER);
    w.blank();
    w.line(format!("#include <{}>", ctx.cfg.header_name));
    w.blank();

    for ext in &ctx.api.extensions {
        let iface = Interface::Extension(&ext.name);
        for rev in &walk(&ext.head, true) {
            instance(ctx, &mut w, iface, rev, None);
        }
    }

    let index: Vec<String> = ctx
        .tags
        .extensions()
        .map(|tag| format!("    (const {base} *)&{},", naming.canonical_instance(tag.interface)))
        .collect();
    log::debug!("source: extension index with {} element(s)", index.len());
    w.line(format!("const {base} *{}[] = {{", naming.extensions_array()));
    for item in &index {
        w.line(item.as_str());
    }
    w.line("};");
    w.blank();

    for rev in &walk(&ctx.api.core, true) {
        let root = rev.canonical.then_some(index.len());
        instance(ctx, &mut w, Interface::Core, rev, root);
    }

    w.into_string()
}

/// `root` is the extension count when rendering the root instance.
fn instance(
    ctx: &Context<'_>,
    w: &mut Writer,
    iface: Interface<'_>,
    rev: &Revision<'_>,
    root: Option<usize>,
) {
    let naming = &ctx.naming;
    let version = rev.version();
    let next = match rev.predecessor() {
        Some(prev) => format!(
            "(const {} *)&{}",
            naming.base_struct(),
            naming.instance_name(iface, &prev)
        ),
        None => "NULL".to_string(),
    };

    w.line(format!(
        "extern const {} {} = {{",
        naming.struct_name(iface, rev),
        naming.instance_name(iface, rev)
    ));
    w.line(format!("    {},", naming.discriminant(iface, &rev.node.type_tag)));
    w.line(format!("    {{{}, {}}},", version.major, version.minor));
    w.line(format!("    {next},"));
    if let Some(count) = root {
        w.line(format!("    {count},"));
        w.line(format!("    {},", naming.extensions_array()));
    }
    for sig in &rev.node.entries {
        w.line(format!("    {},", sig.name));
    }
    w.line("};");
    w.blank();
}
