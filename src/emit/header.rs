//! ABI header: one layout per revision, oldest first.
//!
//! Every layout starts with the same `{type, version, next}` prefix, so any
//! revision can be reached from a newer one by casting `next` to its concrete
//! layout once `type` and `version` have been checked.

use crate::chain::{Revision, walk};
use crate::emit::{Context, GENERATED_MARKER, Writer};
use crate::naming::Interface;
use crate::signature;

pub fn emit_header(ctx: &Context<'_>) -> String {
    let naming = &ctx.naming;
    let guard = naming.include_guard();
    let mut w = Writer::new();

    w.line(GENERATED_MARKER);
    w.line(format!("#ifndef {guard}"));
    w.line(format!("#define {guard}"));
    w.blank();
    w.includes(&ctx.cfg.header_includes);
    w.blank();
    w.line(init_macro(ctx));
    w.blank();
    w.extern_c_open();
    w.blank();

    w.line(format!("enum {} {{", naming.enum_name()));
    for tag in ctx.tags.iter() {
        w.line(format!("    {},", tag.discriminant));
    }
    w.line("};");
    w.blank();

    for ext in &ctx.api.extensions {
        let iface = Interface::Extension(&ext.name);
        let revisions = walk(&ext.head, true);
        log::debug!("header: extension `{}` with {} revision(s)", ext.name, revisions.len());
        for rev in &revisions {
            layout(ctx, &mut w, iface, rev, false);
        }
    }

    let revisions = walk(&ctx.api.core, true);
    log::debug!("header: core with {} revision(s)", revisions.len());
    for rev in &revisions {
        layout(ctx, &mut w, Interface::Core, rev, rev.canonical);
    }

    w.extern_c_close();
    w.blank();
    w.line(format!("#endif // {guard}"));
    w.into_string()
}

/// `root` adds the extension index ahead of the entries.
fn layout(ctx: &Context<'_>, w: &mut Writer, iface: Interface<'_>, rev: &Revision<'_>, root: bool) {
    let naming = &ctx.naming;
    let name = naming.struct_name(iface, rev);
    let base = naming.base_struct();

    w.line(format!("typedef struct {name} {{"));
    w.line("    unsigned int type;");
    w.line(format!("    {} version;", naming.version_type()));
    w.line(format!("    const {base} *next;"));
    if root {
        w.line("    unsigned int num_extensions;");
        w.line(format!("    const {base} **extensions;"));
    }
    for sig in &rev.node.entries {
        w.line(format!("    {}", signature::pointer_field(sig)));
    }
    w.line(format!("}} {name};"));
    w.blank();
}

/// `<PREFIX>_API_INIT(options)`: publishes `options->api_struct` into the
/// core slot and every extension it lists into that extension's slot.
fn init_macro(ctx: &Context<'_>) -> String {
    let naming = &ctx.naming;
    let core_struct = naming.canonical_struct(Interface::Core);
    let core_slot = naming.slot(Interface::Core);

    let mut body = vec![format!("    extern const {core_struct} *{core_slot};")];
    for tag in ctx.tags.extensions() {
        body.push(format!(
            "    extern const {} *{};",
            naming.canonical_struct(tag.interface),
            naming.slot(tag.interface)
        ));
    }
    body.push(format!("    {core_slot} = options->api_struct;"));
    body.push(format!("    for (unsigned int i = 0; i < {core_slot}->num_extensions; i++) {{"));
    body.push(format!("        switch ({core_slot}->extensions[i]->type) {{"));
    for tag in ctx.tags.extensions() {
        body.push(format!("            case {}:", tag.discriminant));
        body.push(format!(
            "                {} = (const {} *){core_slot}->extensions[i];",
            naming.slot(tag.interface),
            naming.canonical_struct(tag.interface)
        ));
        body.push("                break;".to_string());
    }
    body.push("        }".to_string());
    body.push("    }".to_string());

    format!(
        "#define {}(options) do {{  \\\n{}  \\\n }} while (0)",
        naming.init_macro(),
        body.join("  \\\n")
    )
}
