//! Trampolines: one C function per entry of the newest core and extension
//! revisions, each forwarding through the table its interface's slot holds.
//!
//! Slots start out `NULL` and are filled once by the header's init macro.
use crate::emit::{Context, GENERATED_MARKER, Writer};
use crate::signature;

pub fn emit_wrapper(ctx: &Context<'_>) -> String {
    let naming = &ctx.naming;
    let mut w = Writer::new();

    w.line(GENERATED_MARKER);
    w.blank();
    w.includes(&ctx.cfg.wrapper_includes);
    w.blank();
    w.line(format!("#include <{}>", ctx.cfg.header_name));
    w.blank();
    w.extern_c_open();
    w.blank();

    for tag in ctx.tags.iter() {
        w.line(format!(
            "const {} *{} = NULL;",
            naming.canonical_struct(tag.interface),
            naming.slot(tag.interface)
        ));
    }
    w.blank();

    for tag in ctx.tags.iter() {
        let slot = naming.slot(tag.interface);
        log::debug!("wrapper: {} trampoline(s) through {slot}", tag.head.entries.len());
        for sig in &tag.head.entries {
            let ret = if signature::is_void(&sig.return_type) { "" } else { "return " };
            w.line(format!("{} {{", signature::declaration(sig)));
            w.line(format!("    {ret}{slot}->{};", signature::call_expression(sig)));
            w.line("}");
            w.blank();
        }
    }

    w.extern_c_close();
    w.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiDescription;
    use crate::config::GeneratorConfig;
    use serde_json::json;

    fn render(v: serde_json::Value) -> String {
        let api: ApiDescription = serde_json::from_value(v).unwrap();
        let cfg = GeneratorConfig::default();
        let ctx = Context::new(&api, &cfg).unwrap();
        emit_wrapper(&ctx)
    }

    #[test]
    fn forwards_with_and_without_return() {
        let src = render(json!({
            "core": {
                "type": "CORE",
                "version": {"major": 1, "minor": 0},
                "api": [
                    {"name": "string_new", "return_type": "void", "arguments": [["rebel_string *", "r_dest"]]},
                    {"name": "string_length", "return_type": "rebel_int", "arguments": [["const rebel_string *", "p_self"]]},
                    {"name": "alloc", "return_type": "void *", "arguments": [["int", "p_bytes"]]}
                ]
            }
        }));
        assert!(src.contains(
            "void string_new(rebel_string *r_dest) {\n    _gdnative_wrapper_api_struct->string_new(r_dest);\n}"
        ));
        assert!(src.contains(
            "rebel_int string_length(const rebel_string *p_self) {\n    return _gdnative_wrapper_api_struct->string_length(p_self);\n}"
        ));
        assert!(src.contains(
            "void *alloc(int p_bytes) {\n    return _gdnative_wrapper_api_struct->alloc(p_bytes);\n}"
        ));
    }

    #[test]
    fn slots_then_trampolines_in_description_order() {
        let src = render(json!({
            "core": {"type": "CORE", "version": {"major": 1, "minor": 0}, "api": [
                {"name": "a", "return_type": "void", "arguments": []}
            ]},
            "extensions": [
                {"name": "video", "type": "VIDEO", "version": {"major": 1, "minor": 0}, "api": [
                    {"name": "play", "return_type": "void", "arguments": []}
                ]},
                {"name": "net", "type": "NET", "version": {"major": 1, "minor": 0}, "api": [
                    {"name": "send", "return_type": "int", "arguments": [["int", "n"]]}
                ]}
            ]
        }));
        assert!(src.contains(
            "const rebel_gdnative_core_api_struct *_gdnative_wrapper_api_struct = NULL;
const rebel_gdnative_ext_video_api_struct *_gdnative_wrapper_video_api_struct = NULL;
const rebel_gdnative_ext_net_api_struct *_gdnative_wrapper_net_api_struct = NULL;
"
        ));
        let pos = |s: &str| src.find(s).unwrap();
        assert!(pos("void a() {") < pos("void play() {"));
        assert!(pos("void play() {") < pos("int send(int n) {"));
        assert!(src.contains("    return _gdnative_wrapper_net_api_struct->send(n);"));
    }

    #[test]
    fn historical_revisions_are_not_wrapped() {
        let src = render(json!({
            "core": {"type": "CORE", "version": {"major": 1, "minor": 0}, "api": []},
            "extensions": [{
                "name": "video",
                "type": "VIDEO",
                "version": {"major": 1, "minor": 1},
                "next": {"type": "VIDEO", "version": {"major": 1, "minor": 0}, "api": [
                    {"name": "legacy_only", "return_type": "void", "arguments": []}
                ]},
                "api": [{"name": "play", "return_type": "void", "arguments": []}]
            }]
        }));
        assert!(!src.contains("legacy_only"));
        assert!(src.contains("void play() {"));
        assert!(!src.contains("_1_0"));
    }
}
