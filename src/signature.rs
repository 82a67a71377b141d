//! C function signature rendering.
//!
//! A type ending in `*` abuts the following identifier (`char *name`); every
//! other type is separated by exactly one space (`int name`).

use crate::api::{FunctionSignature, Parameter};

/// Type text followed by whatever separator the next identifier needs.
pub fn spaced(ty: &str) -> String {
    if ty.ends_with('*') {
        ty.to_string()
    } else {
        format!("{ty} ")
    }
}

pub fn is_void(ty: &str) -> bool {
    ty.trim() == "void"
}

/// `int x, char *s`; empty for no parameters.
pub fn parameter_list(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|p| format!("{}{}", spaced(&p.ty), p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `int name(int x, char *s)`
pub fn declaration(sig: &FunctionSignature) -> String {
    format!("{}{}({})", spaced(&sig.return_type), sig.name, parameter_list(&sig.parameters))
}

/// `name(x, s)`
pub fn call_expression(sig: &FunctionSignature) -> String {
    let args = sig.parameters.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
    format!("{}({})", sig.name, args.join(", "))
}

/// Struct field holding a pointer to `sig`: `int (*name)(int x);`
pub fn pointer_field(sig: &FunctionSignature) -> String {
    format!(
        "{}(*{})({});",
        spaced(&sig.return_type),
        sig.name,
        parameter_list(&sig.parameters)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(ret: &str, name: &str, params: &[(&str, &str)]) -> FunctionSignature {
        FunctionSignature {
            name: name.to_string(),
            return_type: ret.to_string(),
            parameters: params.iter().map(|(t, n)| Parameter::new(*t, *n)).collect(),
        }
    }

    #[test]
    fn pointer_types_abut_identifier() {
        let s = sig("const char *", "name_of", &[("void *", "obj"), ("int", "idx")]);
        assert_eq!(declaration(&s), "const char *name_of(void *obj, int idx)");
        assert_eq!(pointer_field(&s), "const char *(*name_of)(void *obj, int idx);");
    }

    #[test]
    fn empty_parameter_list() {
        let s = sig("int", "count", &[]);
        assert_eq!(declaration(&s), "int count()");
        assert_eq!(call_expression(&s), "count()");
        assert_eq!(pointer_field(&s), "int (*count)();");
    }

    #[test]
    fn call_uses_names_only() {
        let s = sig("void", "set", &[("rebel_object *", "p_self"), ("double", "v")]);
        assert_eq!(call_expression(&s), "set(p_self, v)");
    }

    #[test]
    fn void_detection_ignores_pointers() {
        assert!(is_void("void"));
        assert!(is_void(" void "));
        assert!(!is_void("void *"));
        assert!(!is_void("rebel_bool"));
    }
}
