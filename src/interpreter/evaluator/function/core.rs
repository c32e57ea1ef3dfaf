use crate::interpreter::{
    environment::Environment,
    evaluator::function::builtin,
    value::{
        callable::{Callable, NativeFunction},
        core::Value,
    },
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - the name the function is bound to in the global scope,
/// - its exact arity,
/// - a function pointer implementing it.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table of natives),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[NativeFunction] = &[
            $(
                NativeFunction { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every built-in function, in installation order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "clock" => { arity: 0, func: builtin::clock },
    "now"   => { arity: 0, func: builtin::clock },
    "print" => { arity: 1, func: builtin::print },
}

/// Binds every built-in into `globals`.
///
/// Built-ins are ordinary global variables: scripts may shadow or reassign
/// them.
pub fn install_builtins(globals: &mut Environment) {
    for native in BUILTIN_TABLE {
        tracing::trace!(name = native.name, arity = native.arity, "install builtin");
        globals.define(native.name, Value::from(Callable::Native(native.clone())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_is_installed() {
        let mut globals = Environment::new();
        install_builtins(&mut globals);

        for name in BUILTIN_FUNCTIONS {
            let value = globals.get(name);
            assert!(matches!(value, Some(Value::Callable(_))), "{name}");
        }
        assert_eq!(globals.get("print").map(|v| v.to_string()),
                   Some("<native fn print>".into()));
    }

    #[test]
    fn builtins_can_be_shadowed() {
        use crate::interpreter::evaluator::core::tests::run;

        let (output, result) = run("{ var print = 1; } print(\"still native\");");
        assert!(result.is_ok());
        assert_eq!(output, "still native\n");
    }
}
