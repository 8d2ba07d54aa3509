//! Call-site metadata captured by the logging macros
//!
//! The logger never infers where an event came from. Callers supply a
//! `CallSite`, normally through the `call_site!` macro which expands to the
//! compiler-provided `file!()`, `line!()` and `module_path!()` values plus the
//! enclosing function path from `function_name!`.

use serde::Serialize;

const MARKER_SUFFIX: &str = "::__evlog_marker";
const CLOSURE_SUFFIX: &str = "::{{closure}}";

/// Source location of a logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
    pub module_path: &'static str,
}

impl CallSite {
    pub const fn new(
        file: &'static str,
        line: u32,
        function: &'static str,
        module_path: &'static str,
    ) -> Self {
        Self {
            file,
            line,
            function,
            module_path,
        }
    }

    /// Site used when no location is known
    pub const fn unknown() -> Self {
        Self::new("<unknown>", 0, "<unknown>", "<unknown>")
    }

    /// Last path component of `file`
    pub fn file_name(&self) -> &'static str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }

    /// Function name without its module path
    pub fn short_function(&self) -> &'static str {
        self.function.rsplit("::").next().unwrap_or(self.function)
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Turn the type name of the marker fn emitted by `function_name!` into the
/// path of the enclosing function. Closure frames are folded into their
/// defining function.
#[doc(hidden)]
pub fn strip_marker(type_name: &'static str) -> &'static str {
    let mut name = type_name.strip_suffix(MARKER_SUFFIX).unwrap_or(type_name);
    while let Some(outer) = name.strip_suffix(CLOSURE_SUFFIX) {
        name = outer;
    }
    name
}

/// Path of the enclosing function, e.g. `my_crate::auth::login`
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __evlog_marker() {}
        $crate::site::strip_marker(::std::any::type_name_of_val(&__evlog_marker))
    }};
}

/// `CallSite` for the current source location
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            ::std::file!(),
            ::std::line!(),
            $crate::function_name!(),
            ::std::module_path!(),
        )
    };
}
