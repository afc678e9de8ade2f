use std::{borrow::Cow, panic::Location};

use crate::{FieldValue, Fields, FIELD_CALLER_FILE, FIELD_CALLER_FUNC, FIELD_CALLER_LINE};

/// Recorded in `CallerFunc` when the function name is not available at the
/// call site (plain method calls rather than the logging macros).
pub const UNKNOWN_FUNCTION: &str = "unknown";

/// Call-site metadata of a public log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub function: Cow<'static, str>,
    pub file: &'static str,
    pub line: u32,
}

impl Caller {
    /// Captures the location of the caller of the nearest non-`#[track_caller]`
    /// frame.
    ///
    /// Every public entry point of [`crate::Logger`] carries `#[track_caller]`,
    /// so this resolves to the user's call site whatever the internal
    /// delegation depth is.
    #[track_caller]
    #[must_use]
    pub fn capture() -> Self {
        let location = Location::caller();
        Self {
            function: Cow::Borrowed(UNKNOWN_FUNCTION),
            file: location.file(),
            line: location.line(),
        }
    }

    /// Caller with every attribute known, as produced by the logging macros.
    #[must_use]
    pub fn new(function: impl Into<Cow<'static, str>>, file: &'static str, line: u32) -> Self {
        Self {
            function: function.into(),
            file,
            line,
        }
    }

    /// Writes the three caller fields into `fields`.
    pub fn annotate(&self, fields: &mut Fields) {
        fields.insert(
            FIELD_CALLER_FUNC.to_owned(),
            FieldValue::from(self.function.as_ref()),
        );
        fields.insert(FIELD_CALLER_FILE.to_owned(), FieldValue::from(self.file));
        fields.insert(FIELD_CALLER_LINE.to_owned(), FieldValue::from(self.line));
    }
}

/// Trims the path of a closure type name down to its enclosing function.
#[doc(hidden)]
#[must_use]
pub fn enclosing_function(closure_type_name: &'static str) -> &'static str {
    let mut name = closure_type_name;
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

/// Helper macro to extract the enclosing function path from the call site
#[macro_export]
#[doc(hidden)]
macro_rules! __function_name {
    () => {
        $crate::__private::enclosing_function(::std::any::type_name_of_val(&|| {}))
    };
}

/// Caller metadata of the macro invocation site
#[macro_export]
macro_rules! caller {
    () => {
        $crate::Caller::new($crate::__function_name!(), file!(), line!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn forwarded() -> Caller {
        Caller::capture()
    }

    #[track_caller]
    fn forwarded_twice() -> Caller {
        forwarded()
    }

    #[test]
    fn test_capture_is_depth_invariant() {
        let line = line!() + 1;
        let (direct, once, twice) = (Caller::capture(), forwarded(), forwarded_twice());
        assert_eq!(direct.line, line);
        assert_eq!(once.line, line);
        assert_eq!(twice.line, line);
        assert_eq!(direct.file, file!());
        assert_eq!(twice.file, file!());
        assert_eq!(direct.function, UNKNOWN_FUNCTION);
    }

    #[test]
    fn test_caller_macro_names_the_function() {
        let caller = crate::caller!();
        assert_eq!(caller.line, line!() - 1);
        assert!(
            caller
                .function
                .ends_with("caller::tests::test_caller_macro_names_the_function"),
            "{}",
            caller.function
        );
    }

    #[test]
    fn test_enclosing_function() {
        assert_eq!(enclosing_function("a::b::f::{{closure}}"), "a::b::f");
        assert_eq!(enclosing_function("a::b::f::{{closure}}::{{closure}}"), "a::b::f");
        assert_eq!(enclosing_function("a::f"), "a::f");
    }

    #[test]
    fn test_annotate() {
        let mut fields = Fields::new();
        Caller::new("app::run", "src/main.rs", 12).annotate(&mut fields);
        assert_eq!(fields.get(FIELD_CALLER_FUNC), Some(&FieldValue::from("app::run")));
        assert_eq!(fields.get(FIELD_CALLER_FILE), Some(&FieldValue::from("src/main.rs")));
        assert_eq!(fields.get(FIELD_CALLER_LINE), Some(&FieldValue::from(12_u32)));
    }
}
