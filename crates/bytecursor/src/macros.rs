/// Finds the name of the function in which this macro is expanded
macro_rules! function {
    // Taken from https://stackoverflow.com/a/40234666
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        match name.strip_suffix("::f") {
            Some(stripped) => stripped,
            None => name,
        }
    }};
}

/// Creates a bounds error whose context is the enclosing function.
macro_rules! bounds_err {
    ( $offset:expr, $requested:expr, $length:expr $(,)? ) => {{
        $crate::CursorError::bounds(function!(), $offset, $requested, $length)
    }};
}
