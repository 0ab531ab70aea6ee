// src/macros.rs

/// `s!()` is an empty `String`, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => { ::std::string::String::new() };
    ($expr:expr) => { ::std::string::String::from($expr) };
}

/// Concatenate anything `AsRef<str>` into one owned `String`.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {{
        let mut out = ::std::string::String::new();
        $( out.push_str(::std::convert::AsRef::<str>::as_ref(&$part)); )+
        out
    }};
}
