//! Call-depth counter backing the `#[cfg_attr(feature = "trace", trace)]`
//! attribute on the parser's grammar-production methods. Only compiled when
//! the `trace` feature is enabled; the attribute itself is a no-op on a
//! normal build.

#[cfg(feature = "trace")]
thread_local! {
    pub static CALL_DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}
