//! Single-pass `%{name}` interpolation.
//!
//! Placeholders are `%{identifier}` where the identifier is one or more
//! ASCII word characters (`[A-Za-z0-9_]`). A placeholder with no matching
//! variable is left verbatim, not blanked; substitution happens in one pass,
//! so substituted values are never rescanned.
//!
//! # Example
//! ```
//! use polyglot::interpolate;
//!
//! let out = interpolate("Hello %{name}", &[("name", "Ada")]);
//! assert_eq!(out, "Hello Ada");
//!
//! // Unknown placeholders survive unchanged.
//! assert_eq!(interpolate("Hi %{who}", &[("name", "Ada")]), "Hi %{who}");
//! ```

/// Cheap pre-test for the placeholder opener.
///
/// Resolvers gate on this so placeholder-free text is returned without a
/// substitution pass.
#[inline]
#[must_use]
pub fn has_placeholder(text: &str) -> bool {
    text.contains("%{")
}

/// Substitute `%{name}` placeholders in `template` from `vars`.
///
/// Values are matched by identifier; the first pair with a matching name
/// wins. Malformed sequences (an unclosed `%{`, an empty `%{}`, or a
/// non-identifier character before the closing brace) are emitted verbatim.
#[must_use]
pub fn interpolate<K, V>(template: &str, vars: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' || chars.peek() != Some(&'{') {
            out.push(ch);
            continue;
        }
        chars.next(); // consume '{'

        let mut ident = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                ident.push(c);
                chars.next();
            } else {
                break;
            }
        }

        if !ident.is_empty() && chars.peek() == Some(&'}') {
            chars.next(); // consume '}'
            match vars.iter().find(|(name, _)| name.as_ref() == ident) {
                Some((_, value)) => out.push_str(value.as_ref()),
                None => {
                    out.push_str("%{");
                    out.push_str(&ident);
                    out.push('}');
                }
            }
        } else {
            // Not a placeholder; replay what was consumed and let the next
            // character be processed normally.
            out.push_str("%{");
            out.push_str(&ident);
        }
    }

    out
}
