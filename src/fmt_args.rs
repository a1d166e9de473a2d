//! Printf-style label formatting.
//!
//! Event logs carry label templates like `"decode frame %d"` with the
//! arguments in trailing CSV columns. Substitution is positional and
//! best-effort: recognized placeholders consume one argument each, numeric
//! specifiers coerce when they can and fall back to the raw argument text,
//! and anything unmatched is left verbatim.

/// Substitute `args` into the printf-style `template`.
///
/// Recognized specifiers: `%s`, `%d`, `%i`, `%u`, `%f`, `%x` and the `%%`
/// escape. Flags, width, and precision between `%` and the conversion
/// character are accepted but ignored. Placeholders beyond the argument
/// list stay in the output untouched; surplus arguments are ignored.
pub fn format(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let bytes = template.as_bytes();
    let mut pos = 0;
    let mut next_arg = 0;

    while let Some(off) = template[pos..].find('%') {
        let pct = pos + off;
        out.push_str(&template[pos..pct]);

        match parse_spec(&bytes[pct..]) {
            Some((len, conv)) => {
                let raw = &template[pct..pct + len];
                if conv == b'%' {
                    out.push('%');
                } else if let Some(arg) = args.get(next_arg) {
                    out.push_str(&coerce(conv, arg));
                    next_arg += 1;
                } else {
                    // Ran out of arguments: keep the placeholder verbatim.
                    out.push_str(raw);
                }
                pos = pct + len;
            }
            None => {
                // A lone or unterminated '%': copy it through.
                out.push('%');
                pos = pct + 1;
            }
        }
    }
    out.push_str(&template[pos..]);
    out
}

/// Parse one specifier starting at a `%`. Returns the byte length of the
/// whole specifier and its conversion character.
fn parse_spec(bytes: &[u8]) -> Option<(usize, u8)> {
    debug_assert_eq!(bytes[0], b'%');
    let mut i = 1;
    // Skip flags, width, and precision.
    while i < bytes.len() && matches!(bytes[i], b'0'..=b'9' | b'.' | b'-' | b'+' | b' ' | b'#') {
        i += 1;
    }
    match bytes.get(i) {
        Some(&c @ (b's' | b'd' | b'i' | b'u' | b'f' | b'x' | b'%')) => Some((i + 1, c)),
        _ => None,
    }
}

/// Best-effort coercion of an argument string for a conversion character.
fn coerce(conv: u8, arg: &str) -> String {
    let arg = arg.trim();
    match conv {
        b'd' | b'i' => arg
            .parse::<i64>()
            .map(|v| v.to_string())
            .or_else(|_| arg.parse::<f64>().map(|v| (v as i64).to_string()))
            .unwrap_or_else(|_| arg.to_string()),
        b'u' => arg
            .parse::<u64>()
            .map(|v| v.to_string())
            .unwrap_or_else(|_| arg.to_string()),
        b'f' => arg
            .parse::<f64>()
            .map(|v| v.to_string())
            .unwrap_or_else(|_| arg.to_string()),
        b'x' => arg
            .parse::<u64>()
            .map(|v| format!("{:x}", v))
            .unwrap_or_else(|_| arg.to_string()),
        // %s and anything else: verbatim.
        _ => arg.to_string(),
    }
}
