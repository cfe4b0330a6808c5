//! Left-to-right isolation of Latin and numeric runs inside RTL text.

const LTR_OPEN: &str = "<span dir=\"ltr\">";
const LTR_CLOSE: &str = "</span>";

fn is_run_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '+' | '#' | ' ')
}

/// Length in bytes of a character entity at the start of `s`, if any.
fn entity_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix('&')?;
    let semi = body.find(';')?;
    let name = &body[..semi];
    let valid = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some(dec) = name.strip_prefix('#') {
        !dec.is_empty() && dec.chars().all(|c| c.is_ascii_digit())
    } else {
        !name.is_empty() && name.len() <= 8 && name.chars().all(|c| c.is_ascii_alphanumeric())
    };
    valid.then_some(semi + 2)
}

/// Wraps every maximal run of ASCII letters, digits and `- . _ / + #`
/// (with interior spaces) in `<span dir="ltr">`.
///
/// Input must already be HTML-escaped: entities such as `&lt;` are copied
/// through untouched and the inserted markup is never escaped. Runs without an
/// ASCII letter or digit (a lone `-` bullet, say) are left as they are.
pub fn wrap_ltr_runs(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped;

    while let Some(c) = rest.chars().next() {
        if c == '&' {
            if let Some(len) = entity_len(rest) {
                out.push_str(&rest[..len]);
                rest = &rest[len..];
                continue;
            }
        }

        if c != ' ' && is_run_char(c) {
            let end = rest
                .char_indices()
                .find(|(_, ch)| !is_run_char(*ch))
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let run = rest[..end].trim_end_matches(' ');
            if run.chars().any(|ch| ch.is_ascii_alphanumeric()) {
                out.push_str(LTR_OPEN);
                out.push_str(run);
                out.push_str(LTR_CLOSE);
            } else {
                out.push_str(run);
            }
            rest = &rest[run.len()..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}
