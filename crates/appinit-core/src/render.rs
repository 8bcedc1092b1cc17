use crate::context::Variables;
use crate::error::{AppinitError, Result};

const OPEN: &[u8] = b"{%";
const CLOSE: &[u8] = b"%}";

/// Substitute `{% name %}` markers in `template` with values from `variables`.
///
/// The text between markers is trimmed and looked up verbatim; a name absent
/// from the mapping fails the whole render. Substituted values are emitted
/// literally and never re-scanned, and everything outside marker pairs passes
/// through untouched (including an opening marker that is never closed).
pub fn render(template: &[u8], variables: &Variables) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = find(rest, OPEN) {
        let after = &rest[start + OPEN.len()..];
        let Some(end) = find(after, CLOSE) else {
            break;
        };

        out.extend_from_slice(&rest[..start]);

        let tag = String::from_utf8_lossy(&after[..end]);
        let name = tag.trim();
        match variables.get(name) {
            Some(value) => out.extend_from_slice(value.as_bytes()),
            None => {
                return Err(AppinitError::UnknownVariable {
                    name: name.to_string(),
                })
            }
        }

        rest = &after[end + CLOSE.len()..];
    }

    out.extend_from_slice(rest);
    Ok(out)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
