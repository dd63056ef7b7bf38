//! Header codec for the metadata block at the top of a note file.
//!
//! The header is a constrained subset of YAML, parsed with a small
//! line-oriented state machine rather than a YAML library. Fields may
//! appear in any order and are all optional; unrecognized lines are
//! preserved verbatim and re-emitted after the known fields.

/// Delimiter line bounding the header block.
pub const HEADER_DELIMITER: &str = "---";

/// Structured note header.
///
/// `created` is an opaque timestamp string: it is echoed back on
/// re-encode but never parsed. `tags` and `aliases` preserve insertion
/// order and permit duplicates. `extra` holds unrecognized header lines
/// exactly as read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteMetadata {
    pub title: Option<String>,
    pub created: Option<String>,
    pub tags: Vec<String>,
    pub aliases: Vec<String>,
    pub extra: Vec<String>,
}

impl NoteMetadata {
    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.created.is_none()
            && self.tags.is_empty()
            && self.aliases.is_empty()
            && self.extra.is_empty()
    }
}

/// Which list field a `- ` item line belongs to.
#[derive(Clone, Copy)]
enum ListField {
    Tags,
    Aliases,
}

/// Splits note content into metadata and body.
///
/// The header is recognized only when the content begins with a `---`
/// delimiter line; it ends at the next line that is exactly `---`. The
/// closing delimiter line is consumed together with its newline, so the
/// body is everything that follows it. A start delimiter with no
/// matching end delimiter degrades permissively: the whole content is
/// returned as body with empty metadata.
pub fn decode(content: &str) -> (NoteMetadata, &str) {
    let Some((header, body)) = split_header(content) else {
        return (NoteMetadata::default(), content);
    };
    (parse_header(header), body)
}

/// Serializes metadata to canonical header text.
///
/// Field order is fixed: title, created, tags, aliases, then preserved
/// unknown lines. Sequence fields with zero elements are omitted
/// entirely. The output ends with the closing delimiter and no trailing
/// newline; a full note is `encode(meta) + "\n" + body`, satisfying
/// `decode(encode(m) + "\n" + body) == (m, body)`.
pub fn encode(meta: &NoteMetadata) -> String {
    let mut out = String::from(HEADER_DELIMITER);
    out.push('\n');
    if let Some(title) = &meta.title {
        out.push_str("title: ");
        out.push_str(title);
        out.push('\n');
    }
    if let Some(created) = &meta.created {
        out.push_str("created: ");
        out.push_str(created);
        out.push('\n');
    }
    encode_list(&mut out, "tags", &meta.tags);
    encode_list(&mut out, "aliases", &meta.aliases);
    for line in &meta.extra {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(HEADER_DELIMITER);
    out
}

/// Reassembles a full note file from metadata and body.
pub fn serialize(meta: &NoteMetadata, body: &str) -> String {
    format!("{}\n{}", encode(meta), body)
}

fn encode_list(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(label);
    out.push_str(":\n");
    for item in items {
        out.push_str("  - ");
        out.push_str(item);
        out.push('\n');
    }
}

/// Returns `(header_lines, body)` when a complete header block is
/// present at the start of the content.
fn split_header(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---\n")?;

    // Closing delimiter as the very first header line.
    if let Some(body) = rest.strip_prefix("---\n") {
        return Some(("", body));
    }
    if rest == HEADER_DELIMITER {
        return Some(("", ""));
    }

    if let Some(pos) = rest.find("\n---\n") {
        return Some((&rest[..pos], &rest[pos + 5..]));
    }
    if let Some(header) = rest.strip_suffix("\n---") {
        return Some((header, ""));
    }
    None
}

fn parse_header(header: &str) -> NoteMetadata {
    let mut meta = NoteMetadata::default();
    let mut list: Option<ListField> = None;

    for line in header.lines() {
        if let Some(field) = list {
            let trimmed = line.trim_start();
            if let Some(rest) = trimmed.strip_prefix('-') {
                let item = rest.trim();
                if !item.is_empty() {
                    match field {
                        ListField::Tags => meta.tags.push(item.to_string()),
                        ListField::Aliases => meta.aliases.push(item.to_string()),
                    }
                }
                continue;
            }
            list = None;
        }

        if let Some(rest) = line.strip_prefix("title:") {
            let value = rest.trim();
            if !value.is_empty() {
                meta.title = Some(value.to_string());
                continue;
            }
        } else if let Some(rest) = line.strip_prefix("created:") {
            let value = rest.trim();
            if !value.is_empty() {
                meta.created = Some(value.to_string());
                continue;
            }
        } else if line.trim_end() == "tags:" {
            list = Some(ListField::Tags);
            continue;
        } else if line.trim_end() == "aliases:" {
            list = Some(ListField::Aliases);
            continue;
        }

        meta.extra.push(line.to_string());
    }

    meta
}
