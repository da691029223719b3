//! JSON file saving.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::error::Error;

/// Serializes `value` as indented JSON into `writer`.
fn write_pretty<W, T>(writer: W, value: &T) -> Result<(), Error>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}

/// Saves `value` at `dst`, replacing any existing file.
pub fn save_json<T>(value: &T, dst: &Path) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    debug!("writing {:?}", dst);
    let f = File::create(dst)?;
    let mut bw = BufWriter::new(f);
    write_pretty(&mut bw, value)?;
    bw.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::corpus::Entry;

    use super::*;

    fn to_pretty_string<T: Serialize>(value: &T) -> String {
        let mut buf = Vec::new();
        write_pretty(&mut buf, value).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn indent_and_unicode() {
        let e = vec![Entry::new("ཀ་ཁ།".to_string(), vec!["སྙན་ངག".to_string()])];
        let s = to_pretty_string(&e);
        let expected = r#"[
    {
        "text": "ཀ་ཁ།",
        "tags": [
            "སྙན་ངག"
        ]
    }
]"#;
        assert_eq!(s, expected);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("out.json");
        let e = vec![Entry::new("ཀ".to_string(), vec![])];
        save_json(&e, &dst).unwrap();
        let back = crate::io::load_corpus(&dst).unwrap();
        assert_eq!(back, e);
    }
}
