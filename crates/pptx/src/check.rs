//! Well-formedness checks for generated fragments.

use pptgen_core::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Root element wrapped around a fragment so the `a:` and `p:` prefixes are bound.
const FRAGMENT_ROOT: &str = concat!(
    r#"<fragment xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#
);

/// Check that `fragment` is a sequence of balanced, well-formed elements.
pub fn check_fragment(fragment: &str) -> Result<()> {
    element_names(fragment).map(|_| ())
}

/// List the qualified names of every element in `fragment`, in document order.
pub fn element_names(fragment: &str) -> Result<Vec<String>> {
    let wrapped = format!("{}{}", FRAGMENT_ROOT, fragment);
    let mut reader = Reader::from_str(&wrapped);
    reader.trim_text(true);
    reader.check_end_names(false);

    let mut open: Vec<String> = Vec::new();
    let mut names = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if !open.is_empty() {
                    names.push(name.clone());
                }
                open.push(name);
            }
            Ok(Event::Empty(ref e)) => {
                names.push(String::from_utf8_lossy(e.name().as_ref()).to_string());
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let expected = open.pop().unwrap_or_default();
                if open.is_empty() {
                    return Err(Error::Xml(format!(
                        "unexpected </{}> at position {}",
                        name,
                        reader.buffer_position()
                    )));
                }
                if expected != name {
                    return Err(Error::Xml(format!(
                        "expected </{}>, found </{}> at position {}",
                        expected,
                        name,
                        reader.buffer_position()
                    )));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    // Only the synthetic root may remain open.
    if open.len() > 1 {
        return Err(Error::UnclosedElement(open[1..].join(" > ")));
    }

    Ok(names)
}

/// Extract the local name from a potentially namespaced XML element name.
pub fn local_name(name: &str) -> &str {
    name.split_once(':').map(|(_, local)| local).unwrap_or(name)
}
