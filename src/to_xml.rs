//! XML formatting module
//!
//! Use [`Element::render`] unless you need to write the XML to a file or other writer.
use crate::{Element, entities::encode_entities};

const TAB: &str = "\t";

/// Flatten an element and its subtree as an XML string using the given writer.
///
/// The walk is non-recursive, so deep trees cannot overflow the stack.
///
/// # Errors
/// This function will return an error if the writer fails to write the XML string.
pub fn write_xml(
    writer: &mut dyn std::io::Write,
    root: &Element,
    pretty: bool,
) -> std::io::Result<()> {
    let mut stack = vec![(NodeTask::Open(root), 0_usize)];
    loop {
        let Some((task, depth)) = stack.pop() else {
            break;
        };
        let tab = if pretty { TAB.repeat(depth) } else { String::new() };

        match task {
            NodeTask::Close(name) => {
                if pretty {
                    writer.write_all(format!("\n{tab}").as_bytes())?;
                }
                writer.write_all(format!("</{name}>").as_bytes())?;
            }

            NodeTask::Open(element) => {
                if pretty && depth > 0 {
                    writer.write_all(b"\n")?;
                }

                let name = &element.name;
                writer.write_all(format!("{tab}<{name}").as_bytes())?;

                for (attr_name, attr_value) in &element.attributes {
                    let attr_value = encode_entities(attr_value)?;
                    writer.write_all(format!(r#" {attr_name}="{attr_value}""#).as_bytes())?;
                }
                writer.write_all(b">")?;

                // Leaves stay on one line, even in pretty mode
                if element.children.is_empty() {
                    let text = encode_entities(&element.text)?;
                    writer.write_all(format!("{text}</{name}>").as_bytes())?;
                    continue;
                }

                stack.push((NodeTask::Close(name), depth));
                for child in element.children.iter().rev() {
                    stack.push((NodeTask::Open(child), depth + 1));
                }
            }
        }
    }

    Ok(())
}

enum NodeTask<'a> {
    Open(&'a Element),
    Close(&'a str),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(element: &Element, pretty: bool) -> String {
        let mut output = Vec::new();
        write_xml(&mut output, element, pretty).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_write_leaf() {
        let element = Element::new("root");
        assert_eq!(write(&element, false), "<root></root>");
        assert_eq!(write(&element, true), "<root></root>");
    }

    #[test]
    fn test_write_attributes_in_order() {
        let element = Element::new("root")
            .with_attribute("id", "123")
            .with_attribute("class", "test");
        assert_eq!(
            write(&element, false),
            r#"<root id="123" class="test"></root>"#
        );
    }

    #[test]
    fn test_write_escapes_values() {
        let element = Element::new("root")
            .with_attribute("q", r#"say "hi""#)
            .with_text("a < b & c");
        assert_eq!(
            write(&element, false),
            r#"<root q="say &quot;hi&quot;">a &lt; b &amp; c</root>"#
        );
    }

    #[test]
    fn test_write_compact_nested() {
        let element = Element::new("a")
            .with_child(Element::new("b").with_text("1"))
            .with_child(Element::new("c").with_child(Element::new("d")));
        assert_eq!(
            write(&element, false),
            "<a><b>1</b><c><d></d></c></a>"
        );
    }

    #[test]
    fn test_write_pretty_nested() {
        let element = Element::new("a")
            .with_child(Element::new("b").with_text("1"))
            .with_child(Element::new("c").with_child(Element::new("d")));
        assert_eq!(
            write(&element, true),
            "<a>\n\t<b>1</b>\n\t<c>\n\t\t<d></d>\n\t</c>\n</a>"
        );
    }

    #[test]
    fn test_children_hide_text() {
        let element = Element::new("a")
            .with_text("ignored")
            .with_child(Element::new("b"));
        assert_eq!(write(&element, false), "<a><b></b></a>");
    }

    #[test]
    fn test_deep_tree() {
        let mut element = Element::new("leaf");
        for _ in 0..1_000 {
            element = Element::new("n").with_child(element);
        }

        let xml = write(&element, false);
        assert!(xml.starts_with("<n><n>"));
        assert!(xml.contains("<leaf></leaf>"));
    }
}
