//! XML Parser Example
//!
//! This example parses a small document, inspects the tree, changes it, and writes it back out.
//!
//! Run with `cargo run --example parser`.
use tagtree::{Element, Parser, ParserOptions};

const DOCUMENT: &str = r#"
<bookstore name="Corner &amp; Co">
  <book category="cooking" lang='en'>
    <title>Everyday Italian</title>
    <price>30.00</price>
  </book>
  <book category="children">
    <title>Harry Potter</title>
    <price>29.99</price>
  </book>
</bookstore>
"#;

fn main() {
    // The default parser is lenient, and decodes entities in text and attribute values.
    //
    // If an error occurs, the error message points at the offending tag;
    //      | </bookstore>
    //      = At 12:1
    //      = Unmatched close tag: bookstore
    let mut root = match Parser::new().parse(DOCUMENT) {
        Ok(root) => root,
        Err(e) => panic!("Error parsing XML document:\n{e}"),
    };

    println!("Store: {}", root.attribute("name").unwrap_or_default());
    for book in root.children_named("book") {
        let title = book.child("title").map_or("?", |t| t.text.as_str());
        let price = book.child("price").map_or("?", |p| p.text.as_str());
        println!("- {title}: {price}");
    }

    // The tree is plain data, so it can be changed after parsing
    root.children.push(
        Element::new("book")
            .with_attribute("category", "web")
            .with_child(Element::new("title").with_text("Learning XML"))
            .with_child(Element::new("price").with_text("39.95")),
    );

    // `{}` writes compact XML, `{:#}` indents with tabs
    println!("{root:#}");

    // Strict mode refuses documents the lenient parser would patch up.
    let strict = Parser::new().with_options(ParserOptions::new().strict(true));
    if let Err(e) = strict.parse("<a><b></a>") {
        println!("Strict mode:\n{e}");
    }
}
