//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use bverfgex::xml::get_tag_name;
///
/// let xml = r#"<gruende><absatz>text</absatz></gruende>"#;
/// let doc = Document::parse(xml).unwrap();
/// let absatz = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(absatz), "absatz");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first element below `node` (at any depth) with the given tag name.
///
/// The node itself is not considered.
pub fn find_descendant<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all elements below `node` (at any depth) with the given tag name,
/// in document order.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use bverfgex::xml::find_descendants;
///
/// let xml = r#"<gruende><ebene1><absatz>1</absatz></ebene1><absatz>2</absatz></gruende>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let paragraphs: Vec<_> = find_descendants(doc.root_element(), "absatz").collect();
/// assert_eq!(paragraphs.len(), 2);
/// ```
pub fn find_descendants<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Concatenate all text below a node, including text of nested elements.
///
/// Whitespace is kept as found; callers normalize it.
pub fn collect_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
