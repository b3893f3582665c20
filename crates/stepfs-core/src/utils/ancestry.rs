//! Nearest labeled ancestor lookup.
//!
//! Drag sources in the file list carry their combined path as a label on
//! some enclosing element, not necessarily on the element the pointer event
//! hits. [`ElementTree`] mirrors just enough of that hierarchy (parent links
//! and optional labels) to resolve the label for any element.

/// Handle to an element in an [`ElementTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

#[derive(Clone, Debug)]
struct Element {
    parent: Option<ElementId>,
    label: Option<String>,
}

/// Arena of elements linked to their parents.
#[derive(Clone, Debug, Default)]
pub struct ElementTree {
    elements: Vec<Element>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element below `parent` (or as a top-level element).
    ///
    /// A parent must have been inserted earlier; anything else is dropped,
    /// which keeps every parent chain strictly decreasing and loop-free.
    pub fn insert(&mut self, parent: Option<ElementId>, label: Option<&str>) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            parent: parent.filter(|p| p.0 < id.0),
            label: label.map(str::to_string),
        });
        id
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(id.0)?.parent
    }

    pub fn label(&self, id: ElementId) -> Option<&str> {
        self.elements.get(id.0)?.label.as_deref()
    }

    /// Label of `id` or of its closest labeled ancestor.
    ///
    /// Returns `None` when the top of the hierarchy is reached without
    /// finding one.
    pub fn nearest_label(&self, id: ElementId) -> Option<&str> {
        let mut current = Some(id);
        while let Some(id) = current {
            let element = self.elements.get(id.0)?;
            if let Some(label) = element.label.as_deref() {
                return Some(label);
            }
            current = element.parent;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_on_element_itself() {
        let mut tree = ElementTree::new();
        let row = tree.insert(None, Some("/project-dir:/a.py"));
        assert_eq!(tree.nearest_label(row), Some("/project-dir:/a.py"));
    }

    #[test]
    fn test_walks_up_to_nearest_label() {
        let mut tree = ElementTree::new();
        let list = tree.insert(None, Some("/project-dir:/"));
        let row = tree.insert(Some(list), Some("/project-dir:/lib/"));
        let icon = tree.insert(Some(row), None);
        let glyph = tree.insert(Some(icon), None);

        assert_eq!(tree.parent(glyph), Some(icon));
        assert_eq!(tree.label(glyph), None);
        assert_eq!(tree.nearest_label(glyph), Some("/project-dir:/lib/"));
    }

    #[test]
    fn test_no_labeled_ancestor() {
        let mut tree = ElementTree::new();
        let body = tree.insert(None, None);
        let div = tree.insert(Some(body), None);
        assert_eq!(tree.nearest_label(div), None);
    }

    #[test]
    fn test_foreign_id() {
        let mut other = ElementTree::new();
        other.insert(None, None);
        let foreign = other.insert(None, Some("/data:/"));
        assert_eq!(ElementTree::new().nearest_label(foreign), None);
    }
}
