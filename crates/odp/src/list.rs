//! Flattening of nested `text:list` trees into indented outline entries.

use crate::namespace::OdpNames;
use crate::xml::Element;
use odp_core::OutlineEntry;

/// Flatten a `text:list` into outline entries, starting at `indent`.
///
/// Every child of a `text:list-item` yields one entry at the current level,
/// except a nested `text:list`, whose entries follow at `indent + 1`. An item
/// with text and a sublist therefore yields its text first.
pub fn flatten_list(list: &Element, indent: usize, names: &OdpNames) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    flatten_into(list, indent, names, &mut entries);
    entries
}

fn flatten_into(list: &Element, indent: usize, names: &OdpNames, entries: &mut Vec<OutlineEntry>) {
    for item in list.children_named(&names.list_item) {
        for child in item.child_elements() {
            if child.is(&names.list) {
                flatten_into(child, indent + 1, names, entries);
            } else {
                let text = child.text();
                log::debug!("{}: {}", indent, text);
                entries.push(OutlineEntry::new(indent, text));
            }
        }
    }
}
