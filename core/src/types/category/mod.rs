use crate::types::Handle;
use serde::{Deserialize, Serialize};

/// Product category node in the shape the commerce backend returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub handle: Handle,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "parent_category_id")]
    pub parent_id: Option<String>,
    #[serde(default, rename = "category_children")]
    pub children: Vec<Category>,
}

/// Option for the category filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: Handle,
    pub label: String,
}

/// One breadcrumb segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub handle: Handle,
}

/// Top-level categories with their descendants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTree {
    roots: Vec<Category>,
}

impl CategoryTree {
    /// Keeps only root nodes; descendants stay reachable through `children`.
    pub fn from_roots(all: Vec<Category>) -> Self {
        Self {
            roots: all.into_iter().filter(|c| c.parent_id.is_none()).collect(),
        }
    }

    pub fn roots(&self) -> &[Category] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn find(&self, handle: &str) -> Option<&Category> {
        self.roots.iter().find(|c| c.handle.as_str() == handle)
    }

    pub fn find_child(&self, parent: &str, child: &str) -> Option<&Category> {
        self.find(parent)?
            .children
            .iter()
            .find(|c| c.handle.as_str() == child)
    }

    /// Resolves a `/shop/{category}[/{sub}]` route into the category lock.
    ///
    /// Returns `None` for unknown segments, which the page renders as not found.
    pub fn resolve_route(&self, parent: &str, child: Option<&str>) -> Option<Handle> {
        match child {
            Some(child) => self.find_child(parent, child).map(|c| c.handle.clone()),
            None => self.find(parent).map(|c| c.handle.clone()),
        }
    }

    /// Display name of any category in the tree.
    pub fn label_of(&self, handle: &Handle) -> Option<&str> {
        self.path_to(handle)
            .and_then(|path| path.last().map(|c| c.name.as_str()))
    }

    pub fn options(&self) -> Vec<CategoryOption> {
        self.roots
            .iter()
            .map(|c| CategoryOption {
                value: c.handle.clone(),
                label: c.name.clone(),
            })
            .collect()
    }

    /// Breadcrumb trail from the root down to `handle`.
    ///
    /// An unknown handle yields an empty trail rather than an error.
    pub fn trail(&self, handle: &Handle) -> Vec<Crumb> {
        self.path_to(handle)
            .unwrap_or_default()
            .into_iter()
            .map(|c| Crumb {
                label: c.name.clone(),
                handle: c.handle.clone(),
            })
            .collect()
    }

    fn path_to(&self, handle: &Handle) -> Option<Vec<&Category>> {
        let mut path = Vec::new();
        if descend(&self.roots, handle, &mut path) {
            Some(path)
        } else {
            None
        }
    }
}

fn descend<'a>(nodes: &'a [Category], handle: &Handle, path: &mut Vec<&'a Category>) -> bool {
    for node in nodes {
        path.push(node);
        if &node.handle == handle || descend(&node.children, handle, path) {
            return true;
        }
        path.pop();
    }
    false
}

#[cfg(test)]
mod tests;
