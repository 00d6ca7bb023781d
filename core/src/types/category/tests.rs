use super::*;

mod common {
    use super::*;

    pub(super) fn handle(s: &str) -> Handle {
        Handle::parse(s).unwrap()
    }

    pub(super) fn node(id: &str, name: &str, slug: &str, parent: Option<&str>) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            handle: handle(slug),
            description: None,
            parent_id: parent.map(str::to_string),
            children: vec![],
        }
    }

    pub(super) fn tree() -> CategoryTree {
        let mut clothing = node("pcat_1", "Clothing", "clothing", None);
        clothing.children = vec![
            node("pcat_5", "Dresses", "dresses", Some("pcat_1")),
            node("pcat_6", "Cardigans", "cardigans", Some("pcat_1")),
        ];
        let accessories = node("pcat_2", "Accessories", "accessories", None);
        // The backend also lists children at top level with a parent id.
        let dresses_flat = node("pcat_5", "Dresses", "dresses", Some("pcat_1"));

        CategoryTree::from_roots(vec![clothing, accessories, dresses_flat])
    }
}

mod from_roots {
    use super::common::*;

    #[test]
    fn test_drops_non_root_entries() {
        let tree = tree();

        let handles: Vec<&str> = tree.roots().iter().map(|c| c.handle.as_str()).collect();
        assert_eq!(handles, vec!["clothing", "accessories"]);
    }
}

mod lookup {
    use super::common::*;

    #[test]
    fn test_find_top_level_only() {
        let tree = tree();

        assert!(tree.find("clothing").is_some());
        assert!(tree.find("dresses").is_none());
    }

    #[test]
    fn test_find_child_under_parent() {
        let tree = tree();

        assert_eq!(
            tree.find_child("clothing", "dresses").map(|c| c.name.as_str()),
            Some("Dresses")
        );
        assert!(tree.find_child("accessories", "dresses").is_none());
    }

    #[test]
    fn test_resolve_route() {
        let tree = tree();

        assert_eq!(tree.resolve_route("clothing", None), Some(handle("clothing")));
        assert_eq!(
            tree.resolve_route("clothing", Some("cardigans")),
            Some(handle("cardigans"))
        );
        assert_eq!(tree.resolve_route("toys", None), None);
        assert_eq!(tree.resolve_route("clothing", Some("hats")), None);
    }

    #[test]
    fn test_label_of_nested() {
        let tree = tree();

        assert_eq!(tree.label_of(&handle("cardigans")), Some("Cardigans"));
        assert_eq!(tree.label_of(&handle("unknown")), None);
    }

    #[test]
    fn test_options_are_roots() {
        let options = tree().options();

        assert_eq!(options.len(), 2);
        assert_eq!(options[1].value, handle("accessories"));
        assert_eq!(options[1].label, "Accessories");
    }
}

mod trail {
    use super::common::*;

    #[test]
    fn test_trail_for_subcategory() {
        let trail = tree().trail(&handle("dresses"));

        let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Clothing", "Dresses"]);
    }

    #[test]
    fn test_unknown_category_omits_segment() {
        assert!(tree().trail(&handle("sewing-supplies")).is_empty());
    }
}

mod serde_shape {
    use super::*;

    #[test]
    fn test_parses_backend_payload() {
        let json = r#"[{
            "id": "pcat_1",
            "name": "Drabužiai",
            "handle": "clothing",
            "description": null,
            "parent_category_id": null,
            "category_children": [{
                "id": "pcat_5",
                "name": "Suknelės",
                "handle": "dresses",
                "description": "Rankų darbo",
                "parent_category_id": "pcat_1",
                "category_children": []
            }]
        }]"#;

        let all: Vec<Category> = serde_json::from_str(json).unwrap();
        let tree = CategoryTree::from_roots(all);

        assert_eq!(
            tree.find_child("clothing", "dresses")
                .and_then(|c| c.description.as_deref()),
            Some("Rankų darbo")
        );
    }
}
