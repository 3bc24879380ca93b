//! Site navigation assembled from catalog categories and the UI dictionary.

use crate::domain::category::Category;
use crate::domain::dictionary::LocalizedDictionary;
use crate::domain::menu::MenuItem;
use crate::domain::types::CategorySlug;
use crate::models::config::ContentConfig;
use crate::repository::{CategoryReader, DictionaryReader};

use super::{ServiceError, ServiceResult};

const MENU_SECTION: &str = "menu";
const PRODUCTS_HREF: &str = "/products";

/// Entries shown only when the dictionary provides a label for them.
const OPTIONAL_ENTRIES: [(&str, &str); 2] = [("menu.news", "/news"), ("menu.contact", "/contact")];

struct FallbackEntry {
    slug: &'static str,
    key: &'static str,
    title: &'static str,
}

struct FallbackGroup {
    slug: &'static str,
    /// Dictionary group holding `title` and one label per entry.
    group: &'static str,
    title: &'static str,
    entries: &'static [FallbackEntry],
}

/// Product groups shown before the catalog has any categories.
const FALLBACK_TREE: [FallbackGroup; 2] = [
    FallbackGroup {
        slug: "bathroom",
        group: "menu.bathroom",
        title: "Bathroom",
        entries: &[
            FallbackEntry {
                slug: "washbasin-mixers",
                key: "washbasin_mixers",
                title: "Washbasin mixers",
            },
            FallbackEntry {
                slug: "shower-systems",
                key: "shower_systems",
                title: "Shower systems",
            },
            FallbackEntry {
                slug: "bath-mixers",
                key: "bath_mixers",
                title: "Bath mixers",
            },
            FallbackEntry {
                slug: "accessories",
                key: "accessories",
                title: "Accessories",
            },
        ],
    },
    FallbackGroup {
        slug: "kitchen",
        group: "menu.kitchen",
        title: "Kitchen",
        entries: &[
            FallbackEntry {
                slug: "kitchen-mixers",
                key: "kitchen_mixers",
                title: "Kitchen mixers",
            },
            FallbackEntry {
                slug: "sinks",
                key: "sinks",
                title: "Sinks",
            },
            FallbackEntry {
                slug: "accessories",
                key: "accessories",
                title: "Accessories",
            },
        ],
    },
];

/// Slugs are stored as entered, so every link percent-encodes them.
fn category_href(slug: &str) -> String {
    format!("{PRODUCTS_HREF}/{}", urlencoding::encode(slug))
}

fn subcategory_href(parent: &str, child: &str) -> String {
    format!(
        "{PRODUCTS_HREF}/{}?subcategory={}",
        urlencoding::encode(parent),
        urlencoding::encode(child)
    )
}

fn fallback_tree(dictionary: &LocalizedDictionary) -> Vec<MenuItem> {
    FALLBACK_TREE
        .iter()
        .map(|group| {
            let children = group
                .entries
                .iter()
                .map(|entry| {
                    let key = format!("{}.{}", group.group, entry.key);
                    let title = dictionary.text_or(&key, entry.title);
                    MenuItem::link(title, subcategory_href(group.slug, entry.slug))
                })
                .collect();
            let title = dictionary.text_or(&format!("{}.title", group.group), group.title);
            MenuItem::link(title, category_href(group.slug)).with_children(children)
        })
        .collect()
}

fn leaf(parent: &CategorySlug, child: &Category) -> MenuItem {
    MenuItem::link(child.name.as_str(), subcategory_href(parent, &child.slug))
}

/// Two-level tree of root categories and their direct children.
///
/// Siblings are ordered by `order`; the sort is stable so equal values keep
/// fetch order. Children whose parent is not a root are left out.
fn category_tree(categories: &[Category]) -> Vec<MenuItem> {
    let mut roots: Vec<&Category> = categories.iter().filter(|c| c.is_root()).collect();
    roots.sort_by_key(|c| c.order);

    roots
        .into_iter()
        .map(|root| {
            let mut children: Vec<&Category> = categories
                .iter()
                .filter(|c| c.parent_id == Some(root.id))
                .collect();
            children.sort_by_key(|c| c.order);

            let children = children
                .into_iter()
                .map(|child| leaf(&root.slug, child))
                .collect();
            MenuItem::link(root.name.as_str(), category_href(&root.slug)).with_children(children)
        })
        .collect()
}

/// Build the top-level navigation for one locale.
///
/// Returns an empty menu when the dictionary or its `menu` section is absent.
/// Otherwise the menu starts with Products, Collections and About; News and
/// Contact follow when the dictionary labels them. Products lists the
/// category tree, or the static Bathroom/Kitchen tree when no category can be
/// placed. Missing labels fall back to English defaults; this never fails.
pub fn build_menu(
    dictionary: Option<&LocalizedDictionary>,
    categories: &[Category],
) -> Vec<MenuItem> {
    let Some(dictionary) = dictionary.filter(|d| d.has_section(MENU_SECTION)) else {
        return Vec::new();
    };

    let mut products = category_tree(categories);
    if products.is_empty() {
        if !categories.is_empty() {
            log::debug!(
                "None of {} categories has a root, using the fallback menu",
                categories.len()
            );
        }
        products = fallback_tree(dictionary);
    }

    let mut menu = vec![
        MenuItem::link(dictionary.text_or("menu.products", "Products"), PRODUCTS_HREF)
            .with_children(products),
        MenuItem::link(
            dictionary.text_or("menu.collections", "Collections"),
            "/collections",
        ),
        MenuItem::link(dictionary.text_or("menu.about", "About"), "/about"),
    ];
    menu.extend(
        OPTIONAL_ENTRIES
            .iter()
            .filter_map(|(key, href)| {
                dictionary
                    .text(key)
                    .map(|title| MenuItem::link(title, *href))
            }),
    );
    menu
}

/// Build the navigation for the locale requested by the client.
///
/// The locale is resolved against the configured supported locales before
/// categories and the dictionary are fetched.
pub fn show_menu<R, D>(
    requested_locale: Option<&str>,
    config: &ContentConfig,
    repo: &R,
    dictionaries: &D,
) -> ServiceResult<Vec<MenuItem>>
where
    R: CategoryReader,
    D: DictionaryReader,
{
    let locale = config.resolve_locale(requested_locale);

    let dictionary = match dictionaries.load_dictionary(&locale) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            log::error!("Failed to load dictionary for {locale}: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if dictionary.is_none() {
        log::warn!("No dictionary published for {locale}");
    }

    match repo.list_categories(&locale) {
        Ok(categories) => Ok(build_menu(dictionary.as_ref(), &categories)),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CategoryId, CategoryName, LangCode};
    use crate::repository::test::TestRepository;
    use serde_json::json;
    use std::path::PathBuf;

    fn category(id: i32, name: &str, parent_id: Option<i32>, order: i32) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            slug: CategorySlug::new(name.to_lowercase()).unwrap(),
            parent_id: parent_id.map(|id| CategoryId::new(id).unwrap()),
            order,
            lang: LangCode::new("en").unwrap(),
        }
    }

    fn dictionary() -> LocalizedDictionary {
        LocalizedDictionary::new(json!({ "menu": { "products": "Products" } }))
    }

    fn sample_config() -> ContentConfig {
        ContentConfig {
            database_url: ":memory:".into(),
            dictionaries_dir: PathBuf::from("locales"),
            default_locale: LangCode::new("en").unwrap(),
            supported_locales: vec![LangCode::new("en").unwrap(), LangCode::new("ru").unwrap()],
        }
    }

    fn titles(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn missing_dictionary_yields_empty_menu() {
        assert!(build_menu(None, &[category(1, "Bath", None, 0)]).is_empty());
    }

    #[test]
    fn dictionary_without_menu_section_yields_empty_menu() {
        let dict = LocalizedDictionary::new(json!({ "footer": { "about": "About" } }));
        assert!(build_menu(Some(&dict), &[]).is_empty());
    }

    #[test]
    fn builds_two_level_tree_from_categories() {
        let categories = vec![category(1, "Bath", None, 0), category(2, "Mixers", Some(1), 0)];

        let menu = build_menu(Some(&dictionary()), &categories);

        assert_eq!(titles(&menu), vec!["Products", "Collections", "About"]);
        let products = &menu[0];
        assert_eq!(products.href.as_deref(), Some("/products"));
        assert_eq!(products.children.len(), 1);
        let bath = &products.children[0];
        assert_eq!(bath.title, "Bath");
        assert_eq!(bath.href.as_deref(), Some("/products/bath"));
        assert_eq!(
            bath.children,
            vec![MenuItem::link("Mixers", "/products/bath?subcategory=mixers")]
        );
    }

    #[test]
    fn unusual_slugs_are_encoded_in_links() {
        let mut bath = category(1, "Bath", None, 0);
        bath.slug = CategorySlug::new("bath & spa").unwrap();
        let mut mixers = category(2, "Wall Mixers", Some(1), 0);
        mixers.slug = CategorySlug::new("wall mixers").unwrap();

        let menu = build_menu(Some(&dictionary()), &[bath, mixers]);

        let bath = &menu[0].children[0];
        assert_eq!(bath.href.as_deref(), Some("/products/bath%20%26%20spa"));
        assert_eq!(
            bath.children[0].href.as_deref(),
            Some("/products/bath%20%26%20spa?subcategory=wall%20mixers")
        );
    }

    #[test]
    fn empty_catalog_uses_fallback_tree() {
        let menu = build_menu(Some(&dictionary()), &[]);

        let products = &menu[0].children;
        assert_eq!(titles(products), vec!["Bathroom", "Kitchen"]);
        assert_eq!(products[0].href.as_deref(), Some("/products/bathroom"));
        assert_eq!(
            products[1].children[0].href.as_deref(),
            Some("/products/kitchen?subcategory=kitchen-mixers")
        );
    }

    #[test]
    fn fallback_labels_come_from_dictionary() {
        let dict = LocalizedDictionary::new(json!({
            "menu": {
                "products": "Продукция",
                "bathroom": { "title": "Ванная", "shower_systems": "Душевые системы" },
                "kitchen": "not a group"
            }
        }));

        let menu = build_menu(Some(&dict), &[]);

        let bathroom = &menu[0].children[0];
        assert_eq!(bathroom.title, "Ванная");
        assert_eq!(bathroom.children[1].title, "Душевые системы");
        assert_eq!(bathroom.children[0].title, "Washbasin mixers");
        assert_eq!(menu[0].children[1].title, "Kitchen");
    }

    #[test]
    fn roots_without_children_have_empty_child_lists() {
        let categories = vec![category(1, "Bath", None, 1), category(2, "Kitchen", None, 0)];

        let menu = build_menu(Some(&dictionary()), &categories);

        let products = &menu[0].children;
        assert_eq!(titles(products), vec!["Kitchen", "Bath"]);
        assert!(products.iter().all(|item| item.children.is_empty()));
        let value = serde_json::to_value(&products[0]).unwrap();
        assert_eq!(value["children"], json!([]));
    }

    #[test]
    fn equal_order_keeps_fetch_order() {
        let categories = vec![
            category(3, "Zeta", None, 0),
            category(1, "Alpha", None, 0),
            category(2, "Mid", None, 0),
            category(4, "Second", Some(2), 5),
            category(5, "First", Some(2), 5),
        ];

        let menu = build_menu(Some(&dictionary()), &categories);

        let products = &menu[0].children;
        assert_eq!(titles(products), vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(titles(&products[2].children), vec!["Second", "First"]);
    }

    #[test]
    fn children_sorted_by_order() {
        let categories = vec![
            category(1, "Bath", None, 0),
            category(2, "Showers", Some(1), 2),
            category(3, "Mixers", Some(1), 1),
        ];

        let menu = build_menu(Some(&dictionary()), &categories);

        assert_eq!(titles(&menu[0].children[0].children), vec!["Mixers", "Showers"]);
    }

    // Orphaned children are dropped rather than promoted to roots.
    #[test]
    fn child_with_unknown_parent_is_dropped() {
        let categories = vec![
            category(1, "Bath", None, 0),
            category(2, "Orphan", Some(99), 0),
            category(3, "Mixers", Some(1), 0),
            category(4, "Cartridges", Some(3), 0),
        ];

        let menu = build_menu(Some(&dictionary()), &categories);

        let products = &menu[0].children;
        assert_eq!(titles(products), vec!["Bath"]);
        assert_eq!(titles(&products[0].children), vec!["Mixers"]);
        assert!(products[0].children[0].children.is_empty());
    }

    #[test]
    fn only_orphans_fall_back_to_static_tree() {
        let categories = vec![category(2, "Orphan", Some(99), 0)];

        let menu = build_menu(Some(&dictionary()), &categories);

        assert_eq!(titles(&menu[0].children), vec!["Bathroom", "Kitchen"]);
    }

    #[test]
    fn optional_entries_require_labels() {
        let dict = LocalizedDictionary::new(json!({
            "menu": { "contact": "Contact us", "about": "Brand" }
        }));

        let menu = build_menu(Some(&dict), &[]);

        assert_eq!(
            titles(&menu),
            vec!["Products", "Collections", "Brand", "Contact us"]
        );
        assert_eq!(menu[3].href.as_deref(), Some("/contact"));
    }

    #[test]
    fn show_menu_uses_resolved_locale() {
        let mut ru_bath = category(1, "Ванная", None, 0);
        ru_bath.slug = CategorySlug::new("vannaya").unwrap();
        ru_bath.lang = LangCode::new("ru").unwrap();
        let ru_dictionary = LocalizedDictionary::new(json!({ "menu": { "products": "Продукция" } }));
        let repo = TestRepository::new(vec![category(2, "Bath", None, 0), ru_bath], vec![])
            .with_dictionary("ru", ru_dictionary);

        let menu = show_menu(Some("ru-RU"), &sample_config(), &repo, &repo).unwrap();

        assert_eq!(menu[0].title, "Продукция");
        assert_eq!(titles(&menu[0].children), vec!["Ванная"]);
    }

    #[test]
    fn show_menu_without_dictionary_is_empty() {
        let repo = TestRepository::new(vec![category(1, "Bath", None, 0)], vec![]);

        let menu = show_menu(Some("fr"), &sample_config(), &repo, &repo).unwrap();

        assert!(menu.is_empty());
    }

    #[test]
    fn show_menu_reports_fetch_failures() {
        let repo = TestRepository::default()
            .with_dictionary("en", dictionary())
            .failing_categories();

        let err = show_menu(None, &sample_config(), &repo, &repo).unwrap_err();

        assert_eq!(err, ServiceError::Internal);
    }
}
