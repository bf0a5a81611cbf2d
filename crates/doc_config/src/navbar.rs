// crates/doc_config/src/navbar.rs

use serde::{Deserialize, Serialize};

/// One entry of the secondary navigation bar.
///
/// Either a reference to a generated page (`annotated`, `files`, a class
/// name ...) with an optional title override, or a raw HTML link to
/// something outside the generated docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavbarLink {
    Page(PageLink),
    Html(HtmlLink),
}

/// Link to a generated page. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub page: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavbarLink>,
}

/// Raw HTML link. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HtmlLink {
    pub html: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavbarLink>,
}

impl NavbarLink {
    pub fn page(page: impl Into<String>) -> Self {
        NavbarLink::Page(PageLink {
            title: None,
            page: page.into(),
            children: Vec::new(),
        })
    }

    pub fn html(html: impl Into<String>) -> Self {
        NavbarLink::Html(HtmlLink {
            html: html.into(),
            children: Vec::new(),
        })
    }

    pub fn children(&self) -> &[NavbarLink] {
        match self {
            NavbarLink::Page(link) => &link.children,
            NavbarLink::Html(link) => &link.children,
        }
    }
}

pub(crate) fn default_links() -> Vec<NavbarLink> {
    vec![
        NavbarLink::page("annotated"),
        NavbarLink::page("files"),
        NavbarLink::html(
            "<a href=\"../../../../magnum-bindings/build/doc/python/index.html\">Python API</a>",
        ),
    ]
}
