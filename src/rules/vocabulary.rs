//! Process-wide constants consulted by individual rules.

/// Destination URL substrings that must each appear among the footer links.
pub const REQUIRED_FOOTER_LINKS: [&str; 3] = [
    "uiowa.edu/privacy",
    "opsmanual.uiowa.edu/community-policies/nondiscrimination-statement",
    "accessibility.uiowa.edu",
];

/// Recognized ARIA role vocabulary.
pub const VALID_ROLES: &[&str] = &[
    "alert",
    "alertdialog",
    "application",
    "article",
    "banner",
    "button",
    "cell",
    "checkbox",
    "columnheader",
    "combobox",
    "complementary",
    "contentinfo",
    "definition",
    "dialog",
    "directory",
    "document",
    "feed",
    "figure",
    "form",
    "grid",
    "gridcell",
    "group",
    "heading",
    "img",
    "link",
    "list",
    "listbox",
    "listitem",
    "log",
    "main",
    "marquee",
    "math",
    "menu",
    "menubar",
    "menuitem",
    "menuitemcheckbox",
    "menuitemradio",
    "navigation",
    "none",
    "note",
    "option",
    "presentation",
    "progressbar",
    "radio",
    "radiogroup",
    "region",
    "row",
    "rowgroup",
    "rowheader",
    "scrollbar",
    "search",
    "searchbox",
    "separator",
    "slider",
    "spinbutton",
    "status",
    "switch",
    "tab",
    "table",
    "tablist",
    "tabpanel",
    "term",
    "textbox",
    "timer",
    "toolbar",
    "tooltip",
    "tree",
    "treegrid",
    "treeitem",
];

/// A structural page region that must exist exactly in this form:
/// either the native element or an element carrying the landmark role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    /// Name substituted into the E004 message.
    pub label: &'static str,
    pub element: &'static str,
    pub role: &'static str,
}

pub const LANDMARKS: [Landmark; 3] = [
    Landmark {
        label: "header/banner",
        element: "header",
        role: "banner",
    },
    Landmark {
        label: "main",
        element: "main",
        role: "main",
    },
    Landmark {
        label: "footer/contentinfo",
        element: "footer",
        role: "contentinfo",
    },
];
