use super::{Category, Rule, RuleId, Severity};

const fn page(
    id: RuleId,
    name: &'static str,
    template: &'static str,
    description: &'static str,
) -> Rule {
    Rule {
        id,
        category: Category::PageStructure,
        name,
        template,
        severity: Severity::Error,
        description,
    }
}

const fn style(
    id: RuleId,
    name: &'static str,
    template: &'static str,
    description: &'static str,
) -> Rule {
    Rule {
        id,
        category: Category::StyleToken,
        name,
        template,
        severity: Severity::Error,
        description,
    }
}

const fn component(
    id: RuleId,
    name: &'static str,
    template: &'static str,
    severity: Severity,
    description: &'static str,
) -> Rule {
    Rule {
        id,
        category: Category::ComponentPattern,
        name,
        template,
        severity,
        description,
    }
}

/// Every rule, in evaluation order. Index `i` holds the `RuleId` whose
/// discriminant is `i`.
pub static CATALOG: [Rule; 25] = [
    page(
        RuleId::E001,
        "MissingLang",
        "Missing lang attribute on <html>",
        "The document root declares no language",
    ),
    page(
        RuleId::E002,
        "MissingSkipLink",
        "Missing skip link",
        "No \"skip to content\" link targets #main-content",
    ),
    page(
        RuleId::E003,
        "MissingSkipLinkTarget",
        "Missing skip link target (#main-content)",
        "No element has id=\"main-content\"",
    ),
    page(
        RuleId::E004,
        "MissingLandmark",
        "Missing required landmark: {landmark}",
        "A banner, main or contentinfo landmark is absent (once per missing landmark)",
    ),
    page(
        RuleId::E005,
        "MissingBrandBar",
        "Missing BrandBar component",
        "The brand identity bar (.brand-bar) is absent",
    ),
    page(
        RuleId::E006,
        "MissingBrandFooter",
        "Missing BrandFooter component",
        "The brand identity footer (.brand-footer) is absent",
    ),
    page(
        RuleId::E007,
        "MissingFooterLink",
        "Missing required footer link: {link}",
        "A required legal/policy footer link is absent (once per missing link)",
    ),
    page(
        RuleId::E008,
        "MissingAccessibilityHelpLink",
        "Missing accessibility help link",
        "No link leads to the \"report an accessibility issue\" page",
    ),
    page(
        RuleId::E009,
        "MultipleH1",
        "Multiple h1 elements found",
        "More than one first-level heading exists",
    ),
    page(
        RuleId::E010,
        "MissingH1",
        "Missing h1 element",
        "No first-level heading exists",
    ),
    page(
        RuleId::E011,
        "HeadingLevelSkipped",
        "Heading level skipped: h{from} to h{to}",
        "A heading is more than one level deeper than the heading before it",
    ),
    page(
        RuleId::E012,
        "DuplicateId",
        "Duplicate ID: {id}",
        "An id value is reused (once per element after the first)",
    ),
    page(
        RuleId::E013,
        "EmptyLinkText",
        "Empty link text",
        "A link has no text, label, labelled image or visually-hidden text",
    ),
    page(
        RuleId::E014,
        "ImageMissingAlt",
        "Image missing alt attribute",
        "An image has no alt attribute and is not marked decorative",
    ),
    page(
        RuleId::E015,
        "TableMissingHeaders",
        "Table missing headers",
        "A data table has no header cells",
    ),
    page(
        RuleId::E016,
        "MediaMissingCaptions",
        "Media embed missing transcript/captions metadata",
        "An audio/video embed has no caption track or transcript reference",
    ),
    page(
        RuleId::E017,
        "FormControlMissingLabel",
        "Form control missing label",
        "A form control has no label, aria-label or aria-labelledby",
    ),
    page(
        RuleId::E018,
        "ButtonMissingName",
        "Interactive element missing accessible name",
        "A button has no text, aria-label or aria-labelledby",
    ),
    style(
        RuleId::S001,
        "NonTokenColor",
        "Non-token color value detected: {value}",
        "A color is not taken from the design tokens (stylesheet analysis)",
    ),
    style(
        RuleId::S002,
        "FocusOutlineRemoved",
        "Focus outline removed without replacement",
        "A focus outline is removed without a replacement style (stylesheet analysis)",
    ),
    style(
        RuleId::S003,
        "GoldWhiteContrast",
        "Gold/white contrast violation",
        "Gold text is placed on white (stylesheet analysis)",
    ),
    component(
        RuleId::C001,
        "ClickableContainer",
        "Clickable div detected - use button or link",
        Severity::Error,
        "A div or span carries an onclick handler",
    ),
    component(
        RuleId::C002,
        "NestedInteractive",
        "Nested interactive elements",
        Severity::Error,
        "A link or button is nested inside another link or button",
    ),
    component(
        RuleId::C003,
        "InvalidRole",
        "Invalid ARIA attribute: {attr}",
        Severity::Error,
        "A role attribute value is not a recognized ARIA role",
    ),
    component(
        RuleId::C004,
        "MissingAriaControls",
        "Missing required ARIA attribute: {attr}",
        Severity::Warning,
        "An element with aria-expanded has no aria-controls",
    ),
];
