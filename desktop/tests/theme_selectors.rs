#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The gallery and detail components toggle classes (`hidden`, `visible`,
`stage-*`, `active-stage`) that only have an effect if the shared theme in
`ui/assets/theme/main.css` styles them. A plain substring check is enough to
catch a renamed or dropped selector before it ships in a packaged build.

When renaming a selector, update the component markup and REQUIRED_SELECTORS
together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".hidden",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--ghost",
    // Viewer
    ".viewer__placeholder",
    ".viewer__placeholder--error",
    // Gallery
    ".gallery-grid",
    ".thumb {",
    ".thumb__image",
    ".thumb__label",
    // Detail
    ".detail-view",
    ".detail__header",
    ".detail__image",
    // Levels
    ".level {",
    ".level.visible",
    ".lvl-scrolly",
    ".lvl-sticky",
    ".lvl-panes",
    ".lvl-pane--gpt",
    ".lvl-pane--gemini",
    ".lvl-pane__text--missing",
    ".lvl-extra",
    ".entailment-label",
    ".entailment-comment",
    ".lvl-stage",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn every_stage_mode_is_styled() {
    for class in ["stage-split", "stage-overlap", "stage-extra"] {
        assert!(
            THEME_CSS.contains(&format!(".lvl-scrolly.{class}")),
            "Stage class `{class}` has no scoped rule"
        );
    }
    assert!(THEME_CSS.contains(".active-stage"));
}
