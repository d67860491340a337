//! End-to-end generation from a realistic theme fixture.

use serde_json::Value;
use theme_typings_core::{
    NoopFormatter, Template, TypingsOptions, create_theme_typings_interface, default_categories,
    extract_theme_typings,
};

fn fixture() -> Value {
    serde_json::from_str(include_str!("fixtures/theme.json")).expect("fixture is valid JSON")
}

fn options() -> TypingsOptions {
    TypingsOptions {
        format: false,
        ..TypingsOptions::default()
    }
}

#[test]
fn extracts_every_section() {
    let typings = extract_theme_typings(&fixture(), &default_categories()).unwrap();
    let unions = &typings.unions;

    assert_eq!(
        unions["colors"],
        [
            "transparent",
            "black",
            "whiteAlpha.50",
            "whiteAlpha.100",
            "gray.50",
            "gray.100",
            "gray.200",
            "gray.300",
            "gray.400",
            "gray.500",
            "gray.600",
            "gray.700",
            "gray.800",
            "gray.900",
            "brand.50",
            "brand.100",
            "brand.200",
            "brand.300",
            "brand.400",
            "brand.500",
            "brand.600",
            "brand.700",
            "brand.800",
            "brand.900",
            "brand.gradient.from",
            "brand.gradient.to",
            "text",
            "surface.raised",
            "surface.sunken",
        ]
    );
    assert_eq!(unions["colorSchemes"], ["gray", "brand"]);
    assert_eq!(unions["breakpoints"], ["base", "sm", "md", "lg"]);
    assert_eq!(unions["sizes"], ["full", "container.sm", "container.md"]);
    assert_eq!(unions["space"], ["px", "-px", "1", "-1", "4", "-4"]);
    assert_eq!(unions["radii"], ["none", "sm", "full", "button"]);
    assert_eq!(unions["zIndices"], ["hide", "modal"]);
    assert_eq!(unions["textStyles"], ["heading", "caption"]);
    assert_eq!(unions["layerStyles"], ["card"]);
    assert!(unions["shadows"].is_empty());

    let components = &typings.component_types;
    assert_eq!(components.len(), 2);
    assert_eq!(components.get("Button").unwrap().sizes, ["sm", "md", "lg"]);
    assert!(components.get("Date Picker").unwrap().sizes.is_empty());
    assert!(components.get("Input").is_none());
}

#[test]
fn default_template_output() {
    let text = create_theme_typings_interface(&fixture(), &options(), &NoopFormatter).unwrap();

    assert!(text.starts_with("// regenerate by running\n"));
    assert!(text.contains("export interface ThemeTypings extends BaseThemeTypings {\n"));
    assert!(text.contains(r#"  colorSchemes: "gray" | "brand" | (string & {});"#));
    assert!(text.contains(r#"  space: "px" | "-px" | "1" | "-1" | "4" | "-4" | (string & {});"#));
    assert!(text.contains("  shadows: (string & {});"));
    assert!(text.contains("  components: {\n    Button: {\n"));
    assert!(text.contains(r#"      sizes: "sm" | "md" | "lg" | (string & {});"#));
    assert!(text.contains("    \"Date Picker\": {\n"));
    assert!(text.ends_with("}\n"));
}

#[test]
fn strict_output_has_no_fallback() {
    let options = TypingsOptions {
        strict_token_types: true,
        strict_component_types: true,
        ..options()
    };
    let text = create_theme_typings_interface(&fixture(), &options, &NoopFormatter).unwrap();
    assert!(!text.contains("(string & {})"));
    assert!(text.contains("  shadows: never;"));
    assert!(text.contains(r#"      variants: "filled";"#));
}

#[test]
fn augmentation_output() {
    let options = TypingsOptions {
        template: Template::Augmentation,
        ..options()
    };
    let text = create_theme_typings_interface(&fixture(), &options, &NoopFormatter).unwrap();
    assert!(text.contains("declare module \"@chakra-ui/styled-system\" {\n"));
    assert!(text.contains(r#"    radii: "none" | "sm" | "full" | "button" | (string & {});"#));
}

#[test]
fn generation_is_deterministic() {
    let theme = fixture();
    let first = create_theme_typings_interface(&theme, &options(), &NoopFormatter).unwrap();
    let second = create_theme_typings_interface(&theme, &options(), &NoopFormatter).unwrap();
    assert_eq!(first, second);
}

#[test]
fn category_lines_are_alphabetical() {
    let text = create_theme_typings_interface(&fixture(), &options(), &NoopFormatter).unwrap();
    let names: Vec<&str> = text
        .lines()
        .skip_while(|line| !line.starts_with("export interface"))
        .skip(1)
        .take_while(|line| !line.trim_start().starts_with("components"))
        .filter_map(|line| line.trim_start().split(':').next())
        .collect();

    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), default_categories().len() + 3);
}
