use crate::config::Template;

/// Module whose `CustomThemeTypings` interface the augmentation template extends.
pub const AUGMENTED_MODULE: &str = "@chakra-ui/styled-system";

const REGENERATE_HINT: &str = "// regenerate by running\n// theme-typings tokens path/to/your/theme.json";

impl Template {
    /// Wrap an interface body in this template's file text.
    pub fn render(self, body: &str) -> String {
        match self {
            Template::Default => format!(
                "{REGENERATE_HINT}\n\
                 import type {{ BaseThemeTypings }} from \"./shared.types\"\n\
                 \n\
                 export interface ThemeTypings extends BaseThemeTypings {{\n\
                 {}\
                 }}\n",
                indent(body, 2),
            ),
            Template::Augmentation => format!(
                "{REGENERATE_HINT} --template augmentation --out path/to/this/file\n\
                 import type {{ BaseThemeTypings }} from \"{AUGMENTED_MODULE}\"\n\
                 \n\
                 declare module \"{AUGMENTED_MODULE}\" {{\n\
                 \x20 export interface CustomThemeTypings extends BaseThemeTypings {{\n\
                 {}\
                 \x20 }}\n\
                 }}\n",
                indent(body, 4),
            ),
        }
    }
}

/// Indent every non-blank line by `width` spaces, each ending in a newline.
fn indent(body: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let mut out = String::with_capacity(body.len() + body.lines().count() * (width + 1));
    for line in body.lines() {
        if !line.trim().is_empty() {
            out.push_str(&pad);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template() {
        let text = Template::Default.render("colors: \"red\";");
        assert_eq!(
            text,
            "// regenerate by running\n\
             // theme-typings tokens path/to/your/theme.json\n\
             import type { BaseThemeTypings } from \"./shared.types\"\n\
             \n\
             export interface ThemeTypings extends BaseThemeTypings {\n\
             \x20 colors: \"red\";\n\
             }\n"
        );
    }

    #[test]
    fn augmentation_template() {
        let text = Template::Augmentation.render("a: never;\nb: never;");
        assert!(text.contains("declare module \"@chakra-ui/styled-system\" {\n"));
        assert!(text.contains(
            "  export interface CustomThemeTypings extends BaseThemeTypings {\n    a: never;\n    b: never;\n  }\n}\n"
        ));
        assert!(text.contains("--template augmentation"));
    }

    #[test]
    fn indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb", 2), "  a\n\n  b\n");
    }
}
