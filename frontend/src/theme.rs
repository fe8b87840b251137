//! Design tokens and the Tailwind configuration built from them.

use serde::{Serialize, Serializer};

pub type Tokens = Vec<(&'static str, &'static str)>;

fn as_map<S: Serializer>(tokens: &Tokens, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(tokens.iter().map(|(k, v)| (k, v)))
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TailwindConfig {
    /// Files scanned for utility classes to keep.
    pub content: Vec<&'static str>,
    pub theme: Theme,
    pub plugins: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Theme {
    pub extend: ThemeExtension,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtension {
    #[serde(serialize_with = "as_map")]
    pub colors: Tokens,
    #[serde(serialize_with = "as_map")]
    pub spacing: Tokens,
    #[serde(serialize_with = "as_map")]
    pub max_width: Tokens,
    #[serde(serialize_with = "as_map")]
    pub blur: Tokens,
    #[serde(serialize_with = "as_map")]
    pub background_image: Tokens,
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self {
            content: vec!["./templates/**/*.html", "./static/**/*.js"],
            theme: Theme {
                extend: ThemeExtension {
                    colors: vec![
                        ("primary", "#99E39E"),
                        ("secondary", "#1DC8CD"),
                        ("midnight_text", "#263238"),
                        ("muted", "#d8dbdb"),
                        ("error", "#CF3127"),
                        ("warning", "#F7931A"),
                        ("light_grey", "#505050"),
                        ("grey", "#F5F7FA"),
                        ("dark_grey", "#1E2229"),
                        ("border", "#E1E1E1"),
                        ("success", "#3cd278"),
                        ("section", "#737373"),
                        ("darkmode", "#000510"),
                        ("darklight", "#0c372a"),
                        ("dark_border", "#959595"),
                        ("tealGreen", "#477E70"),
                        ("charcoalGray", "#666C78"),
                        ("deepSlate", "#282C36"),
                        ("slateGray", "#2F3543"),
                    ],
                    spacing: vec![
                        ("6.25", "6.25rem"),
                        ("8.5", "8.5rem"),
                        ("25", "35.625rem"),
                        ("29", "28rem"),
                        ("45", "45rem"),
                        ("50", "50rem"),
                        ("51", "54.375rem"),
                        ("85", "21rem"),
                        ("94", "22.5rem"),
                        ("120", "120rem"),
                    ],
                    max_width: vec![("screen-xl", "75rem"), ("screen-2xl", "83.75rem")],
                    blur: vec![("220", "220px"), ("400", "400px")],
                    background_image: vec![(
                        "gradient-radial",
                        "radial-gradient(var(--tw-gradient-stops))",
                    )],
                },
            },
            plugins: Vec::new(),
        }
    }
}

/// `tealGreen` and `dark_grey` become `teal-green` and `dark-grey`.
fn kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c == '_' {
            out.push('-');
        } else if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

impl TailwindConfig {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn color(&self, name: &str) -> Option<&'static str> {
        self.theme
            .extend
            .colors
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// The palette as `--color-*` custom properties, one per line.
    pub fn css_variables(&self) -> String {
        self.theme
            .extend
            .colors
            .iter()
            .map(|(name, value)| format!("--color-{}: {};\n", kebab(name), value))
            .collect()
    }
}
