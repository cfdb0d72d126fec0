use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Deserialize;

use super::context::VariableContext;
use super::placeholder::{CampaignField, LocationField, Placeholder};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").unwrap());

static CUSTOM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{custom\.([^{}]+)\}\}").unwrap());

/// What to emit for `{{custom.<key>}}` when `key` has no value.
///
/// Built-in `location.*` and `campaign.*` placeholders always fall back to an
/// empty string; only custom keys are governed by this policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedCustom {
    /// Leave the literal `{{custom.<key>}}` text in the output.
    #[default]
    Keep,
    /// Replace it with an empty string.
    Blank,
}

impl UnresolvedCustom {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnresolvedCustom::Keep => "keep",
            UnresolvedCustom::Blank => "blank",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    pub unresolved_custom: UnresolvedCustom,
}

impl Resolver {
    pub fn new(unresolved_custom: UnresolvedCustom) -> Self {
        Self { unresolved_custom }
    }

    /// Substitute every recognized placeholder in `template`.
    ///
    /// Built-in fields are replaced one field at a time, `location.*` first,
    /// then `campaign.*`; `custom.*` keys go last. A value substituted by an
    /// earlier scan is seen by the later ones, so a store name holding
    /// `{{custom.promo}}` picks up the override. Placeholders outside the
    /// recognized set are left as they are.
    pub fn resolve(&self, template: &str, ctx: &VariableContext<'_>) -> String {
        if !template.contains("{{") {
            return template.to_string();
        }
        let mut out = template.to_string();
        for field in LocationField::ALL {
            out = replace_builtin(out, Placeholder::Location(field), ctx);
        }
        for field in CampaignField::ALL {
            out = replace_builtin(out, Placeholder::Campaign(field), ctx);
        }
        if !out.contains("{{custom.") {
            return out;
        }
        CUSTOM_RE
            .replace_all(&out, |caps: &Captures<'_>| {
                match ctx.lookup(&Placeholder::Custom(&caps[1])) {
                    Some(value) => value.into_owned(),
                    None if self.unresolved_custom == UnresolvedCustom::Keep => {
                        caps[0].to_string()
                    }
                    None => String::new(),
                }
            })
            .into_owned()
    }

    /// Placeholders left in the output of [`Resolver::resolve`], as their
    /// inner `namespace.field` text, deduplicated in order.
    pub fn unresolved(&self, template: &str, ctx: &VariableContext<'_>) -> Vec<String> {
        let resolved = self.resolve(template, ctx);
        let mut out: Vec<String> = Vec::new();
        for caps in PLACEHOLDER_RE.captures_iter(&resolved) {
            let expr = &caps[1];
            if !out.iter().any(|e| e == expr) {
                out.push(expr.to_string());
            }
        }
        out
    }
}

/// Replace every `{{namespace.field}}` token for one built-in field. Missing
/// values become empty strings.
fn replace_builtin(
    text: String,
    placeholder: Placeholder<'_>,
    ctx: &VariableContext<'_>,
) -> String {
    let token = format!("{{{{{placeholder}}}}}");
    if !text.contains(&token) {
        return text;
    }
    let value = ctx.lookup(&placeholder).unwrap_or_default();
    text.replace(&token, &value)
}

/// Resolve with the default policy (missing custom keys kept literally).
pub fn resolve(template: &str, ctx: &VariableContext<'_>) -> String {
    Resolver::default().resolve(template, ctx)
}

/// Distinct recognized placeholders in `template`, in first-occurrence order.
pub fn placeholders(template: &str) -> Vec<Placeholder<'_>> {
    let mut out: Vec<Placeholder<'_>> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let Some(m) = caps.get(1) else { continue };
        if let Some(p) = Placeholder::parse(m.as_str())
            && !out.contains(&p)
        {
            out.push(p);
        }
    }
    out
}
