use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
    /// Gold treatment for boosted postings.
    Premium,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Premium => "premium",
        }
    }
}

/// Inline pill for statuses and labels.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "vd-badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Badge whose color comes from a free-form tone name (`blue`, `amber`,
/// `emerald`, `red`, `slate`).
#[component]
pub fn ToneBadge(#[props(into)] tone: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "vd-badge", "data-tone": tone, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premium_badge_renders_its_style() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { variant: BadgeVariant::Premium, "Premium Boost" }
        });
        assert!(html.contains("data-style=\"premium\""));
        assert!(html.contains("Premium Boost"));
    }

    #[test]
    fn tone_badge_carries_the_tone() {
        let html = dioxus_ssr::render_element(rsx! {
            ToneBadge { tone: "amber", "Review" }
        });
        assert!(html.contains("data-tone=\"amber\""));
    }
}
