use yew::prelude::*;

/// Color theme of a stat card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatColor {
    #[default]
    Blue,
    Emerald,
    Violet,
    Amber,
    Pink,
}

impl StatColor {
    /// Resolves a color key. Unknown keys get the blue theme.
    pub fn from_key(key: &str) -> Self {
        match key {
            "emerald" => StatColor::Emerald,
            "violet" => StatColor::Violet,
            "amber" => StatColor::Amber,
            "pink" => StatColor::Pink,
            "blue" => StatColor::Blue,
            other => {
                log::warn!("Unknown stat card color '{}', using blue", other);
                StatColor::Blue
            }
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            StatColor::Blue => "from-blue-500/10 to-blue-500/0 text-blue-400 border-blue-500/20",
            StatColor::Emerald => "from-emerald-500/10 to-emerald-500/0 text-emerald-400 border-emerald-500/20",
            StatColor::Violet => "from-violet-500/10 to-violet-500/0 text-violet-400 border-violet-500/20",
            StatColor::Amber => "from-amber-500/10 to-amber-500/0 text-amber-400 border-amber-500/20",
            StatColor::Pink => "from-pink-500/10 to-pink-500/0 text-pink-400 border-pink-500/20",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    /// Already formatted by the caller
    pub value: AttrValue,
    /// Font Awesome icon class
    pub icon: AttrValue,
    /// One of blue, emerald, violet, amber, pink
    #[prop_or(AttrValue::Static("blue"))]
    pub color: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let color = StatColor::from_key(&props.color);

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-2xl", "border", "bg-slate-900/60", "p-5", "backdrop-blur-sm", color.classes())}>
            <div class="absolute inset-0 bg-gradient-to-br pointer-events-none" />
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-slate-300 text-sm">{&props.title}</p>
                    <p class="text-3xl font-bold text-white mt-1">{&props.value}</p>
                </div>
                <div class="p-3 rounded-xl bg-slate-800/80 border border-white/5">
                    <i class={format!("{} text-xl", props.icon)}></i>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_color_keys() {
        assert_eq!(StatColor::from_key("emerald"), StatColor::Emerald);
        assert_eq!(StatColor::from_key("pink"), StatColor::Pink);
        assert!(StatColor::Violet.classes().contains("text-violet-400"));
    }

    #[test]
    fn test_unknown_color_falls_back_to_blue() {
        assert_eq!(StatColor::from_key("chartreuse"), StatColor::Blue);
        assert_eq!(StatColor::from_key(""), StatColor::default());
    }
}
