use crate::version::Version;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VersionDisplayProps {
    #[prop_or_default]
    pub show_full: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(VersionDisplay)]
pub fn version_display(props: &VersionDisplayProps) -> Html {
    let version_text = if props.show_full {
        Version::full()
    } else {
        Version::short()
    };

    html! {
        <div class={classes!(
            "text-xs", "text-white/90", "font-mono", "select-none",
            "px-2", "py-1", "rounded", "bg-white/10",
            props.class.clone()
        )}>
            <span>{version_text}</span>
        </div>
    }
}
