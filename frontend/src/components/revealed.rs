use yew::prelude::*;

use crate::config::REVEAL_DURATION_MS;

/// Where an element slides in from while it is hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Up,
    FromLeft,
    FromRight,
}

pub fn reveal_classes(shown: bool, motion: Motion) -> Classes {
    let offset = match motion {
        Motion::Up => "reveal-up",
        Motion::FromLeft => "reveal-left",
        Motion::FromRight => "reveal-right",
    };
    classes!("reveal", offset, shown.then_some("is-shown"))
}

pub fn reveal_style(delay_ms: u32) -> String {
    format!(
        "transition-duration: {}ms; transition-delay: {}ms;",
        REVEAL_DURATION_MS, delay_ms
    )
}

#[derive(Properties, PartialEq)]
pub struct RevealedProps {
    pub shown: bool,
    #[prop_or_default]
    pub motion: Motion,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in a block that fades and slides into place once `shown` turns true.
#[function_component(Revealed)]
pub fn revealed(props: &RevealedProps) -> Html {
    let mut class = reveal_classes(props.shown, props.motion);
    class.extend(props.class.clone());

    html! {
        <div class={class} style={reveal_style(props.delay_ms)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_state_keeps_offset_only() {
        let class = reveal_classes(false, Motion::Up);
        assert!(class.contains("reveal"));
        assert!(class.contains("reveal-up"));
        assert!(!class.contains("is-shown"));
    }

    #[test]
    fn shown_state_adds_resting_class() {
        let class = reveal_classes(true, Motion::FromLeft);
        assert_eq!(class.to_string(), "reveal reveal-left is-shown");
    }

    #[test]
    fn style_carries_duration_and_delay() {
        assert_eq!(
            reveal_style(350),
            "transition-duration: 1000ms; transition-delay: 350ms;"
        );
    }
}
