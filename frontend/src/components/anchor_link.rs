use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll::{anchor_target, scroll_to_section};

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after scrolling, e.g. to close the mobile menu.
    #[prop_or_default]
    pub onclick: Callback<()>,
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let after = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(id) = anchor_target(&href) {
                e.prevent_default();
                scroll_to_section(id);
            }
            after.emit(());
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
