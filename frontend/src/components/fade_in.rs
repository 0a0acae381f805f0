use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -60px 0px";

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Hidden until it first scrolls into view, then fades up once.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let on_intersect = Closure::wrap(Box::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if entry.is_intersecting() {
                                let target = entry.target();
                                let _ = target.class_list().add_1("visible");
                                observer.unobserve(&target);
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(Array, IntersectionObserver)>);

                let mut options = IntersectionObserverInit::new();
                options.threshold(&JsValue::from_f64(THRESHOLD));
                options.root_margin(ROOT_MARGIN);

                let observer = IntersectionObserver::new_with_options(
                    on_intersect.as_ref().unchecked_ref(),
                    &options,
                )
                .ok();

                if let (Some(observer), Some(element)) = (&observer, node.cast::<Element>()) {
                    observer.observe(&element);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(on_intersect);
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("fade-in", props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}
