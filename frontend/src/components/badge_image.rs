use web_sys::HtmlImageElement;
use yew::prelude::*;

/// Set on the `<img>` once it has been pointed at the placeholder.
const FALLBACK_ATTR: &str = "data-fallback";

/// Where a failed image should go next: the placeholder on the first error,
/// nowhere once it already fell back.
fn fallback_src<'a>(already_fell_back: bool, placeholder: &'a str) -> Option<&'a str> {
    (!already_fell_back).then_some(placeholder)
}

/// Badge artwork that swaps itself for the placeholder when the hosted image
/// fails to load.
pub fn badge_image(src: &str, alt: &str, placeholder: &str, class: &'static str) -> Html {
    let onerror = {
        let placeholder = placeholder.to_string();
        Callback::from(move |e: Event| {
            let img: HtmlImageElement = e.target_unchecked_into();
            if let Some(next) = fallback_src(img.has_attribute(FALLBACK_ATTR), &placeholder) {
                img.set_attribute(FALLBACK_ATTR, "").ok();
                img.set_alt("Failed to load badge image");
                img.set_src(next);
            }
        })
    };

    html! {
        <img src={src.to_string()} alt={alt.to_string()} class={class} loading="lazy" {onerror} />
    }
}
