// ============================================================================
// PRODUCT IMAGES - Galería del producto + puente hacia la sesión de prueba
// ============================================================================

use yew::prelude::*;
use crate::hooks::use_session_context;
use crate::models::ProductImage;

#[derive(Properties, PartialEq)]
pub struct ProductImagesProps {
    #[prop_or_default]
    pub items: Vec<ProductImage>,
}

#[function_component(ProductImages)]
pub fn product_images(props: &ProductImagesProps) -> Html {
    let session = use_session_context();
    let selected = use_state(|| 0usize);

    // Nueva galería: la primera imagen es la principal y se registra la lista
    {
        let selected = selected.clone();
        let register = session.register_product_images.clone();
        use_effect_with(props.items.clone(), move |items| {
            selected.set(0);
            if !items.is_empty() {
                register.emit(items.clone());
            }
            || ()
        });
    }

    let main_url = props
        .items
        .get(*selected)
        .and_then(|item| item.url())
        .map(str::to_string);

    let thumbnails = props.items.iter().enumerate().map(|(i, item)| {
        let onclick = {
            let selected = selected.clone();
            let select = session.select_product_image.clone();
            let url = item.url().map(str::to_string);
            Callback::from(move |_: MouseEvent| {
                selected.set(i);
                if let Some(url) = url.clone() {
                    select.emit(url);
                }
            })
        };
        let class = if *selected == i { "thumbnail selected" } else { "thumbnail" };

        html! {
            <div key={i} {class} {onclick}>
                {match item.url() {
                    Some(url) => html! {
                        <img
                            src={url.to_string()}
                            alt={format!("Product thumbnail {}", i + 1)}
                            data-product-index={i.to_string()}
                        />
                    },
                    None => html! { <div class="image-placeholder small"><p>{"No image"}</p></div> },
                }}
            </div>
        }
    });

    html! {
        <div class="product-images">
            <div class="product-image">
                {match main_url {
                    Some(url) => html! { <img id="main-product-image" src={url} alt="Product" /> },
                    None => html! { <div class="image-placeholder"><p>{"No image available"}</p></div> },
                }}
            </div>
            <div class="thumbnail-strip">
                {for thumbnails}
            </div>
        </div>
    }
}
