use yew::prelude::*;
use crate::components::{ProductImages, TryOut};
use crate::hooks::TryOnSessionProvider;
use crate::models::ProductImage;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Galería del producto que se muestra
    #[prop_or_else(demo_product_images)]
    pub product_images: Vec<ProductImage>,
}

impl Default for AppProps {
    fn default() -> Self {
        Self {
            product_images: demo_product_images(),
        }
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <TryOnSessionProvider>
            <main class="product-page">
                <ProductImages items={props.product_images.clone()} />
                <TryOut />
            </main>
        </TryOnSessionProvider>
    }
}

/// Galería de demostración (el catálogo real lo inyecta la página que monta la app)
fn demo_product_images() -> Vec<ProductImage> {
    ["/assets/products/tee-front.png", "/assets/products/tee-back.png", "/assets/products/tee-detail.png"]
        .into_iter()
        .map(ProductImage::new)
        .collect()
}
