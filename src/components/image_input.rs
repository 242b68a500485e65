use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use crate::utils::constants::IMAGE_INPUT_ACCEPT;

#[derive(Properties, PartialEq)]
pub struct ImageFileInputProps {
    pub on_file: Callback<File>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Botón con un <input type="file"> oculto filtrado a .jpg/.jpeg/.png
#[function_component(ImageFileInput)]
pub fn image_file_input(props: &ImageFileInputProps) -> Html {
    let onchange = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file.emit(file);
            }
            // Permite volver a elegir el mismo archivo
            input.set_value("");
        })
    };

    html! {
        <label class={classes!("image-input", props.class.clone())}>
            {props.children.clone()}
            <input
                type="file"
                accept={IMAGE_INPUT_ACCEPT}
                style="display: none"
                disabled={props.disabled}
                {onchange}
            />
        </label>
    }
}
