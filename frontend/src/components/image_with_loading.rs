use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageWithLoadingProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub container_class: Classes,
    /// Fired when the browser cannot load `src`.
    #[prop_or_default]
    pub onfail: Option<Callback<()>>,
}

/// Image with a pulsing placeholder until the file has loaded.
#[function_component(ImageWithLoading)]
pub fn image_with_loading(props: &ImageWithLoadingProps) -> Html {
    let image_loaded = use_state(|| false);

    {
        let image_loaded = image_loaded.clone();
        use_effect_with(props.src.clone(), move |_| {
            image_loaded.set(false);
        });
    }

    let on_image_load = {
        let image_loaded = image_loaded.clone();
        Callback::from(move |_: Event| image_loaded.set(true))
    };
    let on_image_error = {
        let image_loaded = image_loaded.clone();
        let onfail = props.onfail.clone();
        Callback::from(move |_: Event| {
            image_loaded.set(true);
            if let Some(onfail) = onfail.as_ref() {
                onfail.emit(());
            }
        })
    };

    let container_classes = classes!(
        props.container_class.clone(),
        "relative",
        "overflow-hidden",
        if !*image_loaded { "bg-gray-900" } else { "" }
    );

    let image_classes = classes!(
        props.class.clone(),
        "transition-opacity",
        "duration-500",
        if *image_loaded { "opacity-100" } else { "opacity-0" }
    );

    html! {
        <div class={container_classes}>
            {
                if !*image_loaded {
                    html! {
                        <div class={classes!(
                            "absolute",
                            "inset-0",
                            "bg-gradient-to-br",
                            "from-gray-800",
                            "to-gray-900",
                            "animate-pulse",
                            "pointer-events-none"
                        )} />
                    }
                } else {
                    html! {}
                }
            }
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                class={image_classes}
                style="max-height: 60vh;"
                decoding="async"
                onload={on_image_load}
                onerror={on_image_error}
            />
        </div>
    }
}
