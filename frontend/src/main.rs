use log::{error, info};
use yew::prelude::*;

use page_effects::config::{self, EffectsConfig};
use page_effects::dom;
use page_effects::effects;
use page_effects::pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // Install once the landing markup is mounted, detach on unmount
    use_effect_with_deps(
        move |_| {
            let installed = dom::document()
                .map(|document| EffectsConfig::load(&document))
                .and_then(|config| effects::install(&config));

            let effects = match installed {
                Ok(effects) => Some(effects),
                Err(e) => {
                    error!("Page effects unavailable: {}", e);
                    None
                }
            };
            move || drop(effects)
        },
        (),
    );

    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page effects");
    yew::Renderer::<App>::new().render();
}
