use crate::domain::a001_catalog::ui::CatalogPage;
use crate::domain::a001_catalog::CatalogViewModel;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded catalog config is invalid: {}", e);
            return view! {
                <div class="warning-box">
                    <span>"Configuration error: "{e.to_string()}</span>
                </div>
            }
            .into_any();
        }
    };

    // One view model per session, shared with every catalog component.
    let vm = CatalogViewModel::new(config);
    provide_context(vm);
    vm.load_catalog();

    view! {
        <CatalogPage />
    }
    .into_any()
}
