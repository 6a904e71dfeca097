#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::sync::OnceLock;

use dioxus::prelude::*;
use log::{LevelFilter, error};

use forma_domain as domain;
use forma_storage as storage;
use forma_web_app as web_app;

use component::navbar::Navbar;
use page::{exercise_request::ExerciseRequest, log::Log, not_found::NotFound};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    ExerciseRequest {},
    #[route("/log")]
    Log {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

static CONFIG: OnceLock<web_app::Config> = OnceLock::new();

static DOMAIN_SERVICE: GlobalSignal<
    domain::Service<storage::rest::REST<storage::rest::GlooNetSendRequest>>,
> = Signal::global(|| domain::Service::new(storage::rest::REST::new(&config().backend_url)));
static WEB_APP_SERVICE: GlobalSignal<web_app::Service<storage::local_storage::LocalStorage>> =
    Signal::global(|| web_app::Service::new(storage::local_storage::LocalStorage));

fn main() {
    let config = web_app::Config::from_env();
    init_logging(
        config
            .as_ref()
            .map_or(LevelFilter::Info, |config| config.log_level),
    );
    match config {
        Ok(config) => {
            let _ = CONFIG.set(config);
        }
        Err(err) => error!("failed to load configuration: {err}"),
    }
    dioxus::launch(App);
}

fn init_logging(level: LevelFilter) {
    let _ = web_app::log::init(Box::new(storage::local_storage::LocalStorage), level);
}

fn config() -> &'static web_app::Config {
    CONFIG.get_or_init(web_app::Config::default)
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        An unexpected error occurred and the form cannot be used anymore.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Reload page</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-desktop py-4",
            Router::<Route> {},
        }
        Footer {}
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer has-text-centered has-text-grey is-size-7 py-4",
            "Forma {web_app::VERSION}"
        }
    }
}
