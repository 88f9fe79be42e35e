use banana_ui::SignUpPage;
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/signup")]
    SignUp {},
}

#[component]
fn Home() -> Element {
    rsx! {
        Link { to: Route::SignUp {}, "Create an account" }
    }
}

#[component]
fn SignUp() -> Element {
    rsx! {
        SignUpPage {}
    }
}
