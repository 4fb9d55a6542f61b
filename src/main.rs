mod config;
mod contact;
mod content;
mod counter;
mod modal;
mod nav;
mod reveal;
mod routes;
mod scroll;
mod sections;
mod typed;
mod visits;

fn main() {
    dioxus::launch(routes::App);
}
