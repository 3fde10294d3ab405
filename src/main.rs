mod components;
mod config;
mod pages;
mod reveal;
mod scroll;
mod utils;

use pages::index::Index;

fn main() {
    yew::Renderer::<Index>::new().render();
}
