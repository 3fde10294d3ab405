use yew::prelude::*;

use crate::components::{
    ContactSection, HeroSection, HowItWorksSection, Navbar, ProblemSection, SolutionSection,
};
use crate::scroll::{ScrollController, SnapConfig};

/// The single marketing page: fixed navbar followed by the content sections
/// in document order. Owns the page's `ScrollController`; the reveal
/// observers are owned by the sections themselves.
#[function_component(Index)]
pub fn index() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let controller = use_memo(|_| ScrollController::new(SnapConfig::default()), ());

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                controller.start();
                move || controller.stop()
            },
            (),
        );
    }

    let on_navigate = {
        let controller = controller.clone();
        Callback::from(move |section_id: String| controller.scroll_to_section(&section_id))
    };

    html! {
        <div class="page">
            <Navbar on_navigate={on_navigate.clone()} />
            <HeroSection on_navigate={on_navigate} />
            <ProblemSection />
            <SolutionSection />
            <HowItWorksSection />
            <ContactSection />
        </div>
    }
}
