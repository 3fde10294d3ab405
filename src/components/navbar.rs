use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Receives a section id when a nav item is clicked.
    pub on_navigate: Callback<String>,
}

/// Fixed navbar. Transparent over the hero, switches to a blurred backdrop
/// once the page has scrolled past 50px.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > 50.0);
                                }
                            }
                        }
                    });
                    let attached = window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_ok();
                    Box::new(move || {
                        if attached {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let nav_link = |target: &'static str, label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_| on_navigate.emit(target.to_string()));
        html! {
            <button class="nav-link" {onclick}>{ label }</button>
        }
    };

    let navbar_css = r#"
        .navbar {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 50;
            height: 80px;
            display: flex;
            align-items: center;
            transition: background 0.3s ease, backdrop-filter 0.3s ease;
            background: transparent;
        }
        .navbar.scrolled {
            background: rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(12px);
        }
        .navbar-inner {
            width: 100%;
            max-width: 1280px;
            margin: 0 auto;
            padding: 0 2rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .navbar-brand {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            font-size: 1.875rem;
            font-weight: 700;
            letter-spacing: -0.025em;
            color: var(--foreground);
        }
        .navbar-brand .brand-mark {
            font-size: 1.75rem;
            color: var(--primary);
        }
        .navbar-links {
            display: flex;
            gap: 3rem;
        }
        .nav-link {
            background: none;
            border: none;
            cursor: pointer;
            font-size: 1rem;
            font-weight: 500;
            color: rgba(240, 249, 255, 0.8);
            transition: color 0.2s ease;
        }
        .nav-link:hover {
            color: var(--foreground);
        }
        @media (max-width: 768px) {
            .navbar-links {
                display: none;
            }
        }
    "#;

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then_some("scrolled"))}>
            <style>{ navbar_css }</style>
            <div class="navbar-inner">
                <div class="navbar-brand">
                    <span class="brand-mark">{ "⚓" }</span>
                    <span>{ "AQUAS" }</span>
                </div>
                <div class="navbar-links">
                    { nav_link("hero", "Home") }
                    { nav_link("problem", "Problem") }
                    { nav_link("solution", "Solution") }
                    { nav_link("contact", "Contact") }
                </div>
            </div>
        </nav>
    }
}
