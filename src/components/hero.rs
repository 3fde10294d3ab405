use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::reveal::use_reveal;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<String>,
}

/// Full-viewport hero. The scroll indicator fades after five seconds, or as
/// soon as the user starts scrolling.
#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let section_ref = use_reveal(0.1);
    let show_indicator = use_state(|| true);

    {
        let show_indicator = show_indicator.clone();
        use_effect_with_deps(
            move |_| {
                let timer = {
                    let show_indicator = show_indicator.clone();
                    Timeout::new(5_000, move || show_indicator.set(false))
                };
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let show_indicator = show_indicator.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    if scroll_y > 50.0 {
                                        show_indicator.set(false);
                                    }
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
                move || {
                    drop(timer);
                    destructor();
                }
            },
            (),
        );
    }

    let cta = |target: &'static str, label: &'static str, class: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_| on_navigate.emit(target.to_string()));
        html! {
            <button {class} {onclick}>{ label }</button>
        }
    };

    let hero_css = r#"
        .hero-section {
            position: relative;
            min-height: 100vh;
            display: flex;
            align-items: center;
            overflow: hidden;
            background:
                linear-gradient(to right,
                    rgba(6, 20, 38, 0.9),
                    rgba(6, 20, 38, 0.7),
                    rgba(6, 20, 38, 0.4)),
                url("/frontView.jpeg") center / cover no-repeat;
        }
        .hero-content {
            position: relative;
            z-index: 10;
            max-width: 1280px;
            margin: 0 auto;
            padding: 0 2rem;
        }
        .hero-title {
            font-size: clamp(4rem, 10vw, 8rem);
            font-weight: 700;
            line-height: 0.9;
            letter-spacing: -0.025em;
            margin-bottom: 2rem;
            color: var(--foreground);
            text-shadow: 0 6px 12px rgba(0, 0, 0, 0.8), 0 3px 6px rgba(0, 0, 0, 0.5);
        }
        .hero-subtitle {
            font-size: clamp(1.5rem, 3vw, 2.25rem);
            font-weight: 500;
            margin-bottom: 3rem;
            color: var(--secondary);
            line-height: 1.6;
            text-shadow: 0 4px 8px rgba(0, 0, 0, 0.7), 0 2px 4px rgba(0, 0, 0, 0.4);
        }
        .hero-ctas {
            display: flex;
            flex-direction: column;
            gap: 1.5rem;
        }
        .btn-glass {
            background: rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(12px);
            border: 1px solid rgba(255, 255, 255, 0.2);
            color: var(--foreground);
            padding: 1.25rem 2.5rem;
            border-radius: 1rem;
            font-weight: 600;
            font-size: 1.125rem;
            cursor: pointer;
            transition: all 0.3s ease;
        }
        .btn-glass:hover {
            background: rgba(255, 255, 255, 0.2);
            transform: scale(1.02);
            box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3);
        }
        .scroll-indicator {
            position: absolute;
            bottom: 3rem;
            left: 50%;
            transform: translateX(-50%);
            color: rgba(240, 249, 255, 0.6);
            display: flex;
            flex-direction: column;
            align-items: center;
            transition: opacity 1s ease;
            animation: bounce 2s infinite;
        }
        .scroll-indicator.hidden {
            opacity: 0;
        }
        .scroll-indicator .label {
            font-size: 0.875rem;
            font-weight: 500;
            margin-bottom: 0.75rem;
            text-shadow: 0 2px 4px rgba(0, 0, 0, 0.6);
        }
        .scroll-indicator .mouse {
            width: 1.5rem;
            height: 2.5rem;
            border: 2px solid rgba(240, 249, 255, 0.3);
            border-radius: 1rem;
            display: flex;
            justify-content: center;
        }
        .scroll-indicator .wheel {
            width: 0.25rem;
            height: 0.75rem;
            margin-top: 0.5rem;
            border-radius: 0.25rem;
            background: rgba(240, 249, 255, 0.4);
        }
        @keyframes bounce {
            0%, 100% { transform: translate(-50%, 0); }
            50% { transform: translate(-50%, -10px); }
        }
        @media (min-width: 640px) {
            .hero-ctas { flex-direction: row; }
        }
    "#;

    html! {
        <section
            id="hero"
            ref={section_ref}
            class="hero-section fade-in scroll-snap-section"
        >
            <style>{ hero_css }</style>
            <div class="hero-content">
                <h1 class="hero-title">{ "AQUAS" }</h1>
                <h2 class="hero-subtitle">{ "Autonomous HAB Detection and Cleaning" }</h2>
                <div class="hero-ctas">
                    { cta("solution", "Discover Our Technology", "btn-ocean") }
                    { cta("contact", "Join Our Mission", "btn-glass") }
                </div>
            </div>
            <div class={classes!(
                "scroll-indicator",
                (!*show_indicator).then_some("hidden"),
            )}>
                <span class="label">{ "Scroll Down" }</span>
                <div class="mouse"><div class="wheel"></div></div>
            </div>
        </section>
    }
}
