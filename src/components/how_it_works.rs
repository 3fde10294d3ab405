use yew::prelude::*;

use crate::reveal::{use_reveal, DEFAULT_THRESHOLD};

struct Step {
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        title: "Environmental Sensing",
        description: "Five calibrated sensors continuously measure TDS, dissolved oxygen, \
            temperature, pH, and turbidity as the buoy patrols a waterway.",
    },
    Step {
        title: "Bloom Detection",
        description: "Onboard models flag readings consistent with a developing bloom and \
            steer the vehicle toward the affected area for a closer look.",
    },
    Step {
        title: "Water Sampling",
        description: "A solenoid-controlled sampling system collects HAB-rich water for \
            ground-truth lab diagnosis, feeding back into model training.",
    },
    Step {
        title: "Targeted Treatment",
        description: "Once a bloom is confirmed, the dispersal system applies algaecide \
            precisely where it is needed, with live telemetry back to shore.",
    },
];

#[function_component(HowItWorksSection)]
pub fn how_it_works_section() -> Html {
    let section_ref = use_reveal(DEFAULT_THRESHOLD);

    let works_css = r#"
        .works-section {
            min-height: calc(100vh - 80px);
            max-height: calc(100vh - 80px);
            background: var(--surface);
        }
        .works-inner {
            max-width: 1280px;
            margin: 0 auto;
            padding: 3rem 2rem 1rem;
            height: 100%;
            display: flex;
            flex-direction: column;
        }
        .works-panel {
            background: rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(12px);
            border: 1px solid rgba(255, 255, 255, 0.2);
            border-radius: 1.5rem;
            padding: 2rem;
            flex: 1;
            min-height: 0;
            display: grid;
            gap: 2rem;
            align-items: center;
        }
        .works-panel h3 {
            font-size: clamp(1.75rem, 3vw, 2.5rem);
            font-weight: 700;
            margin-bottom: 1.5rem;
            color: var(--foreground);
        }
        .works-steps {
            display: flex;
            flex-direction: column;
            gap: 1.5rem;
        }
        .works-step {
            display: flex;
            align-items: flex-start;
            gap: 1rem;
        }
        .works-step .step-number {
            width: 2rem;
            height: 2rem;
            border-radius: 50%;
            background: var(--primary);
            color: var(--background);
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 0.875rem;
            font-weight: 700;
            margin-top: 0.25rem;
            flex-shrink: 0;
        }
        .works-step h4 {
            font-size: clamp(0.95rem, 1.6vw, 1.125rem);
            font-weight: 600;
            margin-bottom: 0.5rem;
            color: var(--foreground);
        }
        .works-step p {
            font-size: clamp(0.8rem, 1.2vw, 0.95rem);
            color: var(--muted-foreground);
            line-height: 1.6;
        }
        .works-figure {
            display: none;
            height: 100%;
            border-radius: 1rem;
            background: url("/buoyDiagram.jpeg") center / contain no-repeat;
        }
        @media (min-width: 1024px) {
            .works-panel { grid-template-columns: repeat(2, 1fr); padding: 3rem; }
            .works-figure { display: block; }
        }
    "#;

    html! {
        <section
            id="how-aquas-works"
            ref={section_ref}
            class="works-section fade-in scroll-snap-section"
        >
            <style>{ works_css }</style>
            <div class="works-inner">
                <div class="works-panel">
                    <div>
                        <h3>{ "How AQUAS Works" }</h3>
                        <div class="works-steps">
                            { for STEPS.iter().enumerate().map(|(index, step)| html! {
                                <div class="works-step">
                                    <div class="step-number">{ index + 1 }</div>
                                    <div>
                                        <h4>{ step.title }</h4>
                                        <p>{ step.description }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="works-figure"></div>
                </div>
            </div>
        </section>
    }
}
