use yew::prelude::*;

use crate::reveal::{use_reveal, DEFAULT_THRESHOLD};

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "◎",
        title: "Environmental Sensing",
        description: "Deployment-ready sensor buoy with 5 calibrated environmental sensors \
            (TDS, TDO, Temperature, pH, Turbidity) and power-optimized microcontrollers.",
    },
    Feature {
        icon: "≈",
        title: "Water Sampling System",
        description: "Autonomous water sampling with solenoid-controlled flow to collect \
            HAB-rich samples for ground-truth diagnosis and rapid ML model training.",
    },
    Feature {
        icon: "◉",
        title: "Dispersal System",
        description: "Novel algaecide deployment system for targeted treatment of harmful \
            algal blooms, minimizing environmental impact while maximizing effectiveness.",
    },
    Feature {
        icon: "⚡",
        title: "Autonomous Navigation",
        description: "LiDAR and computer vision obstacle detection and avoidance, with \
            real-time data transmission to our host site for continuous monitoring.",
    },
];

#[function_component(SolutionSection)]
pub fn solution_section() -> Html {
    let section_ref = use_reveal(DEFAULT_THRESHOLD);

    let solution_css = r#"
        .solution-section {
            min-height: calc(100vh - 80px);
            max-height: calc(100vh - 80px);
            background: var(--background);
        }
        .solution-inner {
            max-width: 1280px;
            margin: 0 auto;
            padding: 3rem 2rem 1rem;
            height: 100%;
            display: flex;
            flex-direction: column;
        }
        .solution-header {
            text-align: center;
            margin-bottom: 2rem;
        }
        .solution-header h2 {
            font-size: clamp(2rem, 4vw, 3.5rem);
            font-weight: 700;
            line-height: 1.2;
            margin-bottom: 1rem;
            color: var(--foreground);
        }
        .solution-header h2 .highlight {
            display: block;
            margin-top: 0.5rem;
            color: var(--primary);
        }
        .solution-header p {
            font-size: clamp(0.9rem, 1.8vw, 1.25rem);
            font-weight: 300;
            color: var(--muted-foreground);
            max-width: 56rem;
            margin: 0 auto;
            line-height: 1.6;
        }
        .features-grid {
            display: grid;
            gap: 1.25rem;
            flex: 1;
            min-height: 0;
        }
        .feature-card {
            background: rgba(255, 255, 255, 0.06);
            border: 1px solid rgba(255, 255, 255, 0.15);
            border-radius: 1rem;
            padding: 1.5rem;
            transition: all 0.3s ease;
        }
        .feature-card:hover {
            background: rgba(255, 255, 255, 0.12);
            transform: scale(1.02);
        }
        .feature-card .feature-icon {
            font-size: 2.25rem;
            color: var(--secondary);
            margin-bottom: 0.75rem;
            display: block;
        }
        .feature-card h3 {
            font-size: clamp(1rem, 1.6vw, 1.25rem);
            font-weight: 600;
            margin-bottom: 0.5rem;
            color: var(--foreground);
        }
        .feature-card p {
            font-size: clamp(0.8rem, 1.2vw, 0.95rem);
            color: var(--muted-foreground);
            line-height: 1.6;
        }
        @media (min-width: 768px) {
            .features-grid { grid-template-columns: repeat(2, 1fr); }
        }
    "#;

    html! {
        <section
            id="solution"
            ref={section_ref}
            class="solution-section fade-in scroll-snap-section"
        >
            <style>{ solution_css }</style>
            <div class="solution-inner">
                <div class="solution-header">
                    <h2>
                        { "Autonomous Water Quality Monitoring" }
                        <span class="highlight">{ "with AQUAS Technology" }</span>
                    </h2>
                    <p>
                        { "A self-piloting surface vehicle that detects, samples, and treats \
                           harmful algal blooms before they spread, replacing sporadic manual \
                           surveys with continuous, low-cost coverage." }
                    </p>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <span class="feature-icon">{ feature.icon }</span>
                            <h3>{ feature.title }</h3>
                            <p>{ feature.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
