use yew::prelude::*;

use crate::reveal::{use_reveal, DEFAULT_THRESHOLD};

struct Stat {
    icon: &'static str,
    title: &'static str,
    value: &'static str,
    description: &'static str,
}

const STATS: [Stat; 3] = [
    Stat {
        icon: "$",
        title: "Economic Impact",
        value: "$2.7B",
        description: "Florida's 2018 red tide caused $2.7B in losses. HABs cost $50M \
            annually in fisheries, tourism, and public health damages across the U.S.",
    },
    Stat {
        icon: "♥",
        title: "Health Crisis",
        value: "200+",
        description: "Toxin-producing microalgae species release harmful compounds like \
            microcystins and brevetoxins that threaten human and marine health.",
    },
    Stat {
        icon: "⚠",
        title: "Dead Zones",
        value: "400+",
        description: "Oceanic dead zones cover 245,000 km² worldwide. The Gulf of Mexico \
            alone sees seasonal hypoxic zones reaching 14,000 km² annually.",
    },
];

#[function_component(ProblemSection)]
pub fn problem_section() -> Html {
    let section_ref = use_reveal(DEFAULT_THRESHOLD);

    let problem_css = r#"
        .problem-section {
            min-height: calc(100vh - 80px);
            max-height: calc(100vh - 80px);
            background: var(--surface);
        }
        .problem-inner {
            max-width: 1280px;
            margin: 0 auto;
            padding: 3rem 2rem 1rem;
            height: 100%;
            display: flex;
            flex-direction: column;
        }
        .problem-header {
            text-align: center;
            margin-bottom: 1.5rem;
        }
        .problem-header h2 {
            font-size: clamp(1.5rem, 3.5vw, 2.5rem);
            font-weight: 700;
            line-height: 1.2;
            margin-bottom: 0.75rem;
            color: var(--foreground);
        }
        .problem-header h2 .threat {
            display: block;
            margin-top: 0.25rem;
            color: var(--destructive);
        }
        .problem-header p {
            font-size: clamp(0.85rem, 1.8vw, 1.1rem);
            color: var(--muted-foreground);
            max-width: 56rem;
            margin: 0 auto;
            line-height: 1.6;
        }
        .stats-grid {
            display: grid;
            gap: 1rem;
            flex: 1;
            min-height: 0;
            margin-bottom: 1rem;
        }
        .stat-card {
            background: rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(12px);
            border: 1px solid rgba(255, 255, 255, 0.2);
            border-radius: 1rem;
            padding: 1.5rem;
            text-align: center;
            display: flex;
            flex-direction: column;
            transition: all 0.3s ease;
        }
        .stat-card:hover {
            background: rgba(255, 255, 255, 0.2);
            transform: scale(1.02);
            box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3);
        }
        .stat-card .stat-heading {
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 0.5rem;
            margin-bottom: 0.75rem;
            font-weight: 600;
            font-size: clamp(0.9rem, 1.5vw, 1.125rem);
            color: var(--foreground);
        }
        .stat-card .stat-icon {
            color: var(--accent);
        }
        .stat-card .stat-value {
            font-size: clamp(1.25rem, 2.5vw, 1.875rem);
            font-weight: 700;
            margin-bottom: 0.75rem;
            color: var(--primary);
        }
        .stat-card p {
            font-size: clamp(0.7rem, 1.1vw, 0.85rem);
            color: var(--muted-foreground);
            line-height: 1.6;
            flex: 1;
        }
        .problem-callout {
            background: rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(12px);
            border: 1px solid rgba(255, 255, 255, 0.2);
            border-radius: 1rem;
            padding: 1.5rem;
            text-align: center;
            transition: all 0.3s ease;
        }
        .problem-callout:hover {
            background: rgba(255, 255, 255, 0.2);
        }
        .problem-callout h3 {
            font-size: clamp(1rem, 1.8vw, 1.25rem);
            font-weight: 700;
            margin-bottom: 0.5rem;
            color: var(--foreground);
        }
        .problem-callout p {
            font-size: clamp(0.75rem, 1.2vw, 0.9rem);
            color: var(--muted-foreground);
            max-width: 48rem;
            margin: 0 auto;
            line-height: 1.6;
        }
        @media (min-width: 1024px) {
            .stats-grid { grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
        }
    "#;

    html! {
        <section
            id="problem"
            ref={section_ref}
            class="problem-section fade-in scroll-snap-section"
        >
            <style>{ problem_css }</style>
            <div class="problem-inner">
                <div class="problem-header">
                    <h2>
                        { "The Growing Threat of" }
                        <span class="threat">{ "Harmful Algal Blooms" }</span>
                    </h2>
                    <p>
                        { "Algal blooms are rapidly expanding across New York's waterways, \
                           affecting city parks, water treatment plants, fisheries, and ports. \
                           Current manned sampling methods are laborious, costly, and cannot \
                           scale to monitor HABs at the scope over which they are occurring." }
                    </p>
                </div>
                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat-card">
                            <div class="stat-heading">
                                <span class="stat-icon">{ stat.icon }</span>
                                <h3>{ stat.title }</h3>
                            </div>
                            <div class="stat-value">{ stat.value }</div>
                            <p>{ stat.description }</p>
                        </div>
                    }) }
                </div>
                <div class="problem-callout">
                    <h3>{ "Current manned sampling is failing us" }</h3>
                    <p>
                        { "Traditional manned shipboard surveys are laborious, costly, and \
                           temporally biased. They cannot be scaled to monitor HABs at the \
                           global scope over which they are occurring. We need an autonomous \
                           approach that can provide daily monitoring at a low cost." }
                    </p>
                </div>
            </div>
        </section>
    }
}
