use yew::prelude::*;

use crate::components::career_chart::CareerChart;
use crate::components::revealed::Revealed;
use crate::content::section::Section;
use crate::content::stagger::{Stagger, INTERNATIONAL_MATCHES, IPL_MATCHES, STAT_CARDS};
use crate::content::statistics::{
    FormatStats, MatchResult, Outcome, CAREER_RUNS, FORMAT_STATS, HIGHLIGHTS, RECENT_INTERNATIONAL,
    RECENT_IPL,
};
use crate::hooks::reveal::use_reveal;

#[derive(Properties, PartialEq)]
struct StatCardProps {
    stats: FormatStats,
    shown: bool,
    delay_ms: u32,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let stats = &props.stats;
    let cells = [
        ("Matches", stats.matches),
        ("Runs", stats.runs),
        ("Average", stats.average),
        ("Centuries", stats.centuries),
    ];

    html! {
        <Revealed shown={props.shown} delay_ms={props.delay_ms} class="card stat-card">
            <h3>{ stats.title }</h3>
            <div class="stat-grid">
                { for cells.iter().map(|(label, value)| html! {
                    <div key={*label}>
                        <p class="stat-label">{ *label }</p>
                        <p class="stat-value">{ *value }</p>
                    </div>
                }) }
            </div>
            <div class="stat-footer">
                <div>
                    <p class="stat-label">{"Highest Score"}</p>
                    <p class="stat-value small">{ stats.high_score }</p>
                </div>
                <span class="pill">{ stats.format }</span>
            </div>
        </Revealed>
    }
}

fn outcome_class(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => "result-won",
        Outcome::Lost => "result-lost",
        Outcome::Other => "result-other",
    }
}

#[derive(Properties, PartialEq)]
struct MatchListProps {
    title: &'static str,
    matches: &'static [MatchResult],
    stagger: Stagger,
    shown: bool,
    delay_ms: u32,
}

#[function_component(MatchList)]
fn match_list(props: &MatchListProps) -> Html {
    html! {
        <Revealed shown={props.shown} delay_ms={props.delay_ms} class="card match-panel">
            <h3>{ props.title }</h3>
            { for props.matches.iter().enumerate().map(|(i, game)| html! {
                <Revealed key={i} shown={props.shown} delay_ms={props.stagger.delay(i)} class="match-card">
                    <div class="match-header">
                        <span class="match-date">{ game.date }</span>
                        <span class="pill">{ game.tournament }</span>
                    </div>
                    <h4>{ format!("vs {}", game.opponent) }</h4>
                    <p class="match-score">{ game.score }</p>
                    <p class={classes!("match-result", outcome_class(game.outcome()))}>{ game.result }</p>
                </Revealed>
            }) }
        </Revealed>
    }
}

#[function_component(Statistics)]
pub fn statistics() -> Html {
    let section_ref = use_node_ref();
    let shown = use_reveal(section_ref.clone());

    html! {
        <section id={Section::Statistics.anchor()} ref={section_ref} class="section statistics">
            <style>
                {r#"
                    .statistics {
                        background: linear-gradient(to bottom, #eff6ff, #dbeafe);
                    }
                    .chart-panel {
                        padding: 2rem;
                        margin-bottom: 3rem;
                    }
                    .stat-cards {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .stat-card {
                        padding: 1.5rem;
                    }
                    .stat-card h3 {
                        margin-top: 0;
                        padding-bottom: 0.5rem;
                        border-bottom: 1px solid #e5e7eb;
                        color: #1e3a8a;
                    }
                    .stat-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .stat-label {
                        margin: 0;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    .stat-value {
                        margin: 0;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #1d4ed8;
                    }
                    .stat-value.small {
                        font-size: 1.25rem;
                    }
                    .stat-footer {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-top: 1rem;
                        padding-top: 1rem;
                        border-top: 1px solid #e5e7eb;
                    }
                    .pill {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #dbeafe;
                        color: #1e40af;
                        font-size: 0.75rem;
                        font-weight: 500;
                    }
                    .match-panels {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        margin-top: 4rem;
                    }
                    .match-panel {
                        padding: 2rem;
                    }
                    .match-panel h3 {
                        margin-top: 0;
                        color: #1e3a8a;
                    }
                    .match-card {
                        padding: 1rem;
                        margin-bottom: 1rem;
                        border-radius: 0.5rem;
                        background: white;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    }
                    .match-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                    }
                    .match-date {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .match-card h4 {
                        margin: 0.5rem 0 0.25rem;
                        color: #1e3a8a;
                    }
                    .match-score {
                        margin: 0;
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #1d4ed8;
                    }
                    .match-result {
                        margin: 0.25rem 0 0;
                        font-size: 0.875rem;
                    }
                    .result-won { color: #16a34a; }
                    .result-lost { color: #dc2626; }
                    .result-other { color: #4b5563; }
                    .highlights {
                        margin-top: 4rem;
                        padding: 2rem;
                    }
                    .highlights h3 {
                        margin-top: 0;
                        padding-bottom: 0.75rem;
                        border-bottom: 1px solid #e5e7eb;
                        color: #1e3a8a;
                    }
                    .highlight-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .highlight {
                        padding: 1.25rem;
                        border-radius: 0.5rem;
                        border-left: 4px solid #f97316;
                        background: #fff7ed;
                    }
                    .highlight h4 {
                        margin: 0 0 0.5rem;
                        color: #1e40af;
                    }
                    @media (max-width: 1024px) {
                        .stat-cards, .highlight-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                        .match-panels {
                            grid-template-columns: 1fr;
                        }
                    }
                    @media (max-width: 640px) {
                        .stat-cards, .highlight-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <Revealed shown={shown}>
                    <h2 class="section-title"><span>{"Career Statistics"}</span></h2>
                    <p class="section-lead">
                        {"Rohit Sharma has established himself as one of cricket's most prolific run-scorers, with impressive records across all formats of the game."}
                    </p>
                </Revealed>

                <Revealed shown={shown} class="card chart-panel">
                    <CareerChart series={CAREER_RUNS} />
                </Revealed>

                <div class="stat-cards">
                    { for FORMAT_STATS.iter().enumerate().map(|(i, stats)| html! {
                        <StatCard key={stats.format} stats={*stats} shown={shown} delay_ms={STAT_CARDS.delay(i)} />
                    }) }
                </div>

                <div class="match-panels">
                    <MatchList
                        title="Recent International Matches"
                        matches={RECENT_INTERNATIONAL}
                        stagger={INTERNATIONAL_MATCHES}
                        shown={shown}
                        delay_ms={500}
                    />
                    <MatchList
                        title="Recent IPL Matches"
                        matches={RECENT_IPL}
                        stagger={IPL_MATCHES}
                        shown={shown}
                        delay_ms={700}
                    />
                </div>

                <div class="card highlights">
                    <h3>{"Career Highlights"}</h3>
                    <div class="highlight-grid">
                        { for HIGHLIGHTS.iter().map(|highlight| html! {
                            <div key={highlight.title} class="highlight">
                                <h4>{ highlight.title }</h4>
                                <p>{ highlight.body }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_colours() {
        assert_eq!(outcome_class(RECENT_IPL[0].outcome()), "result-won");
        assert_eq!(outcome_class(RECENT_IPL[1].outcome()), "result-lost");
        assert_eq!(outcome_class(Outcome::Other), "result-other");
    }
}
