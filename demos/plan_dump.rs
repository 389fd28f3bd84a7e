use party_quest::{DomSnapshot, NodeId, QuestConfig, RecordingEngine, quest, quest_timeline};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let dom = DomSnapshot::from_json(include_str!("../tests/data/stage.json"))?;
    let mut config = QuestConfig::<NodeId>::builder("#a", "#c")
        .member("span")
        .party(".party")
        .duration(1500.0)
        .colors(["#000", "#555"])
        .build()?;

    for path in ["cubic", "linear"] {
        config.path = party_quest::PathMode::parse_lenient(path);
        let mut engine = RecordingEngine::new();
        quest(&dom, &mut engine, &config)?;
        println!("== {path}: {} dispatches", engine.dispatches.len());
        println!("{}", engine.to_json()?);
        if let Some(first) = engine.dispatches.first() {
            let end = first.spec.end_time();
            for step in 0..=4 {
                let t = end * f64::from(step) / 4.0;
                if let Some(p) = first.spec.position_at(t) {
                    println!("   t={t:>6.0} ms  x={:>7.2}  y={:>7.2}", p.x, p.y);
                }
            }
        }
    }

    let mut engine = RecordingEngine::new();
    if let Some(timeline) = quest_timeline(&dom, &mut engine, &config)? {
        println!(
            "== timeline: {} entries, span {} ms",
            timeline.entries.len(),
            timeline.span()
        );
    }

    Ok(())
}
