use crate::{
    animation::segment::PropertySpec,
    dom::ElementQuery,
    engine::{AnimationEngine, AnimationSpec, Timeline, TimelineEngine, TimelineOptions},
    foundation::core::Movement,
    foundation::error::QuestResult,
    geometry::resolver::{movement_between, resolve_anchor},
    party::assembler::{Participant, assemble_party},
    plan::path::plan_movement,
    plan::stagger::stagger_delay,
    quest::config::QuestConfig,
};

/// Everything computed for one participant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParticipantPlan<E> {
    pub participant: Participant<E>,
    /// Horizontal travel, start anchor to end anchor.
    pub x: Movement,
    /// Vertical travel, start anchor to end anchor.
    pub y: Movement,
    pub stagger_delay: f64,
    pub spec: AnimationSpec,
}

/// Descriptors for a whole party, in index order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct QuestPlan<E> {
    pub participants: Vec<ParticipantPlan<E>>,
}

impl<E> QuestPlan<E> {
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Where a participant's start offset is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Offset {
    /// On the descriptor (and inside split legs), for standalone animations.
    Descriptor,
    /// By the caller, e.g. as a timeline insertion offset.
    External,
}

/// Plan every participant without touching the engine.
///
/// An empty party yields an empty plan without resolving the anchors. Any error
/// aborts the whole plan.
#[tracing::instrument(skip_all, fields(path = ?config.path, split = ?config.split))]
pub fn plan_quest<Q: ElementQuery + ?Sized>(
    dom: &Q,
    config: &QuestConfig<Q::Element>,
) -> QuestResult<QuestPlan<Q::Element>> {
    plan_with(dom, config, Offset::Descriptor)
}

fn plan_with<Q: ElementQuery + ?Sized>(
    dom: &Q,
    config: &QuestConfig<Q::Element>,
    offset: Offset,
) -> QuestResult<QuestPlan<Q::Element>> {
    config.validate()?;

    let party = assemble_party(dom, &config.members, &config.parties, config.singleton)?;
    if party.is_empty() {
        tracing::debug!("party resolved to no participants");
        return Ok(QuestPlan {
            participants: Vec::new(),
        });
    }

    let start = resolve_anchor(dom, &config.start)?;
    let end = resolve_anchor(dom, &config.end)?;
    let total = party.len();

    let mut participants = Vec::with_capacity(total);
    for participant in party {
        let (x, y) = movement_between(dom, &start, &end, &participant.element)?;
        let stagger = stagger_delay(participant.index, total, config.duration, config.pace)?;
        let local = match offset {
            Offset::Descriptor => stagger,
            Offset::External => 0.0,
        };
        let axes = plan_movement(x, y, config.duration, local, config.path, config.split)?;

        tracing::debug!(
            index = participant.index,
            x = ?x.as_array(),
            y = ?y.as_array(),
            stagger,
            "planned participant"
        );

        let spec = AnimationSpec {
            x: PropertySpec::from(axes.x),
            y: PropertySpec::from(axes.y),
            duration: config.duration,
            ease: config.path.default_ease(),
            fill: config.colors.clone(),
            background_color: config.colors.clone(),
            delay: local,
            looped: offset == Offset::Descriptor,
        };
        participants.push(ParticipantPlan {
            participant,
            x,
            y,
            stagger_delay: stagger,
            spec,
        });
    }

    Ok(QuestPlan { participants })
}

/// Plan the party and start one looping animation per participant.
///
/// Nothing is dispatched unless every participant planned successfully. The
/// engine owns the animations afterwards.
#[tracing::instrument(skip_all)]
pub fn quest<Q, A>(dom: &Q, engine: &mut A, config: &QuestConfig<Q::Element>) -> QuestResult<()>
where
    Q: ElementQuery + ?Sized,
    A: AnimationEngine<Q::Element> + ?Sized,
{
    let plan = plan_quest(dom, config)?;
    for p in &plan.participants {
        engine.animate(&p.participant.element, &p.spec);
    }
    tracing::debug!(dispatched = plan.len(), "quest dispatched");
    Ok(())
}

/// Plan the party into a single looping timeline, each participant inserted at
/// its stagger offset.
///
/// Returns `None` (and creates no timeline) for an empty party.
#[tracing::instrument(skip_all)]
pub fn quest_timeline<Q, T>(
    dom: &Q,
    engine: &mut T,
    config: &QuestConfig<Q::Element>,
) -> QuestResult<Option<T::Timeline>>
where
    Q: ElementQuery + ?Sized,
    T: TimelineEngine<Q::Element> + ?Sized,
{
    let plan = plan_with(dom, config, Offset::External)?;
    if plan.is_empty() {
        return Ok(None);
    }

    let mut timeline = engine.create_timeline(TimelineOptions { looped: true });
    for p in &plan.participants {
        timeline.add(&p.participant.element, &p.spec, p.stagger_delay);
    }
    tracing::debug!(entries = plan.len(), "timeline built");
    Ok(Some(timeline))
}

#[cfg(test)]
#[path = "../../tests/unit/quest/orchestrator.rs"]
mod tests;
